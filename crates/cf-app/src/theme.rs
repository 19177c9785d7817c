use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    LightPink,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::LightPink => "light-pink",
            Theme::System => "system",
        }
    }

    /// Unknown values fall back to `System`.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "light-pink" => Theme::LightPink,
            _ => Theme::System,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new(current: Theme) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
    }

    /// Light and dark swap. Any other theme resolves to the opposite of the
    /// system preference.
    pub fn toggle(&mut self, prefers_dark: bool) -> Theme {
        self.current = match self.current {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
            Theme::LightPink => Theme::Dark,
            Theme::System if prefers_dark => Theme::Light,
            Theme::System => Theme::Dark,
        };
        self.current
    }
}
