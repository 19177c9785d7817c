use crate::clipboard::DEFAULT_CAPACITY;

pub const DEFAULT_LOAD_LIMIT: usize = 100;
pub const DEFAULT_CHANNEL_SIZE: usize = 100;
pub const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2_000;

/// Feed configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Maximum number of unpinned clips kept in memory
    pub capacity: usize,

    /// Number of clips requested on a full reload
    pub load_limit: usize,

    /// Bound of the runtime's event and command channels
    pub channel_size: usize,

    /// Per-call deadline for backend requests
    pub backend_timeout_ms: u64,

    /// How long a toast stays visible
    pub toast_duration_ms: u64,

    /// Locale tag as written in the file (e.g. "en", "zh-CN"); may be empty
    pub locale: String,

    /// Theme name as written in the file; may be empty
    pub theme: String,
}

impl FeedConfig {
    /// Create FeedConfig from TOML value
    ///
    /// Missing keys take the crate defaults. Values are taken as-is: an empty
    /// locale or an unknown theme is a fact for the caller to interpret.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let int = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
        };
        let string = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            capacity: int("feed", "capacity")
                .map(|v| v.max(0) as usize)
                .unwrap_or(DEFAULT_CAPACITY),
            load_limit: int("feed", "load_limit")
                .map(|v| v.max(0) as usize)
                .unwrap_or(DEFAULT_LOAD_LIMIT),
            channel_size: int("runtime", "channel_size")
                .map(|v| v.max(1) as usize)
                .unwrap_or(DEFAULT_CHANNEL_SIZE),
            backend_timeout_ms: int("runtime", "backend_timeout_ms")
                .map(|v| v.max(0) as u64)
                .unwrap_or(DEFAULT_BACKEND_TIMEOUT_MS),
            toast_duration_ms: int("ui", "toast_duration_ms")
                .map(|v| v.max(0) as u64)
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
            locale: string("ui", "locale"),
            theme: string("ui", "theme"),
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_limit: DEFAULT_LOAD_LIMIT,
            channel_size: DEFAULT_CHANNEL_SIZE,
            backend_timeout_ms: DEFAULT_BACKEND_TIMEOUT_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            locale: String::new(),
            theme: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [feed]
            capacity = 30
            load_limit = 60

            [runtime]
            channel_size = 8
            backend_timeout_ms = 250

            [ui]
            toast_duration_ms = 1500
            locale = "en"
            theme = "dark"
            "#,
        )
        .unwrap();

        let config = FeedConfig::from_toml(&value).unwrap();

        assert_eq!(config.capacity, 30);
        assert_eq!(config.load_limit, 60);
        assert_eq!(config.channel_size, 8);
        assert_eq!(config.backend_timeout_ms, 250);
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.locale, "en");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_from_toml_empty_document_uses_defaults() {
        let value: toml::Value = toml::from_str("").unwrap();
        assert_eq!(FeedConfig::from_toml(&value).unwrap(), FeedConfig::default());
    }

    #[test]
    fn test_negative_numbers_do_not_wrap() {
        let value: toml::Value = toml::from_str("[feed]\ncapacity = -5").unwrap();
        assert_eq!(FeedConfig::from_toml(&value).unwrap().capacity, 0);
    }
}
