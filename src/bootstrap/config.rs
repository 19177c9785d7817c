//! # Configuration loader
//!
//! Reads a TOML file and maps it onto [`FeedConfig`]. Pure data loading:
//! missing keys take the DTO defaults, nothing is validated here.

use anyhow::Context;
use std::path::Path;
use cf_core::config::FeedConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<FeedConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    FeedConfig::from_toml(&toml_value)
}

/// Loads `config_path` when given, otherwise the defaults.
pub fn load_config_or_default(config_path: Option<&Path>) -> anyhow::Result<FeedConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(FeedConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [feed]
            capacity = 25
            load_limit = 40

            [runtime]
            channel_size = 8
            backend_timeout_ms = 750

            [ui]
            toast_duration_ms = 3000
            locale = "en"
            theme = "dark"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.capacity, 25);
        assert_eq!(config.load_limit, 40);
        assert_eq!(config.channel_size, 8);
        assert_eq!(config.backend_timeout_ms, 750);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.locale, "en");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_load_config_fills_missing_sections() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[feed]\ncapacity = 5\n").unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.capacity, 5);
        assert_eq!(config.load_limit, FeedConfig::default().load_limit);
        assert_eq!(config.toast_duration_ms, 2_000);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[feed\ncapacity = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Path::new("/nonexistent/clipfeed.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(load_config_or_default(None).unwrap(), FeedConfig::default());
    }
}
