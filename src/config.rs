//! Build-time Configuration
//!
//! Values are baked in at compile time from environment variables:
//! `INVOICE_API_BASE_URL` and `INVOICE_LOG_LEVEL`.

use log::{Level, LevelFilter};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Invoice service base address, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("INVOICE_API_BASE_URL"),
            option_env!("INVOICE_LOG_LEVEL"),
        )
    }

    /// Blank or invalid values fall back to the defaults
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_base_url, log_level }
    }

    /// Level for the console logger; `None` when logging is off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://api.example.com/v1/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("chatty"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_console_level() {
        assert_eq!(AppConfig::default().console_level(), Some(Level::Info));
        let verbose = AppConfig::from_values(None, Some("trace"));
        assert_eq!(verbose.console_level(), Some(Level::Trace));
        let off = AppConfig::from_values(None, Some("off"));
        assert_eq!(off.console_level(), None);
    }
}
