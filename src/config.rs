//! Build-time Configuration
//!
//! Values are baked in at compile time (`SPECIALISTS_API_URL`,
//! `SPECIALISTS_LOG_LEVEL`); there is no runtime override.

use log::LevelFilter;

/// Backend used when `SPECIALISTS_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn new(api_base_url: &str, log_level: LevelFilter) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self {
            api_base_url: api_base_url.to_string(),
            log_level,
        }
    }

    pub fn from_build_env() -> Self {
        let level = option_env!("SPECIALISTS_LOG_LEVEL")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self::new(option_env!("SPECIALISTS_API_URL").unwrap_or(DEFAULT_API_BASE_URL), level)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, LevelFilter::Info)
    }
}
