//! Console Configuration
//!
//! Values are baked in at build time: an optional JSON document
//! (`CONSOLE_CONFIG_JSON`) layered over the defaults, then the single-value
//! overrides `CONSOLE_API_BASE_URL` and `CONSOLE_LOG_LEVEL`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Origin of the REST backend, without trailing slash
    pub api_base_url: String,
    /// Page size of the restaurants table
    pub page_size: u32,
    /// Rows fetched for the dashboard and the restaurant filter dropdown
    pub dashboard_limit: u32,
    /// Page sizes offered by the users table; the first is the default
    pub member_page_sizes: Vec<u32>,
    pub toast_duration_ms: u32,
    pub search_debounce_ms: u32,
    /// Cooldown before an OTP can be resent
    pub otp_resend_secs: u32,
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 20,
            dashboard_limit: 100,
            member_page_sizes: vec![10, 25, 50],
            toast_duration_ms: 3000,
            search_debounce_ms: 500,
            otp_resend_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Defaults overridden by the build environment
    pub fn from_build_env() -> Self {
        let base = match option_env!("CONSOLE_CONFIG_JSON") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] ignoring CONSOLE_CONFIG_JSON: {}", e);
                Self::default()
            }),
            None => Self::default(),
        };
        base.with_overrides(option_env!("CONSOLE_API_BASE_URL"), option_env!("CONSOLE_LOG_LEVEL"))
    }

    fn with_overrides(mut self, api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self.normalized()
    }

    /// Layer a partial JSON document over the defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::normalized)
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if self.member_page_sizes.is_empty() {
            self.member_page_sizes = Self::default().member_page_sizes;
        }
        self
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Absolute URL for an API path starting with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn default_member_page_size(&self) -> u32 {
        self.member_page_sizes.first().copied().unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ConsoleConfig::from_json(r#"{"api_base_url": "https://api.resto.in/", "page_size": 50}"#).unwrap();
        assert_eq!(config.api_base_url, "https://api.resto.in");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.dashboard_limit, 100);
        assert_eq!(config.endpoint("/api/v1/user/"), "https://api.resto.in/api/v1/user/");
    }

    #[test]
    fn test_env_overrides_win_over_json() {
        let config = ConsoleConfig::from_json(r#"{"api_base_url": "https://staging.resto.in", "otp_resend_secs": 30}"#)
            .unwrap()
            .with_overrides(Some("https://api.resto.in/"), None);
        assert_eq!(config.api_base_url, "https://api.resto.in");
        assert_eq!(config.otp_resend_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = ConsoleConfig { log_level: "chatty".into(), ..Default::default() };
        assert_eq!(config.log_level(), LevelFilter::Info);
        let config = ConsoleConfig { log_level: "debug".into(), ..Default::default() };
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_empty_page_sizes_restored() {
        let config = ConsoleConfig::from_json(r#"{"member_page_sizes": []}"#).unwrap();
        assert_eq!(config.default_member_page_size(), 10);
    }
}
