//! Breach service configuration.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the range API.
pub const URL_ENV: &str = "PWD_GUARD_PWNED_URL";
/// Whole seconds before a lookup is abandoned.
pub const TIMEOUT_ENV: &str = "PWD_GUARD_PWNED_TIMEOUT_SECS";
/// Whether to ask the service to pad responses (`true`/`false`).
pub const PADDING_ENV: &str = "PWD_GUARD_PWNED_PADDING";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sends `Add-Padding: true` so the response size says nothing about the prefix.
    pub padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            padding: true,
        }
    }
}

impl BreachConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    /// Reads overrides from the environment; unset variables keep defaults.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the URL is not http(s)
    /// - the timeout is not a positive integer
    /// - padding is not a recognised boolean
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(URL_ENV) {
            let url = url.trim();
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(invalid(URL_ENV, url));
            }
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => return Err(invalid(TIMEOUT_ENV, &secs)),
            }
        }

        if let Ok(padding) = std::env::var(PADDING_ENV) {
            config.padding = match padding.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(invalid(PADDING_ENV, &padding)),
            };
        }

        Ok(config)
    }

    /// Full URL for one prefix, `{base_url}/range/{prefix}`.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        remove_env(URL_ENV);
        remove_env(TIMEOUT_ENV);
        remove_env(PADDING_ENV);
    }

    #[test]
    fn test_default_config() {
        let config = BreachConfig::default();
        assert_eq!(config.base_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.padding);
    }

    #[test]
    fn test_range_url() {
        let config = BreachConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.range_url("5BAA6"), "http://localhost:8080/range/5BAA6");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(BreachConfig::from_env().unwrap(), BreachConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(URL_ENV, "http://127.0.0.1:9000/");
        set_env(TIMEOUT_ENV, "3");
        set_env(PADDING_ENV, "off");

        let config = BreachConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(!config.padding);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_timeout() {
        clear_env();
        set_env(TIMEOUT_ENV, "0");

        assert_eq!(
            BreachConfig::from_env(),
            Err(ConfigError::Invalid {
                key: TIMEOUT_ENV,
                value: "0".to_string()
            })
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_url_and_padding() {
        clear_env();
        set_env(URL_ENV, "ftp://example.com");
        assert!(matches!(BreachConfig::from_env(), Err(ConfigError::Invalid { key: URL_ENV, .. })));

        clear_env();
        set_env(PADDING_ENV, "maybe");
        assert!(matches!(
            BreachConfig::from_env(),
            Err(ConfigError::Invalid { key: PADDING_ENV, .. })
        ));

        clear_env();
    }
}
