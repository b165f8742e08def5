use serde::Deserialize;
use std::env::vars;
use std::time::Duration;
use ustr::Ustr;

use crate::table::PAGE_SIZE_OPTIONS;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("BACKOFFICE_DEFAULT_PAGE_SIZE must be one of {options:?}, got {0}", options = PAGE_SIZE_OPTIONS)]
    InvalidPageSize(usize),
    #[error("BACKOFFICE_REQUEST_TIMEOUT_SECS must be positive")]
    InvalidTimeout,
    #[error("Failed to read configuration from environment: {0}")]
    Env(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub default_page_size: usize,
}

// Every field is optional so unset variables fall back to the build defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    backoffice_api_base_url: Option<String>,
    backoffice_request_timeout_secs: Option<u64>,
    backoffice_default_page_size: Option<usize>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `BACKOFFICE_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_env::from_iter(vars()).map_err(|e| ConfigError::Env(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_page_size = raw
            .backoffice_default_page_size
            .unwrap_or(defaults.default_page_size);
        if !PAGE_SIZE_OPTIONS.contains(&default_page_size) {
            return Err(ConfigError::InvalidPageSize(default_page_size));
        }

        let request_timeout_secs = raw
            .backoffice_request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs);
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let api_base_url = raw
            .backoffice_api_base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base_url);

        log::info!("Using API base url {api_base_url:?}");
        Ok(Self {
            api_base_url,
            request_timeout_secs,
            default_page_size,
        })
    }

    /// `{base}/api`, or same-origin `/api` when no base is set.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://backoffice-test.netlink.id".to_owned()
            } else if cfg!(feature = "env_staging") {
                "https://backoffice-staging.netlink.id".to_owned()
            } else if cfg!(feature = "env_internal") {
                "https://backoffice-internal.netlink.id".to_owned()
            } else {
                "https://backoffice.netlink.id".to_owned()
            },
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_page_size: crate::table::DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_environment_urls() {
        let config = BusinessConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_url(), Ustr::from("/api"));
        } else if cfg!(feature = "env_test") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://backoffice-test.netlink.id/api")
            );
        } else if cfg!(feature = "env_staging") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://backoffice-staging.netlink.id/api")
            );
        } else if cfg!(feature = "env_internal") {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://backoffice-internal.netlink.id/api")
            );
        } else {
            assert_eq!(
                config.api_url(),
                Ustr::from("https://backoffice.netlink.id/api")
            );
        }
    }

    #[test]
    fn test_empty_base_is_same_origin() {
        assert_eq!(BusinessConfig::new("").api_url(), Ustr::from("/api"));
    }

    #[test]
    fn test_overrides_from_env() {
        let raw: RawConfig = from_iter(vec![
            ("BACKOFFICE_API_BASE_URL", "http://localhost:8080/"),
            ("BACKOFFICE_REQUEST_TIMEOUT_SECS", "5"),
            ("BACKOFFICE_DEFAULT_PAGE_SIZE", "25"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:8080/api"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let raw: RawConfig =
            from_iter(vec![("PATH", "/usr/bin")]).expect("RawConfig should deserialize");
        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_page_size_outside_options_is_rejected() {
        let raw: RawConfig = from_iter(vec![("BACKOFFICE_DEFAULT_PAGE_SIZE", "15")])
            .expect("RawConfig should deserialize");
        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPageSize(15));
        assert_eq!(
            err.to_string(),
            "BACKOFFICE_DEFAULT_PAGE_SIZE must be one of [10, 25, 50, 100], got 15"
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let raw: RawConfig = from_iter(vec![("BACKOFFICE_REQUEST_TIMEOUT_SECS", "0")])
            .expect("RawConfig should deserialize");
        assert_eq!(
            BusinessConfig::from_raw(raw).unwrap_err(),
            ConfigError::InvalidTimeout
        );
    }
}
