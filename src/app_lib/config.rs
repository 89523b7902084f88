//! Client configuration: API endpoint and request timeout. Defaults are
//! overridden by `ALERTSUB_*` environment variables; empty values are ignored
//! so a blank variable never wipes a working default. Command-line flags are
//! applied on top by the CLI. Configuration values are public; do not store
//! secrets here.

use std::{env, time::Duration};

pub const ENV_API_BASE_URL: &str = "ALERTSUB_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "ALERTSUB_TIMEOUT_MS";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout (milliseconds) applied to all HTTP helpers.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Loads defaults and applies environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_overrides(runtime_config());
        config
    }

    /// Applies the present values of `overrides`, keeping the rest.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(value) = overrides.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.timeout_ms {
            self.request_timeout = Duration::from_millis(value);
        }
    }
}

/// Optional configuration values from the environment or the command line.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Overrides {
    /// Builds overrides from raw values, dropping blanks and unparsable timeouts.
    #[must_use]
    pub fn from_raw(api_base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.and_then(normalize_value),
            timeout_ms: timeout_ms
                .and_then(normalize_value)
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|value| *value > 0),
        }
    }
}

fn runtime_config() -> Overrides {
    let api_base_url = env::var(ENV_API_BASE_URL).ok();
    let timeout_ms = env::var(ENV_TIMEOUT_MS).ok();
    Overrides::from_raw(api_base_url.as_deref(), timeout_ms.as_deref())
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
