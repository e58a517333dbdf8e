use std::time::Duration;

use crate::auth::session::DEFAULT_CHECK_LATENCY;
use crate::error::config::ConfigError;

/// Environment variable overriding the simulated check latency, in
/// milliseconds. Only meaningful on native targets; web builds run with the
/// default.
pub const CHECK_LATENCY_ENV: &str = "HEIMDALL_CHECK_LATENCY_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub check_latency: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let check_latency = match std::env::var(CHECK_LATENCY_ENV) {
            Ok(raw) => {
                let millis =
                    raw.parse::<u64>()
                        .map_err(|source| ConfigError::InvalidLatency {
                            value: raw,
                            source,
                        })?;

                Duration::from_millis(millis)
            }
            Err(_) => DEFAULT_CHECK_LATENCY,
        };

        Ok(Self { check_latency })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            check_latency: DEFAULT_CHECK_LATENCY,
        }
    }
}
