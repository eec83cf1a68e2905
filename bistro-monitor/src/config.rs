//! Monitor configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BACKEND_URL` | `http://localhost:4000` |
//! | `MONITOR_USERNAME` | (required) |
//! | `MONITOR_PASSWORD` | (required) |
//! | `WORK_DIR` | `./data` |
//! | `POLL_INTERVAL_SECS` | `15` |
//! | `REQUEST_TIMEOUT_SECS` | `30` |
//! | `LOG_LEVEL` | `info` |
//! | `LOG_DIR` | unset (stdout) |

use std::path::PathBuf;
use std::time::Duration;

use bistro_client::ClientConfig;

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub backend_url: String,
    pub username: String,
    pub password: String,
    /// Holds the persisted session
    pub work_dir: PathBuf,
    pub poll_interval: Duration,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl MonitorConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or unparsable values
    /// fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            backend_url: lookup("BACKEND_URL").unwrap_or_else(|| "http://localhost:4000".into()),
            username: lookup("MONITOR_USERNAME").unwrap_or_default(),
            password: lookup("MONITOR_PASSWORD").unwrap_or_default(),
            work_dir: lookup("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            poll_interval: Duration::from_secs(
                lookup("POLL_INTERVAL_SECS")
                    .and_then(|v| v.parse().ok())
                    .filter(|&secs: &u64| secs > 0)
                    .unwrap_or(15),
            ),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend_url.clone()).with_timeout(self.request_timeout_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
