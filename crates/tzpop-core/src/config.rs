// crates/tzpop-core/src/config.rs
use crate::error::{Result, TzError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://worldtimeapi.org/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// When a time query bumps the popularity counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Count before the time lookup; failed lookups still count.
    #[default]
    OnAttempt,
    /// Count only once a formatted time was produced.
    OnSuccess,
}

/// Settings for the remote collaborators and the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the World Time API, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout for the HTTP client.
    pub timeout_secs: u64,
    pub count_policy: CountPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            count_policy: CountPolicy::default(),
        }
    }
}

impl ServiceConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_count_policy(mut self, policy: CountPolicy) -> Self {
        self.count_policy = policy;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `api_url` with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(TzError::Config(format!(
                "api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(TzError::Config("timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
