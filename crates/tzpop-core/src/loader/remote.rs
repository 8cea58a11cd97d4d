// crates/tzpop-core/src/loader/remote.rs
#![cfg(feature = "http")]

use super::parse_timezone_list;
use crate::config::ServiceConfig;
use crate::error::{Result, TzError};
use crate::traits::{TimeLookup, TimezoneListSource};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

/// Blocking client for the World Time API.
///
/// - `GET {base}/timezone` lists every identifier (JSON array).
/// - `GET {base}/timezone/{id}` returns the current time at `id` (JSON
///   object with a `datetime` field).
///
/// No retries; the configured timeout applies to each request.
#[derive(Debug, Clone)]
pub struct WorldTimeApi {
    client: Client,
    base_url: String,
}

impl WorldTimeApi {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TzError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
        })
    }

    pub fn timezones_url(&self) -> String {
        format!("{}/timezone", self.base_url)
    }

    pub fn timezone_url(&self, timezone: &str) -> String {
        format!("{}/timezone/{}", self.base_url, timezone)
    }

    fn get_text(&self, url: &str) -> reqwest::Result<String> {
        debug!(url, "GET");
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl TimezoneListSource for WorldTimeApi {
    fn fetch_timezones(&self) -> Result<Vec<String>> {
        let url = self.timezones_url();
        let body = self.get_text(&url).map_err(|e| {
            TzError::CatalogUnavailable(format!(
                "unable to fetch the list of valid timezone names from {url}; \
                 there may be a connectivity problem: {e}"
            ))
        })?;
        parse_timezone_list(body.as_bytes())
    }
}

impl TimeLookup for WorldTimeApi {
    fn lookup(&self, timezone: &str) -> Result<Value> {
        let url = self.timezone_url(timezone);
        let body = self
            .get_text(&url)
            .map_err(|e| TzError::TimeLookupFailed(format!("{url}: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| TzError::MalformedTimeResponse(format!("{url} did not return JSON: {e}")))
    }
}
