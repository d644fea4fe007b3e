// crates/wilayah-core/src/weather/client.rs
#![cfg(feature = "fetch")]

use super::forecast::{flatten_forecast, ForecastResponse, ForecastRow};
use crate::error::{RegionError, Result};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;

pub const BMKG_FORECAST_URL: &str = "https://api.bmkg.go.id/publik/prakiraan-cuaca";

// The endpoint rejects requests without a browser-like agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ForecastClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ForecastClientConfig {
    fn default() -> Self {
        Self {
            base_url: BMKG_FORECAST_URL.to_owned(),
            timeout: Duration::from_secs(10),
            user_agent: BROWSER_USER_AGENT.to_owned(),
        }
    }
}

/// Blocking client for the BMKG public forecast. One request per call, no
/// retries.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    config: ForecastClientConfig,
}

impl ForecastClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ForecastClientConfig::default())
    }

    pub fn with_config(config: ForecastClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Request URL for a village (`adm4`) code.
    pub fn forecast_url(&self, adm4: &str) -> String {
        format!(
            "{}?adm4={}",
            self.config.base_url.trim_end_matches('?'),
            adm4.trim()
        )
    }

    /// Fetch and decode the raw payload.
    pub fn fetch_raw(&self, adm4: &str) -> Result<ForecastResponse> {
        let url = self.forecast_url(adm4);
        tracing::debug!(%url, "requesting forecast");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "forecast request failed");
            return Err(RegionError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch and flatten into table rows.
    pub fn fetch(&self, adm4: &str) -> Result<Vec<ForecastRow>> {
        let rows = flatten_forecast(&self.fetch_raw(adm4)?);
        tracing::info!(adm4, rows = rows.len(), "forecast fetched");
        Ok(rows)
    }
}
