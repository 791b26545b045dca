use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{config::SourceConfig, error::ReportError, model::ReportKind};

use super::WeatherSource;

/// OpenWeather 2.5 endpoints (`/forecast` and `/weather`) in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    config: SourceConfig,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(config: SourceConfig) -> Result<Self, ReportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ReportError::Client(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Endpoint URL and the name of its API-key query parameter.
    /// The two endpoints spell the key parameter differently.
    fn endpoint(&self, kind: ReportKind) -> (String, &'static str) {
        match kind {
            ReportKind::Forecast => (format!("{}/forecast", self.config.base_url), "APPID"),
            ReportKind::Current => (format!("{}/weather", self.config.base_url), "appid"),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    #[instrument(skip(self, kind), fields(kind = %kind))]
    async fn fetch(&self, city: &str, kind: ReportKind) -> Result<String, ReportError> {
        let (url, key_param) = self.endpoint(kind);
        debug!(url = %url, "Fetching OpenWeather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                (key_param, self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                ReportError::Unavailable(format!(
                    "Failed to send request to OpenWeather ({kind}): {e}"
                ))
            })?;

        let status = res.status();
        debug!(status = %status, "OpenWeather responded");

        if status == StatusCode::NOT_FOUND {
            return Err(ReportError::NotFound);
        }

        let body = res.text().await.map_err(|e| {
            ReportError::Unavailable(format!(
                "Failed to read OpenWeather {kind} response body: {e}"
            ))
        })?;

        if !status.is_success() {
            return Err(ReportError::Unavailable(format!(
                "OpenWeather {kind} request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
