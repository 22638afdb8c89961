use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    api::{self, ForecastPayload, GeocodingResponse, GeocodingResult},
    config::Config,
    error::{Stage, WeatherError},
    model::{Coordinates, Place},
};

use super::WeatherProvider;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

/// Open-Meteo geocoding + forecast. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(geocoding_url: &str, forecast_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: forecast_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            &config.endpoints.geocoding_url,
            &config.endpoints.forecast_url,
            config.request_timeout(),
        )
    }

    async fn search(&self, query: &[(&str, String)]) -> Result<Response, WeatherError> {
        let url = format!("{}/v1/search", self.geocoding_url);
        tracing::debug!(%url, ?query, "geocoding request");

        self.http
            .get(&url)
            .query(query)
            .query(&[("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await
            .context("Failed to send request to Open-Meteo geocoding")
            .map_err(WeatherError::Unexpected)
    }

    async fn first_result(&self, query: &[(&str, String)]) -> Result<Option<GeocodingResult>, WeatherError> {
        let res = self.search(query).await?;
        let parsed: GeocodingResponse = read_json(res, Stage::Geocoding).await?;

        Ok(parsed.results.and_then(|results| results.into_iter().next()))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn geocode(&self, city: &str) -> Result<Place, WeatherError> {
        let hit = self
            .first_result(&[("name", city.to_string())])
            .await?
            .ok_or(WeatherError::NotFound)?;

        Ok(Place {
            coordinates: Coordinates { latitude: hit.latitude, longitude: hit.longitude },
            name: hit.name,
            country: hit.country,
        })
    }

    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Option<String>, WeatherError> {
        let hit = self
            .first_result(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
            ])
            .await?;

        Ok(hit.map(|h| h.name).filter(|name| !name.trim().is_empty()))
    }

    async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastPayload, WeatherError> {
        let url = format!("{}/v1/forecast", self.forecast_url);
        tracing::debug!(%url, ?coordinates, "forecast request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current", api::CURRENT_FIELDS.to_string()),
                ("hourly", api::HOURLY_FIELDS.to_string()),
                ("daily", api::DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", api::FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo forecast")
            .map_err(WeatherError::Unexpected)?;

        read_json(res, Stage::Forecast).await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response, stage: Stage) -> Result<T, WeatherError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .with_context(|| format!("Failed to read Open-Meteo {stage} response body"))
        .map_err(WeatherError::Unexpected)?;

    if !status.is_success() {
        tracing::warn!(%status, body = %truncate_body(&body), "Open-Meteo {stage} request failed");
        return Err(WeatherError::Network { stage, status });
    }

    serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse Open-Meteo {stage} JSON: {}", truncate_body(&body)))
        .map_err(WeatherError::Unexpected)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
