use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::{GeocodeResolution, Location};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    pub async fn resolve(&self, city: &str) -> Result<GeocodeResolution> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        let resolution = resolution_from(payload, city);
        debug!(city, ?resolution, "geocoding finished");
        Ok(resolution)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
}

fn resolution_from(payload: GeocodeResponse, city: &str) -> GeocodeResolution {
    let Some(first) = payload.results.and_then(|results| results.into_iter().next()) else {
        return GeocodeResolution::NotFound(city.to_string());
    };

    GeocodeResolution::Selected(Location {
        name: first.name,
        latitude: first.latitude,
        longitude: first.longitude,
        country: first.country,
        country_code: first.country_code,
    })
}
