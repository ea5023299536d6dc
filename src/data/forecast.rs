use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::weather::Location;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_direction_80m,apparent_temperature,precipitation_probability";
const DAILY_FIELDS: &str = "precipitation_sum,apparent_temperature_max,apparent_temperature_min,precipitation_probability_max,weather_code,precipitation_hours";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// Current weather plus 7 days of hourly and daily series, in the
    /// location's own timezone.
    pub async fn fetch(&self, location: &Location) -> Result<ForecastPayload> {
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "requesting forecast"
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        response
            .json()
            .await
            .context("failed to parse forecast payload")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current_weather: CurrentWeatherBlock,
    #[serde(default)]
    pub hourly: HourlySeries,
    #[serde(default)]
    pub daily: DailySeries,
}

/// The coarse `current_weather` block; the API keeps its legacy field names.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherBlock {
    pub time: String,
    pub temperature: f32,
    #[serde(default)]
    pub windspeed: f32,
    #[serde(default)]
    pub winddirection: Option<f32>,
    #[serde(default)]
    pub weathercode: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f32>>,
    pub relative_humidity_2m: Vec<Option<f32>>,
    pub precipitation: Vec<Option<f32>>,
    pub weather_code: Vec<Option<u8>>,
    pub wind_direction_80m: Vec<Option<f32>>,
    pub apparent_temperature: Vec<Option<f32>>,
    pub precipitation_probability: Vec<Option<f32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub precipitation_sum: Vec<Option<f32>>,
    pub apparent_temperature_max: Vec<Option<f32>>,
    pub apparent_temperature_min: Vec<Option<f32>>,
    pub precipitation_probability_max: Vec<Option<f32>>,
    pub weather_code: Vec<Option<u8>>,
    pub precipitation_hours: Vec<Option<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_nulls_and_missing_series() {
        let payload: ForecastPayload = serde_json::from_value(serde_json::json!({
            "current_weather": {
                "time": "2026-02-12T10:15",
                "temperature": 4,
                "windspeed": 12.5,
                "winddirection": 200,
                "weathercode": 61
            },
            "hourly": {
                "time": ["2026-02-12T10:00"],
                "temperature_2m": [null],
                "weather_code": [61]
            }
        }))
        .expect("payload parses");

        assert!((payload.current_weather.temperature - 4.0).abs() < f32::EPSILON);
        assert_eq!(payload.hourly.temperature_2m, vec![None]);
        assert!(payload.hourly.precipitation.is_empty());
        assert!(payload.daily.time.is_empty());
    }

    #[test]
    fn payload_without_current_block_is_rejected() {
        let parsed = serde_json::from_value::<ForecastPayload>(serde_json::json!({
            "hourly": { "time": [] }
        }));
        assert!(parsed.is_err());
    }
}
