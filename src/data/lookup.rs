use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::Endpoints,
    data::{flag::FlagClient, forecast::ForecastClient, geocode::GeocodeClient},
    domain::{
        normalize::build_view_model,
        view_model::WeatherViewModel,
        weather::GeocodeResolution,
    },
};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a city name")]
    EmptyQuery,
    #[error("City '{0}' not found")]
    NotFound(String),
    #[error("Failed to fetch weather data: {0:#}")]
    Fetch(anyhow::Error),
}

/// Geocode, flag and forecast requests for one search, run in that order.
#[derive(Debug, Clone)]
pub struct WeatherService {
    geocoder: GeocodeClient,
    flags: FlagClient,
    forecast: ForecastClient,
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new(&Endpoints::default())
    }
}

impl WeatherService {
    #[must_use]
    pub fn new(endpoints: &Endpoints) -> Self {
        Self {
            geocoder: GeocodeClient::with_base_url(endpoints.geocode_url.clone()),
            flags: FlagClient::with_base_url(endpoints.flag_url.clone()),
            forecast: ForecastClient::with_base_url(endpoints.forecast_url.clone()),
        }
    }

    /// Either a complete view model or a single error; never a partial one.
    pub async fn lookup(&self, query: &str) -> Result<WeatherViewModel, LookupError> {
        let city = query.trim();
        if city.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        info!(city, "looking up weather");
        let location = match self
            .geocoder
            .resolve(city)
            .await
            .map_err(LookupError::Fetch)?
        {
            GeocodeResolution::Selected(location) => location,
            GeocodeResolution::NotFound(name) => return Err(LookupError::NotFound(name)),
        };

        let flag_url = match location.country_code.as_deref() {
            Some(code) => self.flags.lookup(code).await,
            None => None,
        };

        let payload = self
            .forecast
            .fetch(&location)
            .await
            .map_err(LookupError::Fetch)?;
        let view = build_view_model(&payload, &location, flag_url).map_err(LookupError::Fetch)?;
        debug!(
            location = %view.heading(),
            hourly = view.hourly.len(),
            daily = view.daily.len(),
            "weather lookup complete"
        );
        Ok(view)
    }
}
