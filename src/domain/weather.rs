mod conditions;
mod conversions;

pub use conditions::{Scene, WeatherCondition, condition_for, weather_icon};
pub use conversions::{
    flag_emoji, parse_date, parse_datetime, round_tenth, round_whole, wind_direction,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl Location {
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GeocodeResolution {
    Selected(Location),
    NotFound(String),
}
