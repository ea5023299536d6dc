use chrono::{NaiveDate, NaiveDateTime};

use super::weather::{Scene, flag_emoji};

/// Render-ready weather for one search. Rebuilt from scratch on every lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherViewModel {
    pub location: String,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub flag_url: Option<String>,
    pub observed_at: NaiveDateTime,
    pub current: CurrentReport,
    pub today: TodaySummary,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

impl WeatherViewModel {
    #[must_use]
    pub fn heading(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.location, country),
            None => self.location.clone(),
        }
    }

    /// Flag glyph, shown only when the flag image lookup succeeded.
    #[must_use]
    pub fn flag(&self) -> Option<String> {
        self.flag_url.as_ref()?;
        self.country_code.as_deref().and_then(flag_emoji)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReport {
    pub temperature: i32,
    pub apparent_temperature: i32,
    pub humidity: i32,
    pub precipitation_mm: f32,
    pub wind_speed_kmh: f32,
    pub wind_direction_deg: Option<f32>,
    pub wind_direction: &'static str,
    pub weather_code: u8,
    pub description: &'static str,
    pub emoji: &'static str,
    pub scene: Scene,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodaySummary {
    pub max_apparent: i32,
    pub min_apparent: i32,
    pub precipitation_hours: i32,
    pub precipitation_sum_mm: f32,
    pub precipitation_probability: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub label: String,
    pub temperature: i32,
    pub apparent_temperature: i32,
    pub humidity: i32,
    pub precipitation_mm: f32,
    pub rain_probability: i32,
    pub weather_code: u8,
    pub description: &'static str,
    pub emoji: &'static str,
    pub wind_direction: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub date_label: String,
    pub max_apparent: i32,
    pub min_apparent: i32,
    pub precipitation_sum_mm: f32,
    pub precipitation_hours: i32,
    pub precipitation_probability: i32,
    pub weather_code: u8,
    pub description: &'static str,
    pub emoji: &'static str,
}
