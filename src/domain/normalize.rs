//! Turns raw geocode and forecast payloads into a [`WeatherViewModel`].
//!
//! All timestamps are naive local times of the searched location, so "now"
//! is the API-reported `current_weather.time` rather than the host clock.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use super::{
    view_model::{CurrentReport, DailyEntry, HourlyEntry, TodaySummary, WeatherViewModel},
    weather::{
        Location, condition_for, parse_date, parse_datetime, round_tenth, round_whole,
        wind_direction,
    },
};
use crate::data::forecast::{DailySeries, ForecastPayload, HourlySeries};

const HOURLY_WINDOW_HOURS: i64 = 24;
const MAX_DAILY_ENTRIES: usize = 6;

pub fn build_view_model(
    payload: &ForecastPayload,
    location: &Location,
    flag_url: Option<String>,
) -> Result<WeatherViewModel> {
    let raw_now = &payload.current_weather.time;
    let now = parse_datetime(raw_now)
        .with_context(|| format!("unrecognised current weather time {raw_now:?}"))?;

    Ok(WeatherViewModel {
        location: location.name.clone(),
        country: location.country.clone(),
        country_code: location.country_code.clone(),
        flag_url,
        observed_at: now,
        current: current_report(payload, now),
        today: today_summary(&payload.daily, now),
        hourly: generate_hourly_forecast(&payload.hourly, now),
        daily: generate_daily_forecast(&payload.daily, now),
    })
}

/// First hourly slot sharing the date and hour of `now`.
#[must_use]
pub fn current_hour_index(hourly: &HourlySeries, now: NaiveDateTime) -> Option<usize> {
    hourly.time.iter().position(|raw| {
        parse_datetime(raw).is_some_and(|time| time.date() == now.date() && time.hour() == now.hour())
    })
}

#[must_use]
pub fn today_index(daily: &DailySeries, now: NaiveDateTime) -> Option<usize> {
    daily
        .time
        .iter()
        .position(|raw| parse_date(raw) == Some(now.date()))
}

/// Hourly entries in `(now, now + 24h]`, in payload order.
#[must_use]
pub fn generate_hourly_forecast(hourly: &HourlySeries, now: NaiveDateTime) -> Vec<HourlyEntry> {
    let end = now + Duration::hours(HOURLY_WINDOW_HOURS);
    hourly
        .time
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let time = parse_datetime(raw)?;
            (time > now && time <= end).then(|| hourly_entry(hourly, idx, time))
        })
        .collect()
}

/// Up to six entries for calendar days after today.
#[must_use]
pub fn generate_daily_forecast(daily: &DailySeries, now: NaiveDateTime) -> Vec<DailyEntry> {
    let today = now.date();
    daily
        .time
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let date = parse_date(raw)?;
            (date > today).then(|| daily_entry(daily, idx, date))
        })
        .take(MAX_DAILY_ENTRIES)
        .collect()
}

fn current_report(payload: &ForecastPayload, now: NaiveDateTime) -> CurrentReport {
    let block = &payload.current_weather;
    let hourly = &payload.hourly;
    let slot = current_hour_index(hourly, now);
    let at_slot = |values: &[Option<f32>]| slot.and_then(|idx| sample(values, idx));

    let weather_code = slot
        .and_then(|idx| sample(&hourly.weather_code, idx))
        .unwrap_or(block.weathercode);
    let condition = condition_for(weather_code);
    let wind_degrees = at_slot(&hourly.wind_direction_80m).or(block.winddirection);

    CurrentReport {
        temperature: round_whole(block.temperature),
        apparent_temperature: round_whole(
            at_slot(&hourly.apparent_temperature).unwrap_or(block.temperature),
        ),
        humidity: round_whole(at_slot(&hourly.relative_humidity_2m).unwrap_or_default()),
        precipitation_mm: round_tenth(at_slot(&hourly.precipitation).unwrap_or_default()),
        wind_speed_kmh: block.windspeed,
        wind_direction_deg: wind_degrees,
        wind_direction: wind_direction(wind_degrees),
        weather_code,
        description: condition.description,
        emoji: condition.emoji,
        scene: condition.scene,
    }
}

fn today_summary(daily: &DailySeries, now: NaiveDateTime) -> TodaySummary {
    let Some(idx) = today_index(daily, now) else {
        return TodaySummary::default();
    };

    TodaySummary {
        max_apparent: whole_at(&daily.apparent_temperature_max, idx),
        min_apparent: whole_at(&daily.apparent_temperature_min, idx),
        precipitation_hours: whole_at(&daily.precipitation_hours, idx),
        precipitation_sum_mm: tenth_at(&daily.precipitation_sum, idx),
        precipitation_probability: whole_at(&daily.precipitation_probability_max, idx),
    }
}

fn hourly_entry(hourly: &HourlySeries, idx: usize, time: NaiveDateTime) -> HourlyEntry {
    let weather_code = sample(&hourly.weather_code, idx).unwrap_or_default();
    let condition = condition_for(weather_code);

    HourlyEntry {
        time,
        label: time.format("%H:%M").to_string(),
        temperature: whole_at(&hourly.temperature_2m, idx),
        apparent_temperature: whole_at(&hourly.apparent_temperature, idx),
        humidity: whole_at(&hourly.relative_humidity_2m, idx),
        precipitation_mm: tenth_at(&hourly.precipitation, idx),
        rain_probability: whole_at(&hourly.precipitation_probability, idx),
        weather_code,
        description: condition.description,
        emoji: condition.emoji,
        wind_direction: wind_direction(sample(&hourly.wind_direction_80m, idx)),
    }
}

fn daily_entry(daily: &DailySeries, idx: usize, date: NaiveDate) -> DailyEntry {
    let weather_code = sample(&daily.weather_code, idx).unwrap_or_default();
    let condition = condition_for(weather_code);

    DailyEntry {
        date,
        weekday: date.format("%a").to_string(),
        date_label: date.format("%b %-d").to_string(),
        max_apparent: whole_at(&daily.apparent_temperature_max, idx),
        min_apparent: whole_at(&daily.apparent_temperature_min, idx),
        precipitation_sum_mm: tenth_at(&daily.precipitation_sum, idx),
        precipitation_hours: whole_at(&daily.precipitation_hours, idx),
        precipitation_probability: whole_at(&daily.precipitation_probability_max, idx),
        weather_code,
        description: condition.description,
        emoji: condition.emoji,
    }
}

fn sample<T: Copy>(values: &[Option<T>], idx: usize) -> Option<T> {
    values.get(idx).copied().flatten()
}

fn whole_at(values: &[Option<f32>], idx: usize) -> i32 {
    round_whole(sample(values, idx).unwrap_or_default())
}

fn tenth_at(values: &[Option<f32>], idx: usize) -> f32 {
    round_tenth(sample(values, idx).unwrap_or_default())
}
