use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    cli::Cli,
    domain::{
        view_model::{CurrentReport, DailyEntry, HourlyEntry, TodaySummary, WeatherViewModel},
        weather::condition_for,
    },
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        city: None,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: true,
        ascii_icons: false,
        no_persist: true,
        geocode_url: Some("http://127.0.0.1:9/v1/search".to_string()),
        forecast_url: Some("http://127.0.0.1:9/v1/forecast".to_string()),
        flag_url: Some("http://127.0.0.1:9".to_string()),
        one_shot: false,
    }
}

pub(crate) fn sample_view_model() -> WeatherViewModel {
    sample_view_model_for("Stockholm", 61)
}

pub(crate) fn sample_view_model_for(city: &str, code: u8) -> WeatherViewModel {
    let now = parse_time("2026-02-12T10:00");
    let condition = condition_for(code);
    let hourly = (1..=24)
        .map(|h| {
            let time = now + Duration::hours(h);
            HourlyEntry {
                time,
                label: time.format("%H:%M").to_string(),
                temperature: 2,
                apparent_temperature: -1,
                humidity: 80,
                precipitation_mm: 0.4,
                rain_probability: 60,
                weather_code: code,
                description: condition.description,
                emoji: condition.emoji,
                wind_direction: "SW",
            }
        })
        .collect();
    let daily = (1..=6)
        .map(|d| {
            let date = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date") + Duration::days(d);
            DailyEntry {
                date,
                weekday: date.format("%a").to_string(),
                date_label: date.format("%b %-d").to_string(),
                max_apparent: 4,
                min_apparent: -3,
                precipitation_sum_mm: 2.1,
                precipitation_hours: 3,
                precipitation_probability: 70,
                weather_code: code,
                description: condition.description,
                emoji: condition.emoji,
            }
        })
        .collect();

    WeatherViewModel {
        location: city.to_string(),
        country: Some("Sweden".to_string()),
        country_code: Some("SE".to_string()),
        flag_url: Some("https://flagcdn.com/w40/se.png".to_string()),
        observed_at: now,
        current: CurrentReport {
            temperature: 3,
            apparent_temperature: -1,
            humidity: 81,
            precipitation_mm: 0.3,
            wind_speed_kmh: 14.5,
            wind_direction_deg: Some(225.0),
            wind_direction: "SW",
            weather_code: code,
            description: condition.description,
            emoji: condition.emoji,
            scene: condition.scene,
        },
        today: TodaySummary {
            max_apparent: 5,
            min_apparent: -4,
            precipitation_hours: 2,
            precipitation_sum_mm: 1.3,
            precipitation_probability: 40,
        },
        hourly,
        daily,
    }
}

