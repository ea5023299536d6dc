#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::{Value, json};
use weather_pins::{
    cli::Cli,
    data::forecast::ForecastPayload,
    domain::{normalize::build_view_model, view_model::WeatherViewModel, weather::Location},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const NOW: &str = "2026-02-12T10:00";

pub fn cli_for(server: &MockServer) -> Cli {
    Cli {
        city: None,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: true,
        ascii_icons: false,
        no_persist: true,
        geocode_url: Some(format!("{}/v1/search", server.uri())),
        forecast_url: Some(format!("{}/v1/forecast", server.uri())),
        flag_url: Some(server.uri()),
        one_shot: false,
    }
}

pub fn offline_cli() -> Cli {
    Cli {
        city: None,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: true,
        ascii_icons: true,
        no_persist: true,
        geocode_url: Some("http://127.0.0.1:9/v1/search".to_string()),
        forecast_url: Some("http://127.0.0.1:9/v1/forecast".to_string()),
        flag_url: Some("http://127.0.0.1:9".to_string()),
        one_shot: false,
    }
}

pub fn geocode_body(name: &str, country: &str, country_code: &str) -> Value {
    json!({
        "results": [{
            "name": name,
            "latitude": 59.3293,
            "longitude": 18.0686,
            "country": country,
            "country_code": country_code
        }]
    })
}

pub fn forecast_body(now: &str, weather_code: u8) -> Value {
    let start = NaiveDateTime::parse_from_str("2026-02-12T00:00", "%Y-%m-%dT%H:%M")
        .expect("valid fixture time");
    let hours = 168;
    let times = (0..hours)
        .map(|h| (start + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string())
        .collect::<Vec<_>>();
    let first_day = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid fixture date");
    let days = (0..7)
        .map(|d| (first_day + Duration::days(d)).format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>();

    json!({
        "current_weather": {
            "time": now,
            "temperature": 3.4,
            "windspeed": 14.0,
            "winddirection": 225.0,
            "weathercode": weather_code
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![2.2; 168],
            "relative_humidity_2m": vec![81.0; 168],
            "precipitation": vec![0.34; 168],
            "weather_code": vec![weather_code; 168],
            "wind_direction_80m": vec![230.0; 168],
            "apparent_temperature": vec![-1.2; 168],
            "precipitation_probability": vec![60.0; 168]
        },
        "daily": {
            "time": days,
            "precipitation_sum": vec![2.14; 7],
            "apparent_temperature_max": vec![4.8; 7],
            "apparent_temperature_min": vec![-3.2; 7],
            "precipitation_probability_max": vec![70.0; 7],
            "weather_code": vec![weather_code; 7],
            "precipitation_hours": vec![3.0; 7]
        }
    })
}

pub fn view_model(city: &str, weather_code: u8) -> WeatherViewModel {
    let payload: ForecastPayload =
        serde_json::from_value(forecast_body(NOW, weather_code)).expect("fixture payload");
    let location = Location {
        name: city.to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
        country: Some("Sweden".to_string()),
        country_code: Some("SE".to_string()),
    };
    build_view_model(
        &payload,
        &location,
        Some("https://flagcdn.com/w40/se.png".to_string()),
    )
    .expect("fixture view model")
}

pub async fn mount_city(server: &MockServer, city: &str, weather_code: u8) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(city, "Sweden", "SE")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w40/se.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(NOW, weather_code)))
        .mount(server)
        .await;
}
