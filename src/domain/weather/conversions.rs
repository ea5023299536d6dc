use chrono::{NaiveDate, NaiveDateTime};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Nearest whole number, with halves going up: -2.5 reads as -2.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Rounds a precipitation amount to one decimal place, halves going up.
#[must_use]
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Maps a bearing in degrees onto one of 16 compass points.
///
/// Missing or non-finite bearings read as "N".
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wind_direction(degrees: Option<f32>) -> &'static str {
    let Some(degrees) = degrees.filter(|value| value.is_finite()) else {
        return COMPASS_POINTS[0];
    };
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Regional-indicator flag for an ISO 3166 alpha-2 code.
#[must_use]
pub fn flag_emoji(country_code: &str) -> Option<String> {
    let code = country_code.trim();
    if code.len() != 2 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    code.chars()
        .map(|ch| char::from_u32(0x1F1E6 + u32::from(ch.to_ascii_uppercase()) - u32::from('A')))
        .collect()
}
