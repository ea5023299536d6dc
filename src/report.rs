//! Plain-text weather snapshot for `--one-shot`.

use std::fmt::Write as _;

use crate::{
    cli::IconMode,
    domain::{view_model::WeatherViewModel, weather::weather_icon},
};

const REPORT_HOURS: usize = 8;

#[must_use]
pub fn render_report(view: &WeatherViewModel, icons: IconMode) -> String {
    let mut out = String::new();
    let current = &view.current;
    let today = &view.today;

    let _ = match (icons, view.flag()) {
        (IconMode::Emoji, Some(flag)) => writeln!(out, "{} {flag}", view.heading()),
        _ => writeln!(out, "{}", view.heading()),
    };
    let _ = writeln!(
        out,
        "{} {}°C {} (feels like {}°C)",
        weather_icon(current.weather_code, icons),
        current.temperature,
        current.description,
        current.apparent_temperature
    );
    let _ = writeln!(
        out,
        "Humidity {}% · Precip {:.1} mm · Wind {:.1} km/h {}",
        current.humidity, current.precipitation_mm, current.wind_speed_kmh, current.wind_direction
    );
    let _ = writeln!(
        out,
        "Today {}° / {}° · {:.1} mm over {} h · {}% chance",
        today.max_apparent,
        today.min_apparent,
        today.precipitation_sum_mm,
        today.precipitation_hours,
        today.precipitation_probability
    );

    if !view.hourly.is_empty() {
        let _ = writeln!(out, "\nNext hours");
        for hour in view.hourly.iter().take(REPORT_HOURS) {
            let _ = writeln!(
                out,
                "  {} {} {:>4}° {:>3}% {}",
                hour.label,
                weather_icon(hour.weather_code, icons),
                hour.temperature,
                hour.rain_probability,
                hour.wind_direction
            );
        }
    }

    if !view.daily.is_empty() {
        let _ = writeln!(out, "\nNext days");
        for day in &view.daily {
            let _ = writeln!(
                out,
                "  {} {:<6} {} {:>3}° / {:>3}° {:>3}% {}",
                day.weekday,
                day.date_label,
                weather_icon(day.weather_code, icons),
                day.max_apparent,
                day.min_apparent,
                day.precipitation_probability,
                day.description
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_view_model;

    #[test]
    fn report_lists_current_hours_and_days() {
        let report = render_report(&sample_view_model(), IconMode::Ascii);

        assert!(report.starts_with("Stockholm, Sweden\n"));
        assert!(report.contains("RAN 3°C Slight Rain (feels like -1°C)"));
        assert!(report.contains("Wind 14.5 km/h SW"));
        assert!(report.contains("Today 5° / -4°"));
        assert_eq!(report.matches("\n  ").count(), REPORT_HOURS + 6);
        assert!(report.contains("Fri Feb 13"));
    }

    #[test]
    fn emoji_report_shows_the_flag() {
        let report = render_report(&sample_view_model(), IconMode::Emoji);
        assert!(report.starts_with("Stockholm, Sweden 🇸🇪\n"));
    }
}
