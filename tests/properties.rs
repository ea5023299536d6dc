use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;
use weather_pins::{
    app::pins::PinBoard,
    data::forecast::{DailySeries, HourlySeries},
    domain::{
        normalize::{generate_daily_forecast, generate_hourly_forecast},
        weather::wind_direction,
    },
    storage::PinStorage,
};

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

fn base() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-02-12T00:00", "%Y-%m-%dT%H:%M").expect("valid base")
}

proptest! {
    #[test]
    fn hourly_window_is_always_the_next_day(offset_min in 0i64..(96 * 60), hours in 0i64..200) {
        let now = base() + Duration::minutes(offset_min);
        let series = HourlySeries {
            time: (0..hours)
                .map(|h| (base() + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string())
                .collect(),
            ..HourlySeries::default()
        };

        let hourly = generate_hourly_forecast(&series, now);

        prop_assert!(hourly.len() <= 24);
        prop_assert!(hourly.iter().all(|h| h.time > now && h.time <= now + Duration::hours(24)));
        prop_assert!(hourly.windows(2).all(|pair| pair[0].time < pair[1].time));
    }

    #[test]
    fn daily_list_is_future_and_capped(offset_days in 0i64..10, days in 0i64..16) {
        let now = base() + Duration::days(offset_days) + Duration::hours(13);
        let series = DailySeries {
            time: (0..days)
                .map(|d| (base() + Duration::days(d)).format("%Y-%m-%d").to_string())
                .collect(),
            ..DailySeries::default()
        };

        let daily = generate_daily_forecast(&series, now);

        prop_assert!(daily.len() <= 6);
        prop_assert!(daily.iter().all(|d| d.date > now.date()));
    }

    #[test]
    fn wind_direction_is_always_a_compass_label(deg in proptest::num::f32::ANY) {
        prop_assert!(COMPASS.contains(&wind_direction(Some(deg))));
    }

    #[test]
    fn pin_board_never_holds_case_insensitive_duplicates(
        names in prop::collection::vec("[a-zA-Z ]{0,8}", 0..12),
    ) {
        let mut board = PinBoard::load(PinStorage::in_memory());
        for name in &names {
            let _ = board.add(name);
        }

        let lowered = board.pins().iter().map(|pin| pin.to_lowercase()).collect::<Vec<_>>();
        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), lowered.len());
        prop_assert!(board.pins().iter().all(|pin| !pin.trim().is_empty() && pin.trim() == pin));
    }
}
