use crate::cli::IconMode;

/// Decorative backdrop category a weather code maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Sunny,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl Scene {
    pub const ALL: [Scene; 6] = [
        Scene::Sunny,
        Scene::Cloudy,
        Scene::Fog,
        Scene::Rain,
        Scene::Snow,
        Scene::Thunderstorm,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Scene::Sunny => "sunny",
            Scene::Cloudy => "cloudy",
            Scene::Fog => "fog",
            Scene::Rain => "rain",
            Scene::Snow => "snow",
            Scene::Thunderstorm => "thunderstorm",
        }
    }

    /// Rain and thunderstorm backdrops run the lightning timer.
    #[must_use]
    pub fn has_lightning(self) -> bool {
        matches!(self, Scene::Rain | Scene::Thunderstorm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub code: u8,
    pub description: &'static str,
    pub scene: Scene,
    pub emoji: &'static str,
}

const fn entry(
    code: u8,
    description: &'static str,
    scene: Scene,
    emoji: &'static str,
) -> WeatherCondition {
    WeatherCondition {
        code,
        description,
        scene,
        emoji,
    }
}

// First entry doubles as the fallback for codes missing from the table.
const CONDITIONS: &[WeatherCondition] = &[
    entry(0, "Clear sky", Scene::Sunny, "☀️"),
    entry(1, "Mainly clear", Scene::Sunny, "🌤️"),
    entry(2, "Partly cloudy", Scene::Cloudy, "⛅"),
    entry(3, "Overcast", Scene::Cloudy, "☁️"),
    entry(45, "Fog", Scene::Fog, "🌫️"),
    entry(48, "Depositing rime fog", Scene::Fog, "🌫️"),
    entry(51, "Light Drizzle", Scene::Rain, "🌦️"),
    entry(53, "Moderate Drizzle", Scene::Rain, "🌧️"),
    entry(55, "Dense Drizzle", Scene::Rain, "🌧️"),
    entry(56, "Light Freezing Drizzle", Scene::Rain, "🌧️"),
    entry(57, "Dense Freezing Drizzle", Scene::Rain, "🌧️"),
    entry(61, "Slight Rain", Scene::Rain, "🌦️"),
    entry(63, "Moderate Rain", Scene::Rain, "🌧️"),
    entry(65, "Heavy Rain", Scene::Rain, "🌧️"),
    entry(66, "Light Freezing Rain", Scene::Rain, "🌧️"),
    entry(67, "Heavy Freezing Rain", Scene::Rain, "🌧️"),
    entry(71, "Slight Snow", Scene::Snow, "🌨️"),
    entry(73, "Moderate Snow", Scene::Snow, "🌨️"),
    entry(75, "Heavy Snow", Scene::Snow, "❄️"),
    entry(77, "Snow Grains", Scene::Snow, "🌨️"),
    entry(80, "Slight Rain Showers", Scene::Rain, "🌦️"),
    entry(81, "Moderate Rain Showers", Scene::Rain, "🌧️"),
    entry(82, "Violent Rain Showers", Scene::Rain, "🌧️"),
    entry(85, "Slight Snow Showers", Scene::Snow, "🌨️"),
    entry(86, "Heavy Snow Showers", Scene::Snow, "❄️"),
    entry(95, "Thunderstorm", Scene::Thunderstorm, "⛈️"),
    entry(96, "Thunderstorm with slight hail", Scene::Thunderstorm, "⛈️"),
    entry(99, "Thunderstorm with heavy hail", Scene::Thunderstorm, "⛈️"),
];

#[must_use]
pub fn condition_for(code: u8) -> WeatherCondition {
    CONDITIONS
        .iter()
        .find(|condition| condition.code == code)
        .copied()
        .unwrap_or(CONDITIONS[0])
}

#[must_use]
pub fn weather_icon(code: u8, mode: IconMode) -> &'static str {
    let condition = condition_for(code);
    match mode {
        IconMode::Emoji => condition.emoji,
        IconMode::Ascii => ascii_token(condition.scene),
    }
}

fn ascii_token(scene: Scene) -> &'static str {
    match scene {
        Scene::Sunny => "SUN",
        Scene::Cloudy => "CLD",
        Scene::Fog => "FOG",
        Scene::Rain => "RAN",
        Scene::Snow => "SNW",
        Scene::Thunderstorm => "THN",
    }
}
