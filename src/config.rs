use std::path::PathBuf;

use crate::{
    cli::{Cli, IconMode},
    data::{flag::FLAG_URL, forecast::FORECAST_URL, geocode::GEOCODE_URL},
};

const CONFIG_DIR_ENV: &str = "WEATHER_PINS_CONFIG_DIR";
const PINS_FILE: &str = "pins.json";
const LOG_FILE: &str = "weather-pins.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocode_url: String,
    pub forecast_url: String,
    pub flag_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode_url: GEOCODE_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            flag_url: FLAG_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSetting {
    Full,
    Reduced,
    Off,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub motion: MotionSetting,
    pub no_flash: bool,
    pub icon_mode: IconMode,
    pub fps: u8,
    pub initial_city: Option<String>,
    /// `None` keeps pins in memory only.
    pub config_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Endpoints::default();
        let motion = if cli.no_animation {
            MotionSetting::Off
        } else if cli.reduced_motion {
            MotionSetting::Reduced
        } else {
            MotionSetting::Full
        };

        Self {
            endpoints: Endpoints {
                geocode_url: cli.geocode_url.clone().unwrap_or(defaults.geocode_url),
                forecast_url: cli.forecast_url.clone().unwrap_or(defaults.forecast_url),
                flag_url: cli.flag_url.clone().unwrap_or(defaults.flag_url),
            },
            motion,
            no_flash: cli.no_flash,
            icon_mode: cli.icon_mode(),
            fps: cli.fps,
            initial_city: cli.initial_city().map(str::to_string),
            config_dir: if cli.no_persist {
                None
            } else {
                config_dir()
            },
        }
    }

    #[must_use]
    pub fn pins_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(PINS_FILE))
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(LOG_FILE))
    }

    /// Frame rate for the render loop; a still backdrop needs no more than 15.
    #[must_use]
    pub fn frame_fps(&self) -> u8 {
        match self.motion {
            MotionSetting::Full => self.fps,
            MotionSetting::Reduced => self.fps.min(20),
            MotionSetting::Off => 15,
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base));
    }

    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config").join("weather-pins"))
}
