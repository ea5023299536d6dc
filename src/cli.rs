#![allow(clippy::missing_errors_doc)]

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,
    Ascii,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-pins",
    version,
    about = "Terminal weather lookup with pinned cities"
)]
pub struct Cli {
    /// City to look up on start
    pub city: Option<String>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable backdrop animation
    #[arg(long)]
    pub no_animation: bool,

    /// Lower motion mode
    #[arg(long)]
    pub reduced_motion: bool,

    /// Disable lightning flash
    #[arg(long)]
    pub no_flash: bool,

    /// Force ASCII icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Keep pins in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Flag image service override
    #[arg(long)]
    pub flag_url: Option<String>,

    /// Print weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    /// Initial search, ignoring blank input.
    #[must_use]
    pub fn initial_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.one_shot && self.initial_city().is_none() {
            anyhow::bail!("--one-shot needs a city to look up");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Emoji
        }
    }
}
