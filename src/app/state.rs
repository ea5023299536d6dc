use std::time::Instant;

use anyhow::Result;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::info;

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        pins::PinBoard,
        scene::SceneController,
    },
    cli::{Cli, IconMode},
    config::AppConfig,
    data::lookup::WeatherService,
    domain::view_model::WeatherViewModel,
    storage::PinStorage,
};

mod actions;
mod input;
mod lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Pins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PinCity,
    ToggleEditMode,
    ClearAllPins,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::PinCity,
        MenuItem::ToggleEditMode,
        MenuItem::ClearAllPins,
        MenuItem::Quit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PinCity => "Pin city",
            MenuItem::ToggleEditMode => "Toggle edit mode",
            MenuItem::ClearAllPins => "Clear all pins",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub config: AppConfig,
    pub input: String,
    pub focus: Focus,
    pub pins: PinBoard,
    pub pin_cursor: usize,
    pub menu_open: bool,
    pub menu_selected: usize,
    pub weather: Option<WeatherViewModel>,
    pub last_error: Option<String>,
    pub scene: SceneController,
    pub lookup_generation: u64,
    pub lookup_in_flight: bool,
    pub frame_tick: u64,
    pub last_frame_at: Instant,
    service: WeatherService,
    lookup_task: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self::from_config(AppConfig::from_cli(cli))
    }

    pub fn from_config(config: AppConfig) -> Self {
        let pins = PinBoard::load(PinStorage::from_config(&config));
        Self::with_pins(config, pins)
    }

    pub fn with_pins(config: AppConfig, pins: PinBoard) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            input: String::new(),
            focus: Focus::Search,
            pins,
            pin_cursor: 0,
            menu_open: false,
            menu_selected: 0,
            weather: None,
            last_error: None,
            scene: SceneController::for_motion(config.motion, config.no_flash),
            lookup_generation: 0,
            lookup_in_flight: false,
            frame_tick: 0,
            last_frame_at: Instant::now(),
            service: WeatherService::new(&config.endpoints),
            lookup_task: None,
            config,
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        self.config.icon_mode
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), self.config.frame_fps());
                if let Some(city) = self.config.initial_city.clone() {
                    self.input = city;
                    self.start_lookup(tx);
                }
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.scene.tick(delta);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::LookupSucceeded { generation, view } => {
                self.finish_lookup_success(generation, *view);
            }
            AppEvent::LookupFailed {
                generation,
                message,
            } => self.finish_lookup_failure(generation, message),
            AppEvent::Quit => {
                info!("quit requested");
                self.cancel_lookup();
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }
}
