use tracing::{debug, warn};

use super::*;
use crate::data::lookup::LookupError;

impl AppState {
    /// Searches for the current input. A newer search replaces any lookup
    /// still in flight; its result is dropped when it arrives.
    pub(crate) fn start_lookup(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            self.last_error = Some(LookupError::EmptyQuery.to_string());
            return;
        }

        self.cancel_lookup();
        self.lookup_generation = self.lookup_generation.wrapping_add(1);
        self.lookup_in_flight = true;
        self.last_error = None;
        if self.weather.is_none() {
            self.mode = AppMode::Loading;
        }

        let generation = self.lookup_generation;
        let service = self.service.clone();
        let tx2 = tx.clone();
        debug!(generation, query, "lookup started");
        self.lookup_task = Some(tokio::spawn(async move {
            let event = match service.lookup(&query).await {
                Ok(view) => AppEvent::LookupSucceeded {
                    generation,
                    view: Box::new(view),
                },
                Err(err) => AppEvent::LookupFailed {
                    generation,
                    message: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        }));
    }

    pub(super) fn cancel_lookup(&mut self) {
        if let Some(task) = self.lookup_task.take() {
            task.abort();
        }
        self.lookup_in_flight = false;
    }

    pub(super) fn finish_lookup_success(&mut self, generation: u64, view: WeatherViewModel) {
        if generation != self.lookup_generation {
            debug!(generation, current = self.lookup_generation, "stale lookup result dropped");
            return;
        }

        self.lookup_task = None;
        self.lookup_in_flight = false;
        self.scene.activate(view.current.scene);
        self.scene
            .set_wind(view.current.wind_speed_kmh, view.current.wind_direction_deg);
        self.weather = Some(view);
        self.last_error = None;
        self.mode = AppMode::Ready;
    }

    /// Keeps whatever weather was already shown; only the message changes.
    pub(super) fn finish_lookup_failure(&mut self, generation: u64, message: String) {
        if generation != self.lookup_generation {
            debug!(generation, current = self.lookup_generation, "stale lookup failure dropped");
            return;
        }

        warn!(error = %message, "weather lookup failed");
        self.lookup_task = None;
        self.lookup_in_flight = false;
        self.last_error = Some(message);
        self.mode = if self.weather.is_some() {
            AppMode::Ready
        } else {
            AppMode::Error
        };
    }
}
