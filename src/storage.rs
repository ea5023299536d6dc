//! Pin persistence behind a small capability trait.
//!
//! [`PinStorage`] pairs a primary store with an optional fallback and never
//! surfaces an error to callers: failures are logged and the next store is
//! tried.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt::Debug;

use tracing::{error, warn};

use crate::config::AppConfig;

pub trait PinStore: Debug + Send {
    fn label(&self) -> &'static str;

    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<Vec<String>>>;

    fn save(&mut self, pins: &[String]) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct PinStorage {
    primary: Box<dyn PinStore>,
    fallback: Option<Box<dyn PinStore>>,
}

impl PinStorage {
    #[must_use]
    pub fn new(primary: Box<dyn PinStore>, fallback: Option<Box<dyn PinStore>>) -> Self {
        Self { primary, fallback }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()), None)
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        match config.pins_path() {
            Some(path) => Self::new(
                Box::new(FileStore::new(path)),
                Some(Box::new(MemoryStore::default())),
            ),
            None => Self::in_memory(),
        }
    }

    pub fn save(&mut self, pins: &[String]) {
        let primary_err = match self.primary.save(pins) {
            Ok(()) => return,
            Err(err) => err,
        };

        let Some(fallback) = self.fallback.as_mut() else {
            error!(
                store = self.primary.label(),
                error = %format!("{primary_err:#}"),
                "saving pins failed"
            );
            return;
        };

        warn!(
            store = self.primary.label(),
            fallback = fallback.label(),
            error = %format!("{primary_err:#}"),
            "saving pins failed, using fallback"
        );
        if let Err(err) = fallback.save(pins) {
            error!(
                store = fallback.label(),
                error = %format!("{err:#}"),
                "saving pins to fallback failed"
            );
        }
    }

    pub fn load(&mut self) -> Vec<String> {
        let primary_failed = match self.primary.load() {
            Ok(Some(pins)) => return pins,
            Ok(None) => false,
            Err(err) => {
                warn!(
                    store = self.primary.label(),
                    error = %format!("{err:#}"),
                    "loading pins failed"
                );
                true
            }
        };

        let Some(fallback) = self.fallback.as_ref() else {
            return Vec::new();
        };

        match fallback.load() {
            Ok(Some(pins)) => {
                if primary_failed && let Err(err) = self.primary.save(&pins) {
                    warn!(
                        store = self.primary.label(),
                        error = %format!("{err:#}"),
                        "restoring pins to primary store failed"
                    );
                }
                pins
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                error!(
                    store = fallback.label(),
                    error = %format!("{err:#}"),
                    "loading pins from fallback failed"
                );
                Vec::new()
            }
        }
    }
}
