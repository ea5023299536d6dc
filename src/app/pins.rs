use thiserror::Error;
use tracing::debug;

use crate::storage::PinStorage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    #[error("Please enter a city name")]
    EmptyName,
    #[error("City is already pinned")]
    AlreadyPinned(String),
}

/// Ordered pinned cities plus the edit-mode flag.
///
/// Each mutation writes the whole list through [`PinStorage`] once the
/// in-memory change is complete.
#[derive(Debug)]
pub struct PinBoard {
    pins: Vec<String>,
    edit_mode: bool,
    storage: PinStorage,
}

impl PinBoard {
    /// Restores the saved list, dropping blank and duplicate names.
    pub fn load(mut storage: PinStorage) -> Self {
        let mut pins: Vec<String> = Vec::new();
        for name in storage.load() {
            let name = name.trim();
            if name.is_empty() || contains_name(&pins, name) {
                continue;
            }
            pins.push(name.to_string());
        }
        debug!(count = pins.len(), "pins restored");

        Self {
            pins,
            edit_mode: false,
            storage,
        }
    }

    pub fn add(&mut self, name: &str) -> Result<(), PinError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PinError::EmptyName);
        }
        if self.contains(name) {
            return Err(PinError::AlreadyPinned(name.to_string()));
        }

        self.pins.push(name.to_string());
        self.persist();
        Ok(())
    }

    /// Returns `false` for an out-of-range index.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.pins.len() {
            return false;
        }

        self.pins.remove(index);
        if self.pins.is_empty() {
            self.edit_mode = false;
        }
        self.persist();
        true
    }

    pub fn clear_all(&mut self) {
        self.pins.clear();
        self.edit_mode = false;
        self.persist();
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode && !self.pins.is_empty();
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        contains_name(&self.pins, name.trim())
    }

    #[must_use]
    pub fn pins(&self) -> &[String] {
        &self.pins
    }

    #[must_use]
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    fn persist(&mut self) {
        self.storage.save(&self.pins);
    }
}

fn contains_name(pins: &[String], name: &str) -> bool {
    let needle = name.to_lowercase();
    pins.iter().any(|pin| pin.to_lowercase() == needle)
}
