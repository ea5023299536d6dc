use tracing::info;

use super::*;

impl AppState {
    /// City the pin shortcut acts on: the shown location, else the typed text.
    #[must_use]
    pub fn pin_target(&self) -> &str {
        self.weather
            .as_ref()
            .map_or(self.input.as_str(), |view| view.location.as_str())
    }

    #[must_use]
    pub fn current_city_pinned(&self) -> bool {
        self.weather
            .as_ref()
            .is_some_and(|view| self.pins.contains(&view.location))
    }

    pub(crate) fn pin_current(&mut self) {
        let target = self.pin_target().to_string();
        match self.pins.add(&target) {
            Ok(()) => {
                info!(city = target.trim(), "city pinned");
                self.input.clear();
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    pub(crate) fn toggle_edit_mode(&mut self) {
        self.pins.toggle_edit_mode();
        if self.pins.edit_mode() {
            self.focus = Focus::Pins;
            self.pin_cursor = self.pin_cursor.min(self.pins.len().saturating_sub(1));
        }
    }

    pub(crate) fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.menu_selected = 0;
    }

    pub(crate) fn clear_pins(&mut self) {
        self.pins.clear_all();
        self.pin_cursor = 0;
        self.focus = Focus::Search;
    }

    /// Opens the selected pin, or deletes it while editing.
    pub(crate) fn activate_selected_pin(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.pins.edit_mode() {
            if self.pins.remove(self.pin_cursor) {
                self.pin_cursor = self.pin_cursor.min(self.pins.len().saturating_sub(1));
            }
            if self.pins.is_empty() {
                self.focus = Focus::Search;
            }
            return;
        }

        let Some(city) = self.pins.pins().get(self.pin_cursor).cloned() else {
            return;
        };
        self.input = city;
        self.start_lookup(tx);
    }

    pub(crate) async fn apply_menu_item(
        &mut self,
        item: MenuItem,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match item {
            MenuItem::PinCity => self.pin_current(),
            MenuItem::ToggleEditMode => self.toggle_edit_mode(),
            MenuItem::ClearAllPins => self.clear_pins(),
            MenuItem::Quit => tx.send(AppEvent::Quit).await?,
        }
        Ok(())
    }
}
