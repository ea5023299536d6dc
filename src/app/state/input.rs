use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

fn text_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) if is_city_char(ch) => Some(ch),
        _ => None,
    }
}

impl AppState {
    pub(super) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.handle_control_shortcuts(key, tx).await? {
            return Ok(());
        }
        if self.menu_open {
            return self.handle_menu_key(key.code, tx).await;
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::F(2) => self.toggle_menu(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
            _ => match self.focus {
                Focus::Search => self.handle_search_key(key, tx),
                Focus::Pins => self.handle_pins_key(key.code, tx),
            },
        }

        Ok(())
    }

    pub(super) async fn handle_control_shortcuts(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<bool> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(false);
        }
        let KeyCode::Char(ch) = key.code else {
            return Ok(false);
        };

        match ch.to_ascii_lowercase() {
            'c' => tx.send(AppEvent::Quit).await?,
            'p' => self.pin_current(),
            'e' => self.toggle_edit_mode(),
            'o' => self.toggle_menu(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn handle_search_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        match key.code {
            KeyCode::Enter => self.start_lookup(tx),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Down if !self.pins.is_empty() => self.focus = Focus::Pins,
            _ => {
                if let Some(ch) = text_char(key) {
                    self.input.push(ch);
                }
            }
        }
    }

    fn handle_pins_key(&mut self, code: KeyCode, tx: &mpsc::Sender<AppEvent>) {
        match code {
            KeyCode::Up => {
                if self.pin_cursor == 0 {
                    self.focus = Focus::Search;
                } else {
                    self.pin_cursor -= 1;
                }
            }
            KeyCode::Down => {
                self.pin_cursor = (self.pin_cursor + 1).min(self.pins.len().saturating_sub(1));
            }
            KeyCode::Enter => self.activate_selected_pin(tx),
            KeyCode::Delete | KeyCode::Backspace if self.pins.edit_mode() => {
                self.activate_selected_pin(tx);
            }
            _ => {}
        }
    }

    async fn handle_menu_key(&mut self, code: KeyCode, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let count = MenuItem::ALL.len();
        match code {
            KeyCode::Esc | KeyCode::F(2) => self.menu_open = false,
            KeyCode::Up => {
                self.menu_selected = (self.menu_selected + count - 1) % count;
            }
            KeyCode::Down => {
                self.menu_selected = (self.menu_selected + 1) % count;
            }
            KeyCode::Enter => {
                let item = MenuItem::ALL[self.menu_selected % count];
                self.menu_open = false;
                self.apply_menu_item(item, tx).await?;
            }
            _ => {}
        }
        Ok(())
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search if !self.pins.is_empty() => {
                self.pin_cursor = self.pin_cursor.min(self.pins.len() - 1);
                Focus::Pins
            }
            _ => Focus::Search,
        };
    }
}
