mod common;

use common::{offline_cli, view_model};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;
use weather_pins::{
    app::{
        events::AppEvent,
        state::{AppMode, AppState},
    },
    ui,
};

fn render_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn ready_state(code: u8) -> AppState {
    let mut state = AppState::new(&offline_cli());
    let view = view_model("Stockholm", code);
    state.scene.activate(view.current.scene);
    state.weather = Some(view);
    state.mode = AppMode::Ready;
    state
}

#[test]
fn ready_state_shows_city_description_and_pins() {
    let mut state = ready_state(61);
    state.pins.add("Oslo").expect("pin");
    state.pins.add("Lima").expect("pin");

    let screen = render_to_string(110, 36, &state);

    assert!(screen.contains("Stockholm, Sweden"), "{screen}");
    assert!(screen.contains("Slight Rain"), "{screen}");
    assert!(screen.contains("Oslo"), "{screen}");
    assert!(screen.contains("Lima"), "{screen}");
    assert!(screen.contains("[SE]"), "{screen}");
    assert!(screen.contains("Next 24 hours"), "{screen}");
    assert!(screen.contains("11:00"), "{screen}");
}

#[test]
fn empty_state_invites_a_search() {
    let state = AppState::new(&offline_cli());

    let screen = render_to_string(90, 30, &state);

    assert!(screen.contains("Type a city and press Enter"), "{screen}");
    assert!(screen.contains("No pinned cities"), "{screen}");
}

#[test]
fn status_line_shows_the_last_error() {
    let mut state = ready_state(0);
    state.last_error = Some("City 'Atlantis' not found".to_string());

    let screen = render_to_string(90, 30, &state);

    assert!(screen.contains("City 'Atlantis' not found"), "{screen}");
    assert!(screen.contains("Clear sky"), "{screen}");
}

#[test]
fn edit_mode_marks_pins_for_deletion() {
    let mut state = ready_state(3);
    state.pins.add("Oslo").expect("pin");
    state.pins.toggle_edit_mode();

    let screen = render_to_string(90, 30, &state);

    assert!(screen.contains("editing"), "{screen}");
    assert!(screen.contains("✕ Oslo"), "{screen}");
}

#[tokio::test]
async fn menu_popup_lists_its_actions() {
    let mut state = ready_state(3);
    let (tx, _rx) = mpsc::channel(4);
    state
        .handle_event(
            AppEvent::Input(crossterm::event::Event::Key(
                crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::F(2),
                    crossterm::event::KeyModifiers::NONE,
                ),
            )),
            &tx,
        )
        .await
        .expect("open menu");

    let screen = render_to_string(100, 32, &state);

    for label in ["Pin city", "Toggle edit mode", "Clear all pins", "Quit"] {
        assert!(screen.contains(label), "missing {label}: {screen}");
    }
}

#[test]
fn tiny_terminal_shows_a_resize_hint() {
    let state = AppState::new(&offline_cli());

    let screen = render_to_string(40, 10, &state);

    assert!(screen.contains("Terminal too small"), "{screen}");
}
