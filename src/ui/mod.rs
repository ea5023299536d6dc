pub mod layout;
pub mod particles;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, Focus};
use layout::{MIN_HEIGHT, MIN_WIDTH, ScreenLayout, centered_rect};
use theme::{Theme, detect_color_capability, theme_for};
use widgets::backdrop::{SceneBackdrop, paint_particles};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weather-pins"));
        frame.render_widget(warning, area);
        return;
    }

    let flash = state.scene.flash_active();
    let theme = screen_theme(state, flash);
    frame.render_widget(
        SceneBackdrop {
            top: theme.top,
            bottom: theme.bottom,
            flash,
            flash_bg: theme.flash_bg,
        },
        area,
    );

    let screen = ScreenLayout::for_area(area);
    widgets::search::render(frame, screen.search, state, theme);
    render_status_line(frame, screen.status, state, theme);
    widgets::pins::render(frame, screen.pins, state, theme);
    widgets::current::render(frame, screen.current, state, theme);
    widgets::hourly::render(frame, screen.hourly, state, theme);
    widgets::daily::render(frame, screen.daily, state, theme);
    render_footer(frame, screen.footer, state, theme);

    if !flash {
        paint_particles(area, frame.buffer_mut(), state.scene.particles(), theme.particle);
    }

    if state.menu_open {
        widgets::menu::render(frame, centered_rect(40, 40, area), state, theme);
    }
}

fn screen_theme(state: &AppState, flash: bool) -> Theme {
    let mut theme = theme_for(state.scene.active(), detect_color_capability());
    if flash {
        theme.text = theme.flash_fg;
        theme.muted_text = theme.flash_fg;
        theme.border = theme.flash_fg;
    }
    theme
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(message) = state.last_error.as_deref() else {
        return;
    };
    let line = Line::from(vec![
        Span::styled(" ⚠ ", Style::default().fg(theme.danger)),
        Span::styled(
            message.to_string(),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let hints = match (state.focus, state.pins.edit_mode()) {
        _ if state.menu_open => "↑↓ choose · Enter select · Esc close",
        (Focus::Pins, true) => "Enter delete · Ctrl-E done · Tab search · Esc quit",
        (Focus::Pins, false) => "Enter open · ↑↓ move · Ctrl-E edit · Tab search · Esc quit",
        (Focus::Search, _) => "Enter search · Ctrl-P pin · Tab pins · F2 menu · Esc quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(theme.muted_text),
        ))),
        area,
    );
}
