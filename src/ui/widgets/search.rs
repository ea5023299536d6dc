use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{panel_block, spinner_frame};
use crate::{
    app::state::{AppState, Focus},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let focused = state.focus == Focus::Search && !state.menu_open;
    let title = if state.lookup_in_flight {
        format!(" Search {} ", spinner_frame(state.frame_tick))
    } else {
        " Search ".to_string()
    };
    let block = panel_block(title, theme, focused);

    let mut spans = vec![Span::styled("> ", Style::default().fg(theme.accent))];
    if state.input.is_empty() && !focused {
        spans.push(Span::styled(
            "Enter a city name",
            Style::default().fg(theme.muted_text),
        ));
    } else {
        spans.push(Span::raw(state.input.clone()));
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
