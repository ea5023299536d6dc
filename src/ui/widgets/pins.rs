use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::shared::{panel_block, panel_style};
use crate::{
    app::state::{AppState, Focus},
    cli::IconMode,
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let focused = state.focus == Focus::Pins && !state.menu_open;
    let editing = state.pins.edit_mode();
    let title = if editing {
        " Pinned · editing ".to_string()
    } else {
        format!(" Pinned ({}) ", state.pins.len())
    };
    let block = panel_block(title, theme, focused);

    if state.pins.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "No pinned cities",
                Style::default().fg(theme.muted_text),
            )),
            Line::from(Span::styled(
                "Ctrl-P pins the shown city",
                Style::default().fg(theme.muted_text),
            )),
        ])
        .style(panel_style(theme))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let marker = match state.icon_mode() {
        IconMode::Emoji => "📌 ",
        IconMode::Ascii => "* ",
    };
    let items = state
        .pins
        .pins()
        .iter()
        .map(|city| {
            if editing {
                ListItem::new(Line::from(vec![
                    Span::styled("✕ ", Style::default().fg(theme.danger)),
                    Span::raw(city.clone()),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::raw(city.clone()),
                ]))
            }
        })
        .collect::<Vec<_>>();

    let highlight = if editing {
        Style::default().fg(theme.danger).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    let list = List::new(items)
        .block(block)
        .style(panel_style(theme))
        .highlight_style(highlight);

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.pin_cursor.min(state.pins.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
