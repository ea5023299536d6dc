use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, List, ListItem, ListState},
};

use super::shared::{panel_block, popup_style};
use crate::{
    app::state::{AppState, MenuItem},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    frame.render_widget(Clear, area);

    let items = MenuItem::ALL
        .iter()
        .map(|item| {
            let label = match item {
                MenuItem::ToggleEditMode if state.pins.edit_mode() => "Finish editing",
                _ => item.label(),
            };
            ListItem::new(label)
        })
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(panel_block(" Menu ".to_string(), theme, true).style(popup_style(theme)))
        .style(popup_style(theme))
        .highlight_symbol("› ")
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.menu_selected % MenuItem::ALL.len()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
