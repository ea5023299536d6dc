use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme::Theme;

/// Foreground only, so the scene backdrop shows through the panels.
pub(super) fn panel_style(theme: Theme) -> Style {
    Style::default().fg(theme.text)
}

pub(super) fn popup_style(theme: Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

pub(super) fn panel_block(title: String, theme: Theme, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default()
            .fg(theme.focus_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .style(panel_style(theme))
        .border_style(border)
}

pub(super) fn spinner_frame(tick: u64) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[usize::try_from(tick / 4 % 4).unwrap_or(0)]
}
