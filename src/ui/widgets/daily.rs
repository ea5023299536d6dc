use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{panel_block, panel_style};
use crate::{
    app::state::AppState,
    domain::{view_model::DailyEntry, weather::weather_icon},
    ui::theme::{Theme, temp_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block(" Next days ".to_string(), theme, false);
    let Some(view) = state.weather.as_ref().filter(|view| !view.daily.is_empty()) else {
        let empty = Paragraph::new(Line::from("No daily data"))
            .style(panel_style(theme).fg(theme.muted_text))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let wide = area.width >= 70;
    let header = Row::new(header_cells(wide)).style(
        Style::default()
            .fg(theme.muted_text)
            .add_modifier(Modifier::BOLD),
    );
    let rows = view
        .daily
        .iter()
        .map(|day| day_row(day, state, theme, wide))
        .collect::<Vec<_>>();

    let widths = if wide {
        vec![
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Min(14),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(5),
        ]
    } else {
        vec![
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(5),
        ]
    };

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .style(panel_style(theme))
        .block(block);
    frame.render_widget(table, area);
}

fn header_cells(wide: bool) -> Vec<Cell<'static>> {
    let labels: &[&str] = if wide {
        &["Day", "", "Conditions", "Hi / Lo", "Precip", "Hrs", "Prob"]
    } else {
        &["Day", "", "Hi / Lo", "Prob"]
    };
    labels.iter().map(|label| Cell::from(*label)).collect()
}

fn day_row(day: &DailyEntry, state: &AppState, theme: Theme, wide: bool) -> Row<'static> {
    let date = Cell::from(format!("{} {}", day.weekday, day.date_label));
    let icon = Cell::from(weather_icon(day.weather_code, state.icon_mode()));
    let range = Cell::from(Line::from(vec![
        Span::styled(
            format!("{}°", day.max_apparent),
            Style::default().fg(temp_color(&theme, day.max_apparent)),
        ),
        Span::raw(" / "),
        Span::styled(
            format!("{}°", day.min_apparent),
            Style::default().fg(temp_color(&theme, day.min_apparent)),
        ),
    ]));
    let probability = Cell::from(format!("{}%", day.precipitation_probability));

    if wide {
        Row::new(vec![
            date,
            icon,
            Cell::from(day.description),
            range,
            Cell::from(format!("{:.1}mm", day.precipitation_sum_mm)),
            Cell::from(format!("{}h", day.precipitation_hours)),
            probability,
        ])
    } else {
        Row::new(vec![date, icon, range, probability])
    }
}
