#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::{panel_block, panel_style};
use crate::{
    app::state::AppState,
    domain::{view_model::HourlyEntry, weather::weather_icon},
    ui::{
        layout::visible_hour_count,
        theme::{Theme, temp_color},
    },
};

type HourlyMetricFormatter = fn(&HourlyEntry) -> String;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block(" Next 24 hours ".to_string(), theme, false);
    let Some(view) = state.weather.as_ref().filter(|view| !view.hourly.is_empty()) else {
        let empty = Paragraph::new(Line::from("No hourly data"))
            .style(panel_style(theme).fg(theme.muted_text))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2);
    let count = visible_hour_count(inner_width).min(view.hourly.len());
    // Spread the visible columns across the whole 24h window.
    let stride = view.hourly.len().div_ceil(count).max(1);
    let slice = view
        .hourly
        .iter()
        .step_by(stride)
        .take(count)
        .collect::<Vec<_>>();

    let mut rows = vec![
        Row::new(
            std::iter::once(Cell::from(""))
                .chain(slice.iter().map(|h| Cell::from(h.label.clone())))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Row::new(
            std::iter::once(Cell::from(""))
                .chain(
                    slice
                        .iter()
                        .map(|h| Cell::from(weather_icon(h.weather_code, state.icon_mode()))),
                )
                .collect::<Vec<_>>(),
        ),
        Row::new(
            std::iter::once(Cell::from("Temp"))
                .chain(slice.iter().map(|h| {
                    Cell::from(format!("{}°", h.temperature))
                        .style(Style::default().fg(temp_color(&theme, h.temperature)))
                }))
                .collect::<Vec<_>>(),
        ),
    ];
    for (label, formatter) in metric_row_specs() {
        rows.push(metric_row(label, &slice, formatter, theme));
    }

    let mut widths = vec![Constraint::Length(5)];
    widths.extend(vec![
        Constraint::Ratio(1, slice.len().max(1) as u32);
        slice.len()
    ]);
    let table = Table::new(rows, widths)
        .column_spacing(1)
        .style(panel_style(theme))
        .block(block);
    frame.render_widget(table, area);
}

fn metric_row_specs() -> [(&'static str, HourlyMetricFormatter); 2] {
    [
        ("Rain", |h| format!("{}%", h.rain_probability)),
        ("Wind", |h| h.wind_direction.to_string()),
    ]
}

fn metric_row(
    label: &'static str,
    slice: &[&HourlyEntry],
    formatter: HourlyMetricFormatter,
    theme: Theme,
) -> Row<'static> {
    Row::new(
        std::iter::once(Cell::from(label).style(Style::default().fg(theme.muted_text)))
            .chain(slice.iter().map(|h| Cell::from(formatter(h))))
            .collect::<Vec<_>>(),
    )
}
