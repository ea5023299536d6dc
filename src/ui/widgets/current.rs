use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{panel_block, panel_style, spinner_frame};
use crate::{
    app::state::{AppMode, AppState},
    cli::IconMode,
    domain::{view_model::WeatherViewModel, weather::weather_icon},
    ui::theme::{Theme, temp_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    match state.weather.as_ref() {
        Some(view) => render_report(frame, area, state, view, theme),
        None => render_placeholder(frame, area, state, theme),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let message = match state.mode {
        AppMode::Loading => format!("{} Fetching weather...", spinner_frame(state.frame_tick)),
        AppMode::Error => "No weather to show yet".to_string(),
        _ => "Type a city and press Enter".to_string(),
    };
    let body = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(theme.muted_text),
    )))
    .style(panel_style(theme))
    .block(panel_block(" Current ".to_string(), theme, false));
    frame.render_widget(body, area);
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &WeatherViewModel,
    theme: Theme,
) {
    let block = panel_block(format!(" {} ", heading(view, state)), theme, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let current = &view.current;
    let icon = weather_icon(current.weather_code, state.icon_mode());
    let left = vec![
        Line::from(vec![
            Span::styled(
                format!("{}°C", current.temperature),
                Style::default()
                    .fg(temp_color(&theme, current.temperature))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(icon),
        ]),
        Line::from(Span::styled(
            current.description,
            Style::default().fg(theme.accent),
        )),
        Line::from(Span::styled(
            format!("Feels like {}°C", current.apparent_temperature),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(pin_badge(state, theme)),
    ];
    frame.render_widget(Paragraph::new(left).style(panel_style(theme)), columns[0]);

    let today = &view.today;
    let right = vec![
        detail_line("Humidity", format!("{}%", current.humidity), theme),
        detail_line("Precip", format!("{:.1} mm", current.precipitation_mm), theme),
        detail_line(
            "Wind",
            format!("{:.1} km/h {}", current.wind_speed_kmh, current.wind_direction),
            theme,
        ),
        detail_line(
            "Today",
            format!("{}° / {}°", today.max_apparent, today.min_apparent),
            theme,
        ),
        detail_line(
            "Rain",
            format!(
                "{:.1} mm · {} h · {}%",
                today.precipitation_sum_mm, today.precipitation_hours, today.precipitation_probability
            ),
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(right).style(panel_style(theme)), columns[1]);
}

fn heading(view: &WeatherViewModel, state: &AppState) -> String {
    let flag = match state.icon_mode() {
        IconMode::Emoji => view.flag(),
        IconMode::Ascii => view
            .flag_url
            .as_ref()
            .and(view.country_code.as_ref())
            .map(|code| format!("[{}]", code.to_uppercase())),
    };
    match flag {
        Some(flag) => format!("{} {flag}", view.heading()),
        None => view.heading(),
    }
}

fn pin_badge(state: &AppState, theme: Theme) -> Span<'static> {
    if state.current_city_pinned() {
        Span::styled("✓ pinned", Style::default().fg(theme.success))
    } else {
        Span::styled("Ctrl-P to pin", Style::default().fg(theme.muted_text))
    }
}

fn detail_line(label: &'static str, value: String, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<9}"), Style::default().fg(theme.muted_text)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}
