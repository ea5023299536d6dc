use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourlyDensity {
    Full12,
    Full8,
    Compact6,
    Compact4,
}

#[must_use]
pub fn hourly_density(width: u16) -> HourlyDensity {
    match width {
        110..=u16::MAX => HourlyDensity::Full12,
        80..=109 => HourlyDensity::Full8,
        56..=79 => HourlyDensity::Compact6,
        _ => HourlyDensity::Compact4,
    }
}

#[must_use]
pub fn visible_hour_count(width: u16) -> usize {
    match hourly_density(width) {
        HourlyDensity::Full12 => 12,
        HourlyDensity::Full8 => 8,
        HourlyDensity::Compact6 => 6,
        HourlyDensity::Compact4 => 4,
    }
}

#[must_use]
pub fn pins_panel_width(width: u16) -> u16 {
    if width >= 100 { 28 } else { 22 }
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub search: Rect,
    pub status: Rect,
    pub pins: Rect,
    pub current: Rect,
    pub hourly: Rect,
    pub daily: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn for_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(pins_panel_width(area.width)),
                Constraint::Min(30),
            ])
            .split(rows[2]);

        let weather = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Min(4),
            ])
            .split(columns[1]);

        Self {
            search: rows[0],
            status: rows[1],
            pins: columns[0],
            current: weather[0],
            hourly: weather[1],
            daily: weather[2],
            footer: rows[3],
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_density_ranges() {
        assert_eq!(hourly_density(110), HourlyDensity::Full12);
        assert_eq!(hourly_density(109), HourlyDensity::Full8);
        assert_eq!(hourly_density(80), HourlyDensity::Full8);
        assert_eq!(hourly_density(79), HourlyDensity::Compact6);
        assert_eq!(hourly_density(56), HourlyDensity::Compact6);
        assert_eq!(hourly_density(0), HourlyDensity::Compact4);
        assert_eq!(visible_hour_count(120), 12);
        assert_eq!(visible_hour_count(40), 4);
    }

    #[test]
    fn screen_layout_stacks_panels_without_overlap() {
        let layout = ScreenLayout::for_area(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.status.y, 3);
        assert_eq!(layout.pins.width, 28);
        assert_eq!(layout.current.x, 28);
        assert_eq!(layout.hourly.y, layout.current.bottom());
        assert_eq!(layout.daily.y, layout.hourly.bottom());
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(40, 40, area);
        assert!(popup.x > 0 && popup.right() < area.right());
        assert!(popup.y > 0 && popup.bottom() < area.bottom());
    }
}
