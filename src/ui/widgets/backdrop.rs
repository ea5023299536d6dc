#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::ui::particles::Particle;

/// Full-screen scene gradient, or a solid flash while lightning is visible.
/// Panels draw over it without a background of their own.
pub struct SceneBackdrop {
    pub top: Color,
    pub bottom: Color,
    pub flash: bool,
    pub flash_bg: Color,
}

impl Widget for SceneBackdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.flash {
            paint_flash_background(area, buf, self.flash_bg);
        } else {
            paint_gradient_background(area, buf, self.top, self.bottom);
        }
    }
}

fn paint_flash_background(area: Rect, buf: &mut Buffer, flash_bg: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(flash_bg);
            }
        }
    }
}

fn paint_gradient_background(area: Rect, buf: &mut Buffer, top: Color, bottom: Color) {
    let (Some(bg_top), Some(bg_bottom)) = (color_to_rgb(top), color_to_rgb(bottom)) else {
        // Named palette colors can't be blended; split the screen instead.
        for y in area.top()..area.bottom() {
            let color = if gradient_ratio(area, y) < 0.5 { top } else { bottom };
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
        return;
    };

    for y in area.top()..area.bottom() {
        let color = lerp_color(bg_top, bg_bottom, gradient_ratio(area, y));
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}

fn gradient_ratio(area: Rect, y: u16) -> f32 {
    if area.height <= 1 {
        0.0
    } else {
        (y - area.top()) as f32 / (area.height - 1) as f32
    }
}

/// Particles are drawn only over cells the panels left blank.
pub fn paint_particles(area: Rect, buf: &mut Buffer, particles: &[Particle], particle_color: Color) {
    for particle in particles {
        if let Some((x, y)) = particle_position(area, particle)
            && let Some(cell) = buf.cell_mut((x, y))
            && cell.symbol() == " "
        {
            cell.set_char(particle.glyph).set_fg(particle_color);
        }
    }
}

fn particle_position(area: Rect, particle: &Particle) -> Option<(u16, u16)> {
    let x = area.x + ((particle.x.clamp(0.0, 1.0)) * area.width as f32) as u16;
    let y = area.y + ((particle.y.clamp(0.0, 1.0)) * area.height as f32) as u16;
    if x < area.right() && y < area.bottom() {
        Some((x, y))
    } else {
        None
    }
}

fn color_to_rgb(c: Color) -> Option<(f32, f32, f32)> {
    match c {
        Color::Rgb(r, g, b) => Some((r as f32, g as f32, b as f32)),
        Color::Black => Some((0., 0., 0.)),
        Color::White => Some((255., 255., 255.)),
        _ => None,
    }
}

fn lerp_color(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> Color {
    let r = (a.0 + (b.0 - a.0) * t).clamp(0.0, 255.0) as u8;
    let g = (a.1 + (b.1 - a.1) * t).clamp(0.0, 255.0) as u8;
    let b_val = (a.2 + (b.2 - a.2) * t).clamp(0.0, 255.0) as u8;
    Color::Rgb(r, g, b_val)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            glyph: '•',
        }
    }

    #[test]
    fn gradient_runs_from_top_to_bottom() {
        let area = Rect::new(0, 0, 4, 5);
        let mut buf = Buffer::empty(area);
        SceneBackdrop {
            top: Color::Rgb(0, 0, 0),
            bottom: Color::Rgb(200, 100, 0),
            flash: false,
            flash_bg: Color::White,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(3, 4)].bg, Color::Rgb(200, 100, 0));
    }

    #[test]
    fn flash_paints_every_cell() {
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        SceneBackdrop {
            top: Color::Black,
            bottom: Color::Black,
            flash: true,
            flash_bg: Color::White,
        }
        .render(area, &mut buf);

        assert!(buf.content().iter().all(|cell| cell.bg == Color::White && cell.symbol() == " "));
    }

    #[test]
    fn particles_skip_cells_with_text() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        buf[(5, 0)].set_char('A');

        paint_particles(area, &mut buf, &[particle(0.5, 0.0), particle(0.5, 0.5)], Color::Cyan);

        assert_eq!(buf[(5, 0)].symbol(), "A");
        assert_eq!(buf[(5, 1)].symbol(), "•");
    }

    #[test]
    fn particle_position_maps_into_the_area() {
        let area = Rect::new(10, 5, 80, 20);
        assert_eq!(particle_position(area, &particle(0.5, 0.5)), Some((50, 15)));
        assert_eq!(particle_position(area, &particle(1.0, 1.0)), None);
    }

    #[test]
    fn gradient_ratio_height_one_returns_zero() {
        assert!(gradient_ratio(Rect::new(0, 0, 80, 1), 0).abs() < f32::EPSILON);
    }
}
