use ratatui::style::Color;

use crate::domain::weather::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub top: Color,
    pub bottom: Color,
    pub surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub particle: Color,
    pub border: Color,
    pub focus_border: Color,
    pub danger: Color,
    pub success: Color,
    pub flash_bg: Color,
    pub flash_fg: Color,
    pub temp_freezing: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    detect_color_capability_from(
        std::env::var("TERM").ok().as_deref(),
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("NO_COLOR").ok().as_deref(),
    )
}

fn detect_color_capability_from(
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    let term = term.unwrap_or_default().to_lowercase();
    if no_color.is_some_and(|value| !value.is_empty()) || term == "dumb" {
        return ColorCapability::Basic16;
    }

    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Palette for the active scene; `None` before the first search.
pub fn theme_for(scene: Option<Scene>, capability: ColorCapability) -> Theme {
    let (top, bottom, accent) = match scene {
        Some(Scene::Sunny) => ((13, 53, 102), (30, 102, 158), (255, 215, 117)),
        Some(Scene::Cloudy) => ((25, 36, 51), (48, 63, 84), (210, 223, 235)),
        Some(Scene::Fog) => ((30, 34, 40), (50, 55, 62), (216, 220, 224)),
        Some(Scene::Rain) => ((17, 47, 88), (32, 73, 126), (153, 214, 255)),
        Some(Scene::Snow) => ((27, 51, 77), (43, 74, 106), (237, 247, 255)),
        Some(Scene::Thunderstorm) => ((28, 25, 66), (42, 40, 97), (255, 223, 112)),
        None => ((19, 24, 35), (31, 39, 53), (195, 205, 215)),
    };

    if capability == ColorCapability::Basic16 {
        return Theme {
            top: Color::Black,
            bottom: quantize(rgb(bottom), capability),
            surface: Color::Black,
            accent: Color::Cyan,
            text: Color::White,
            muted_text: Color::Gray,
            particle: Color::Gray,
            border: Color::Gray,
            focus_border: Color::LightCyan,
            danger: Color::LightRed,
            success: Color::LightGreen,
            flash_bg: Color::White,
            flash_fg: Color::Black,
            temp_freezing: Color::LightBlue,
            temp_cold: Color::Cyan,
            temp_mild: Color::Green,
            temp_warm: Color::Yellow,
            temp_hot: Color::LightRed,
        };
    }

    let surface = mix_rgb(top, (0, 0, 0), 0.35);
    Theme {
        top: quantize(rgb(top), capability),
        bottom: quantize(rgb(bottom), capability),
        surface: quantize(rgb(surface), capability),
        accent: quantize(rgb(accent), capability),
        text: quantize(Color::Rgb(236, 241, 247), capability),
        muted_text: quantize(Color::Rgb(160, 174, 192), capability),
        particle: quantize(rgb(mix_rgb(accent, (255, 255, 255), 0.4)), capability),
        border: quantize(rgb(mix_rgb(bottom, (255, 255, 255), 0.3)), capability),
        focus_border: quantize(rgb(accent), capability),
        danger: quantize(Color::Rgb(255, 122, 122), capability),
        success: quantize(Color::Rgb(134, 239, 172), capability),
        flash_bg: quantize(Color::Rgb(235, 238, 255), capability),
        flash_fg: quantize(Color::Rgb(20, 20, 40), capability),
        temp_freezing: quantize(Color::Rgb(147, 197, 253), capability),
        temp_cold: quantize(Color::Rgb(103, 232, 249), capability),
        temp_mild: quantize(Color::Rgb(134, 239, 172), capability),
        temp_warm: quantize(Color::Rgb(253, 224, 71), capability),
        temp_hot: quantize(Color::Rgb(252, 129, 129), capability),
    }
}

pub fn temp_color(theme: &Theme, temp: i32) -> Color {
    if temp <= -8 {
        theme.temp_freezing
    } else if temp <= 2 {
        theme.temp_cold
    } else if temp <= 16 {
        theme.temp_mild
    } else if temp <= 28 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_respects_env_hints() {
        assert_eq!(
            detect_color_capability_from(Some("xterm-256color"), Some("truecolor"), None),
            ColorCapability::TrueColor
        );
        assert_eq!(
            detect_color_capability_from(Some("xterm-256color"), None, None),
            ColorCapability::Xterm256
        );
        assert_eq!(
            detect_color_capability_from(Some("xterm-256color"), Some("truecolor"), Some("1")),
            ColorCapability::Basic16
        );
        assert_eq!(
            detect_color_capability_from(Some("dumb"), Some("24bit"), None),
            ColorCapability::Basic16
        );
    }

    #[test]
    fn every_scene_has_a_distinct_gradient() {
        let mut bottoms = Scene::ALL
            .iter()
            .map(|scene| format!("{:?}", theme_for(Some(*scene), ColorCapability::TrueColor).bottom))
            .collect::<Vec<_>>();
        bottoms.sort();
        bottoms.dedup();
        assert_eq!(bottoms.len(), Scene::ALL.len());
    }

    #[test]
    fn basic16_theme_uses_named_colors() {
        let theme = theme_for(Some(Scene::Rain), ColorCapability::Basic16);
        assert!(!matches!(theme.bottom, Color::Rgb(..) | Color::Indexed(_)));
        assert_eq!(theme.surface, Color::Black);
    }

    #[test]
    fn xterm256_quantizes_into_the_color_cube() {
        assert_eq!(
            quantize(Color::Rgb(255, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(196)
        );
        assert_eq!(
            quantize(Color::Rgb(0, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(16)
        );
    }

    #[test]
    fn basic16_maps_grays_and_hues() {
        assert_eq!(basic16_from_rgb(10, 10, 10), Color::Black);
        assert_eq!(basic16_from_rgb(240, 240, 240), Color::White);
        assert_eq!(basic16_from_rgb(200, 30, 30), Color::Red);
        assert_eq!(basic16_from_rgb(120, 160, 255), Color::LightBlue);
    }

    #[test]
    fn temp_color_covers_all_five_bands() {
        let theme = theme_for(None, ColorCapability::TrueColor);
        assert_eq!(temp_color(&theme, -10), theme.temp_freezing);
        assert_eq!(temp_color(&theme, 0), theme.temp_cold);
        assert_eq!(temp_color(&theme, 10), theme.temp_mild);
        assert_eq!(temp_color(&theme, 20), theme.temp_warm);
        assert_eq!(temp_color(&theme, 35), theme.temp_hot);
    }
}
