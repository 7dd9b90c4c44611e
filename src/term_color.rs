use std::sync::OnceLock;

use ratatui::style::Color;

/// Colour depth of the attached terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    TrueColor,
    Indexed256,
}

impl ColorSupport {
    /// Truecolor when `COLORTERM` advertises `truecolor` or `24bit`, the
    /// xterm-256 palette otherwise.
    pub fn from_colorterm(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase) {
            Some(v) if v.contains("truecolor") || v.contains("24bit") => ColorSupport::TrueColor,
            _ => ColorSupport::Indexed256,
        }
    }

    /// Detected once per process.
    pub fn detect() -> Self {
        static SUPPORT: OnceLock<ColorSupport> = OnceLock::new();
        *SUPPORT.get_or_init(|| {
            ColorSupport::from_colorterm(std::env::var("COLORTERM").ok().as_deref())
        })
    }

    pub fn map(self, (r, g, b): (u8, u8, u8)) -> Color {
        match self {
            ColorSupport::TrueColor => Color::Rgb(r, g, b),
            ColorSupport::Indexed256 => Color::Indexed(xterm_index(r, g, b)),
        }
    }
}

pub fn map_rgb_to_color(r: u8, g: u8, b: u8) -> Color {
    ColorSupport::detect().map((r, g, b))
}

/// Nearest entry of the xterm-256 palette, choosing between the 6x6x6 cube
/// (16..=231) and the gray ramp (232..=255).
fn xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let cube = [cube_level(r), cube_level(g), cube_level(b)];
    let cube_rgb = (cube_value(cube[0]), cube_value(cube[1]), cube_value(cube[2]));
    let cube_index = 16 + 36 * cube[0] + 6 * cube[1] + cube[2];

    let gray = gray_level(r, g, b);
    let gray_value = 8 + gray * 10;

    if distance_sq((r, g, b), (gray_value, gray_value, gray_value)) < distance_sq((r, g, b), cube_rgb) {
        232 + gray
    } else {
        cube_index
    }
}

fn cube_level(v: u8) -> u8 {
    ((u16::from(v) * 5 + 127) / 255) as u8
}

fn cube_value(level: u8) -> u8 {
    match level {
        0 => 0,
        1 => 95,
        2 => 135,
        3 => 175,
        4 => 215,
        _ => 255,
    }
}

fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    ((avg * 23 + 127) / 255) as u8
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorterm_detection() {
        assert_eq!(ColorSupport::from_colorterm(Some("truecolor")), ColorSupport::TrueColor);
        assert_eq!(ColorSupport::from_colorterm(Some("24BIT")), ColorSupport::TrueColor);
        assert_eq!(ColorSupport::from_colorterm(Some("256")), ColorSupport::Indexed256);
        assert_eq!(ColorSupport::from_colorterm(None), ColorSupport::Indexed256);
    }

    #[test]
    fn truecolor_passes_rgb_through() {
        assert_eq!(ColorSupport::TrueColor.map((1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn pure_colors_land_on_cube_corners() {
        assert_eq!(xterm_index(255, 0, 0), 196);
        assert_eq!(xterm_index(0, 0, 255), 21);
    }

    #[test]
    fn grays_prefer_the_gray_ramp() {
        let idx = xterm_index(128, 128, 128);
        assert!((232..=255).contains(&idx));
    }
}
