use ratatui::style::Color;

// Centralized theme colors. Desktop colors derive from the selected
// background (see `crate::appearance`); everything else lives here.

pub const ACCENT_RGB: (u8, u8, u8) = (59, 130, 246);
pub const GLASS_RGB: (u8, u8, u8) = (28, 30, 38);
pub const GLASS_HEADER_RGB: (u8, u8, u8) = (14, 15, 20);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    crate::term_color::map_rgb_to_color(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

// Top bar / dock
pub fn bar_bg() -> Color {
    rgb_to_color((16, 16, 20))
}
pub fn bar_fg() -> Color {
    Color::White
}
pub fn dock_bg() -> Color {
    rgb_to_color((40, 42, 54))
}
pub fn dock_indicator() -> Color {
    Color::White
}

// Window chrome
pub fn window_bg() -> Color {
    rgb_to_color(GLASS_RGB)
}
pub fn window_fg() -> Color {
    Color::White
}
pub fn window_muted_fg() -> Color {
    Color::Gray
}
pub fn header_bg() -> Color {
    rgb_to_color(GLASS_HEADER_RGB)
}
pub fn header_focused_fg() -> Color {
    Color::White
}
pub fn header_fg() -> Color {
    Color::DarkGray
}
pub fn close_button() -> Color {
    rgb_to_color((239, 68, 68))
}
pub fn minimize_button() -> Color {
    rgb_to_color((234, 179, 8))
}
pub fn border() -> Color {
    rgb_to_color((70, 72, 84))
}
pub fn border_focused() -> Color {
    accent()
}

// Content
pub fn heading() -> Color {
    rgb_to_color((250, 204, 21))
}
pub fn link() -> Color {
    rgb_to_color((96, 165, 250))
}
pub fn positive() -> Color {
    rgb_to_color((74, 222, 128))
}
pub fn negative() -> Color {
    rgb_to_color((248, 113, 113))
}
pub fn highlight() -> Color {
    rgb_to_color((192, 132, 252))
}
pub fn input_bg() -> Color {
    rgb_to_color((44, 46, 58))
}

// Toasts
pub fn toast_bg() -> Color {
    Color::Black
}
pub fn toast_fg() -> Color {
    Color::White
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn accent_returns_a_color_variant() {
        match accent() {
            Color::Rgb(_, _, _) | Color::Indexed(_) => {}
            other => panic!("unexpected color variant {other:?}"),
        }
    }
}
