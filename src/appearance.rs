//! Desktop appearance preferences: the background and how strongly it is
//! dimmed. These are global host preferences, not window state.

use ratatui::style::Color;

use crate::constants::{MAX_OPACITY, MAX_OVERLAY_DIM, MIN_OPACITY};
use crate::theme::rgb_to_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub id: &'static str,
    pub name: &'static str,
    /// Source image the palette was sampled from.
    pub url: &'static str,
    /// Dominant colour used to paint the terminal desktop.
    pub rgb: (u8, u8, u8),
    /// Secondary colour for the texture pattern.
    pub accent_rgb: (u8, u8, u8),
}

pub const BACKGROUNDS: &[Background] = &[
    Background {
        id: "bg1",
        name: "Mountain Sunrise",
        url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&q=80",
        rgb: (94, 112, 150),
        accent_rgb: (232, 160, 110),
    },
    Background {
        id: "bg2",
        name: "Dark Mountains",
        url: "https://images.unsplash.com/photo-1477346611705-65d1883cee1e?w=1920&q=80",
        rgb: (38, 46, 58),
        accent_rgb: (90, 104, 120),
    },
    Background {
        id: "bg3",
        name: "Starry Night",
        url: "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=1920&q=80",
        rgb: (24, 34, 66),
        accent_rgb: (200, 210, 240),
    },
    Background {
        id: "bg4",
        name: "Earth from Space",
        url: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1920&q=80",
        rgb: (8, 20, 44),
        accent_rgb: (70, 140, 220),
    },
    Background {
        id: "bg5",
        name: "Neon City",
        url: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?w=1920&q=80",
        rgb: (60, 20, 90),
        accent_rgb: (240, 60, 180),
    },
    Background {
        id: "bg6",
        name: "Northern Lights",
        url: "https://images.unsplash.com/photo-1507400492013-162706c8c05e?w=1920&q=80",
        rgb: (12, 48, 52),
        accent_rgb: (80, 230, 150),
    },
];

pub fn background_index(id: &str) -> Option<usize> {
    BACKGROUNDS.iter().position(|bg| bg.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    background: usize,
    opacity: u8,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: 0,
            opacity: MAX_OPACITY,
        }
    }
}

impl Appearance {
    pub fn new(background: usize, opacity: u8) -> Self {
        let mut appearance = Self::default();
        appearance.set_background(background);
        appearance.set_opacity(opacity);
        appearance
    }

    pub fn background_index(&self) -> usize {
        self.background
    }

    pub fn background(&self) -> &'static Background {
        // the index is validated on every write
        &BACKGROUNDS[self.background.min(BACKGROUNDS.len() - 1)]
    }

    /// Select a background by index. Out-of-range indices are ignored.
    pub fn set_background(&mut self, index: usize) -> bool {
        if index < BACKGROUNDS.len() {
            self.background = index;
            true
        } else {
            false
        }
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity.clamp(MIN_OPACITY, MAX_OPACITY);
    }

    /// Strength of the dark overlay painted over the background, 0.0 at full
    /// opacity up to 0.7 at none.
    pub fn overlay_dim(&self) -> f32 {
        f32::from(MAX_OPACITY - self.opacity) / f32::from(MAX_OPACITY) * MAX_OVERLAY_DIM
    }

    pub fn desktop_rgb(&self) -> (u8, u8, u8) {
        dim_rgb(self.background().rgb, self.overlay_dim())
    }

    pub fn desktop_color(&self) -> Color {
        rgb_to_color(self.desktop_rgb())
    }

    pub fn pattern_color(&self) -> Color {
        rgb_to_color(dim_rgb(self.background().accent_rgb, self.overlay_dim()))
    }
}

/// Blend `rgb` towards black by `amount` (0.0..=1.0).
pub fn dim_rgb(rgb: (u8, u8, u8), amount: f32) -> (u8, u8, u8) {
    let keep = (1.0 - amount.clamp(0.0, 1.0)).max(0.0);
    let scale = |c: u8| (f32::from(c) * keep).round() as u8;
    (scale(rgb.0), scale(rgb.1), scale(rgb.2))
}
