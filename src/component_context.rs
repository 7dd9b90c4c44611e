//! Shared provider rendering context
//!
//! `ComponentContext` carries UI metadata that content providers may need
//! during rendering. It centralizes focus and appearance state so the provider
//! trait remains stable and providers do not rely on ad-hoc parameters.

use crate::appearance::Appearance;

/// Context passed to `ContentProvider::render` describing UI state.
///
/// - `focused`: whether the window is the front-most visible window.
/// - `appearance`: the desktop's current background and opacity.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    appearance: Appearance,
}

impl ComponentContext {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            appearance: Appearance::default(),
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Return a new `ComponentContext` with a modified `focused` flag.
    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub const fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_replace_single_fields() {
        let ctx = ComponentContext::default()
            .with_focus(true)
            .with_appearance(Appearance::new(3, 40));
        assert!(ctx.focused());
        assert_eq!(ctx.appearance().background_index(), 3);
        assert_eq!(ctx.appearance().opacity(), 40);
        assert!(!ctx.with_focus(false).focused());
    }
}
