pub mod decorator;
pub mod drag;
pub mod manager;
pub mod registry;
pub mod z_order;

use crate::content::ContentId;

pub use drag::{DragController, DragSession, DragState, PointerTarget};
pub use manager::{WindowControls, WindowManager};
pub use registry::WindowRegistry;
pub use z_order::ZOrderAllocator;

/// A point in desktop pixel space. Used for window positions, pointer
/// coordinates and grab offsets alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to be non-negative.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// State tracked for one open window.
///
/// Records are only ever mutated through [`WindowRegistry`]; the fields are
/// readable so hosts can paint them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    id: ContentId,
    z_index: u32,
    position: Point,
    minimized: bool,
}

impl WindowRecord {
    pub(crate) fn new(id: ContentId, z_index: u32, position: Point) -> Self {
        Self {
            id,
            z_index,
            position: position.clamped(),
            minimized: false,
        }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_zeroes_negative_axes_only() {
        assert_eq!(Point::new(-5, 7).clamped(), Point::new(0, 7));
        assert_eq!(Point::new(3, -1).clamped(), Point::new(3, 0));
        assert_eq!(Point::new(4, 9).clamped(), Point::new(4, 9));
    }

    #[test]
    fn point_arithmetic_saturates() {
        let p = Point::new(i32::MAX, 0) + Point::new(1, 2);
        assert_eq!(p, Point::new(i32::MAX, 2));
        assert_eq!(Point::new(10, 10) - Point::new(3, 4), Point::new(7, 6));
    }
}
