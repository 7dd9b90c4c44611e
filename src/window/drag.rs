//! Pointer drag state machine.
//!
//! ```text
//!            pointer-down on surface
//!   Idle ──────────────────────────────▶ Dragging(window, grab offset)
//!    ▲                                        │  pointer-move: reposition
//!    └──── pointer-up anywhere / window ──────┘
//!          closed or hidden
//! ```
//!
//! The controller owns no window state. Each transition takes the registry it
//! acts on, so transitions can be driven directly from tests without a UI.

use super::{Point, WindowRegistry};
use crate::content::ContentId;

/// What the pointer landed on inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTarget {
    /// Any part of the window that is not interactive. Starts a drag.
    #[default]
    Surface,
    /// Buttons, text inputs, links and similar. Never starts a drag so the
    /// control stays clickable.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    window: ContentId,
    grab_offset: Point,
}

impl DragSession {
    pub const fn new(window: ContentId, grab_offset: Point) -> Self {
        Self {
            window,
            grab_offset,
        }
    }

    pub const fn window(&self) -> ContentId {
        self.window
    }

    /// Pointer position minus the window's top-left, captured at drag start.
    pub const fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    /// Window position for a pointer at `pointer`, relative to the desktop
    /// whose top-left sits at `desktop_origin`. Not clamped.
    pub fn position_for(&self, pointer: Point, desktop_origin: Point) -> Point {
        pointer - desktop_origin - self.grab_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<DragSession> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_window(&self) -> Option<ContentId> {
        self.session().map(|session| session.window)
    }

    /// Pointer pressed on window `id`.
    ///
    /// Starts a session (replacing any active one) and raises the window when
    /// the press landed on its surface. Presses on controls, or on windows
    /// that are absent or minimized, leave the state untouched. Returns
    /// whether a drag started.
    pub fn pointer_down(
        &mut self,
        registry: &mut WindowRegistry,
        id: ContentId,
        pointer: Point,
        desktop_origin: Point,
        target: PointerTarget,
    ) -> bool {
        if target == PointerTarget::Control {
            return false;
        }
        let Some(record) = registry.get(id).filter(|record| !record.is_minimized()) else {
            return false;
        };
        let top_left = desktop_origin + record.position();
        let session = DragSession::new(id, pointer - top_left);
        if let DragState::Dragging(previous) = self.state {
            tracing::debug!(replaced = %previous.window, window = %id, "drag session replaced");
        }
        self.state = DragState::Dragging(session);
        registry.bring_to_front(id);
        tracing::debug!(
            window = %id,
            grab_x = session.grab_offset.x,
            grab_y = session.grab_offset.y,
            "drag started"
        );
        true
    }

    /// Pointer moved. While dragging, repositions the dragged window and
    /// returns the stored (clamped) position.
    ///
    /// A session whose window has disappeared or been minimized is ended
    /// here, so a missed notification can't leave the controller stuck.
    pub fn pointer_move(
        &mut self,
        registry: &mut WindowRegistry,
        pointer: Point,
        desktop_origin: Point,
    ) -> Option<Point> {
        let session = self.session()?;
        if !registry.is_open_visible(session.window) {
            self.end("window no longer visible");
            return None;
        }
        let next = session.position_for(pointer, desktop_origin);
        registry.update_position(session.window, next.x, next.y);
        registry.get(session.window).map(|record| record.position())
    }

    /// Pointer released anywhere. Returns the session that ended, if any.
    pub fn pointer_up(&mut self) -> Option<DragSession> {
        let session = self.session();
        if session.is_some() {
            self.end("pointer released");
        }
        session
    }

    /// Window `id` became ineligible (closed or minimized). Ends the session
    /// if it was the dragged window.
    pub fn window_removed(&mut self, id: ContentId) {
        if self.dragged_window() == Some(id) {
            self.end("window removed");
        }
    }

    /// Ends any session unconditionally.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.end("drag cancelled");
        }
    }

    fn end(&mut self, reason: &'static str) {
        if let DragState::Dragging(session) = self.state {
            tracing::debug!(window = %session.window, reason, "drag ended");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(id: ContentId, at: Point) -> WindowRegistry {
        let mut reg = WindowRegistry::new();
        reg.open(id);
        reg.update_position(id, at.x, at.y);
        reg
    }

    #[test]
    fn grab_offset_is_pointer_minus_window_corner() {
        let mut reg = registry_with(ContentId::Contact, Point::new(200, 260));
        let mut drag = DragController::new();
        let origin = Point::new(0, 40);
        assert!(drag.pointer_down(&mut reg, ContentId::Contact, Point::new(220, 310), origin, PointerTarget::Surface));
        let session = drag.session().unwrap();
        assert_eq!(session.grab_offset(), Point::new(20, 10));
    }

    #[test]
    fn move_repositions_and_clamps() {
        let mut reg = registry_with(ContentId::About, Point::new(50, 50));
        let mut drag = DragController::new();
        let origin = Point::new(0, 0);
        drag.pointer_down(&mut reg, ContentId::About, Point::new(60, 55), origin, PointerTarget::Surface);
        assert_eq!(drag.pointer_move(&mut reg, Point::new(100, 100), origin), Some(Point::new(90, 95)));
        assert_eq!(drag.pointer_move(&mut reg, Point::new(2, 1), origin), Some(Point::new(0, 0)));
        assert_eq!(reg.get(ContentId::About).unwrap().position(), Point::new(0, 0));
    }

    #[test]
    fn controls_never_start_a_drag() {
        let mut reg = registry_with(ContentId::Contact, Point::new(0, 0));
        let z_before = reg.get(ContentId::Contact).unwrap().z_index();
        let mut drag = DragController::new();
        let started = drag.pointer_down(&mut reg, ContentId::Contact, Point::new(5, 5), Point::default(), PointerTarget::Control);
        assert!(!started);
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(reg.get(ContentId::Contact).unwrap().z_index(), z_before);
    }

    #[test]
    fn drag_start_raises_window() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        reg.open(ContentId::Projects);
        let mut drag = DragController::new();
        drag.pointer_down(&mut reg, ContentId::About, Point::new(120, 90), Point::default(), PointerTarget::Surface);
        assert_eq!(reg.front_most(), Some(ContentId::About));
    }

    #[test]
    fn minimized_or_absent_windows_cannot_be_grabbed() {
        let mut reg = registry_with(ContentId::Terminal, Point::new(0, 0));
        reg.minimize(ContentId::Terminal);
        let mut drag = DragController::new();
        assert!(!drag.pointer_down(&mut reg, ContentId::Terminal, Point::new(1, 1), Point::default(), PointerTarget::Surface));
        assert!(!drag.pointer_down(&mut reg, ContentId::Skills, Point::new(1, 1), Point::default(), PointerTarget::Surface));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn last_pointer_down_wins() {
        let mut reg = WindowRegistry::new();
        reg.open(ContentId::About);
        reg.open(ContentId::Skills);
        let mut drag = DragController::new();
        drag.pointer_down(&mut reg, ContentId::About, Point::new(110, 90), Point::default(), PointerTarget::Surface);
        drag.pointer_down(&mut reg, ContentId::Skills, Point::new(140, 120), Point::default(), PointerTarget::Surface);
        assert_eq!(drag.dragged_window(), Some(ContentId::Skills));
        drag.pointer_move(&mut reg, Point::new(150, 130), Point::default());
        // only the replacing session moves a window
        assert_eq!(reg.get(ContentId::About).unwrap().position(), Point::new(100, 80));
        assert_eq!(reg.get(ContentId::Skills).unwrap().position(), Point::new(140, 120));
    }

    #[test]
    fn pointer_up_ends_session_and_is_idempotent() {
        let mut reg = registry_with(ContentId::Skills, Point::new(10, 10));
        let mut drag = DragController::new();
        drag.pointer_down(&mut reg, ContentId::Skills, Point::new(15, 15), Point::default(), PointerTarget::Surface);
        assert!(drag.pointer_up().is_some());
        assert!(drag.pointer_up().is_none());
        assert_eq!(drag.pointer_move(&mut reg, Point::new(90, 90), Point::default()), None);
        assert_eq!(reg.get(ContentId::Skills).unwrap().position(), Point::new(10, 10));
    }

    #[test]
    fn move_after_window_vanished_ends_session() {
        let mut reg = registry_with(ContentId::Projects, Point::new(10, 10));
        let mut drag = DragController::new();
        drag.pointer_down(&mut reg, ContentId::Projects, Point::new(15, 15), Point::default(), PointerTarget::Surface);
        reg.close(ContentId::Projects);
        assert_eq!(drag.pointer_move(&mut reg, Point::new(40, 40), Point::default()), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn window_removed_only_ends_matching_session() {
        let mut reg = registry_with(ContentId::About, Point::new(0, 0));
        let mut drag = DragController::new();
        drag.pointer_down(&mut reg, ContentId::About, Point::new(1, 1), Point::default(), PointerTarget::Surface);
        drag.window_removed(ContentId::Terminal);
        assert!(drag.is_dragging());
        drag.window_removed(ContentId::About);
        assert!(!drag.is_dragging());
    }
}
