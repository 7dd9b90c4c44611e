use super::{DragController, DragSession, Point, PointerTarget, WindowRecord, WindowRegistry};
use crate::content::ContentId;

/// The two requests a content provider may make of its own window.
///
/// Providers receive a `WindowControls` while handling input and call
/// [`request_close`](Self::request_close) or
/// [`request_minimize`](Self::request_minimize); the window manager applies
/// the request once the provider returns. Nothing else about window state is
/// reachable from a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowControls {
    close: bool,
    minimize: bool,
}

impl WindowControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_close(&mut self) {
        self.close = true;
    }

    pub fn request_minimize(&mut self) {
        self.minimize = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close
    }

    pub fn minimize_requested(&self) -> bool {
        self.minimize
    }
}

/// Single owner of window state: the registry, its z-order counter and the
/// drag controller.
///
/// Every mutation goes through here so that closing or minimizing a window
/// also ends a drag that targets it.
#[derive(Debug, Clone, Default)]
pub struct WindowManager {
    registry: WindowRegistry,
    drag: DragController,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn window(&self, id: ContentId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn open(&mut self, id: ContentId) {
        self.registry.open(id);
    }

    pub fn close(&mut self, id: ContentId) {
        self.drag.window_removed(id);
        self.registry.close(id);
    }

    pub fn minimize(&mut self, id: ContentId) {
        self.drag.window_removed(id);
        self.registry.minimize(id);
    }

    pub fn bring_to_front(&mut self, id: ContentId) {
        self.registry.bring_to_front(id);
    }

    pub fn update_position(&mut self, id: ContentId, x: i32, y: i32) {
        self.registry.update_position(id, x, y);
    }

    pub fn list_open_visible(&self) -> Vec<ContentId> {
        self.registry.list_open_visible()
    }

    pub fn is_open_visible(&self, id: ContentId) -> bool {
        self.registry.is_open_visible(id)
    }

    /// Visible windows from back to front.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        self.registry.paint_order()
    }

    pub fn front_most(&self) -> Option<ContentId> {
        self.registry.front_most()
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.session()
    }

    /// Pointer pressed on window `id`. A press on the window surface starts a
    /// drag; a press on one of its controls only focuses it. Either way the
    /// window ends up in front. Returns whether a drag started.
    pub fn pointer_down(
        &mut self,
        id: ContentId,
        pointer: Point,
        desktop_origin: Point,
        target: PointerTarget,
    ) -> bool {
        let started = self
            .drag
            .pointer_down(&mut self.registry, id, pointer, desktop_origin, target);
        if !started {
            self.registry.bring_to_front(id);
        }
        started
    }

    pub fn pointer_move(&mut self, pointer: Point, desktop_origin: Point) -> Option<Point> {
        self.drag
            .pointer_move(&mut self.registry, pointer, desktop_origin)
    }

    pub fn pointer_up(&mut self) -> Option<DragSession> {
        self.drag.pointer_up()
    }

    /// Abandon any drag, e.g. when the host loses pointer capture.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Apply whatever a provider asked for while handling input for `id`.
    /// Close wins over minimize when both were requested.
    pub fn apply_controls(&mut self, id: ContentId, controls: WindowControls) {
        if controls.close_requested() {
            self.close(id);
        } else if controls.minimize_requested() {
            self.minimize(id);
        }
    }
}
