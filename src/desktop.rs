//! The terminal desktop: owns window state, content providers and host
//! preferences, and translates terminal input into window-manager
//! transitions.
//!
//! Windows are laid out in desktop pixels. [`CellMetrics`] maps them onto the
//! terminal grid, and maps pointer cells back to pixels, so drags move
//! windows by whole cells.

use std::time::Instant;

use chrono::NaiveDateTime;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, style::Style};

use crate::appearance::Appearance;
use crate::components::{
    ComponentContext, HostRequest, ProviderContext, ProviderError, ProviderRegistry,
};
use crate::config::DesktopConfig;
use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::content::ContentId;
use crate::launcher::Dock;
use crate::linkifier::{LinkHandler, browser_link_handler};
use crate::panel::Panel;
use crate::toast::Toasts;
use crate::ui::{UiFrame, rect_contains};
use crate::window::decorator::{GlassDecorator, HeaderAction, WindowDecorator};
use crate::window::{Point, PointerTarget, WindowControls, WindowManager};

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    width: u16,
    height: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)
    }
}

impl CellMetrics {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Pixel position of the top-left corner of a cell.
    pub fn to_pixels(&self, column: u16, row: u16) -> Point {
        Point::new(
            i32::from(column) * i32::from(self.width),
            i32::from(row) * i32::from(self.height),
        )
    }

    fn cells(pixels: i32, cell: u16) -> u16 {
        u16::try_from(pixels.max(0) / i32::from(cell)).unwrap_or(u16::MAX)
    }

    /// Cell rectangle of a window at `position` (relative to `desktop`'s
    /// top-left) with pixel `size`. Not clipped to the desktop.
    pub fn window_rect(&self, desktop: Rect, position: Point, size: (i32, i32)) -> Rect {
        Rect::new(
            desktop.x.saturating_add(Self::cells(position.x, self.width)),
            desktop.y.saturating_add(Self::cells(position.y, self.height)),
            Self::cells(size.0, self.width),
            Self::cells(size.1, self.height),
        )
    }
}

pub struct Desktop {
    windows: WindowManager,
    providers: ProviderRegistry,
    dock: Dock,
    panel: Panel,
    appearance: Appearance,
    toasts: Toasts,
    metrics: CellMetrics,
    decorator: Box<dyn WindowDecorator>,
    link_handler: LinkHandler,
    desktop_area: Rect,
}

impl Desktop {
    pub fn new(providers: ProviderRegistry) -> Result<Self, ProviderError> {
        providers.ensure_complete()?;
        Ok(Self {
            windows: WindowManager::new(),
            providers,
            dock: Dock::new(),
            panel: Panel::new(format!(
                "{} Folio",
                crate::data::PERSONAL_INFO.first_name()
            )),
            appearance: Appearance::default(),
            toasts: Toasts::default(),
            metrics: CellMetrics::default(),
            decorator: Box::new(GlassDecorator),
            link_handler: browser_link_handler(),
            desktop_area: Rect::default(),
        })
    }

    /// Desktop with the built-in providers, set up from `config`.
    pub fn from_config(config: &DesktopConfig) -> Result<Self, ProviderError> {
        let mut desktop = Self::new(ProviderRegistry::with_defaults())?
            .with_appearance(config.appearance())
            .with_metrics(config.metrics());
        for id in config.open() {
            desktop.windows.open(*id);
        }
        Ok(desktop)
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_decorator(mut self, decorator: Box<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn with_link_handler(mut self, handler: LinkHandler) -> Self {
        self.link_handler = handler;
        self
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Area between the top bar and the dock at the last render.
    pub fn desktop_area(&self) -> Rect {
        self.desktop_area
    }

    /// Pixel position of the desktop's top-left corner.
    pub fn desktop_origin(&self) -> Point {
        self.metrics
            .to_pixels(self.desktop_area.x, self.desktop_area.y)
    }

    /// Unclipped cell rectangle of a visible window.
    pub fn window_rect(&self, id: ContentId) -> Option<Rect> {
        let record = self.windows.window(id).filter(|r| !r.is_minimized())?;
        let size = id.display_size();
        Some(self.metrics.window_rect(
            self.desktop_area,
            record.position(),
            (size.width, size.height),
        ))
    }

    /// Topmost visible window covering `(column, row)`.
    pub fn window_at(&self, column: u16, row: u16) -> Option<ContentId> {
        self.windows
            .paint_order()
            .into_iter()
            .rev()
            .map(|record| record.id())
            .find(|id| {
                self.window_rect(*id).is_some_and(|rect| {
                    rect_contains(rect.intersection(self.desktop_area), column, row)
                })
            })
    }

    fn visible_content_area(&self, id: ContentId) -> Option<Rect> {
        let rect = self.window_rect(id)?;
        let content = self
            .decorator
            .content_area(rect)
            .intersection(self.desktop_area);
        (!content.is_empty()).then_some(content)
    }

    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, now: NaiveDateTime) {
        let (_, _, desktop) = self.panel.split_area(frame.area());
        self.desktop_area = desktop;
        self.render_background(frame, desktop);

        let front = self.windows.front_most();
        let order: Vec<ContentId> = self
            .windows
            .paint_order()
            .into_iter()
            .map(|record| record.id())
            .collect();
        for id in order {
            let Some(rect) = self.window_rect(id) else {
                continue;
            };
            let focused = front == Some(id);
            let mut clipped = frame.sub_frame(desktop);
            self.decorator
                .render_window(&mut clipped, rect, id.title(), focused);
            if let Some(content) = self.visible_content_area(id)
                && let Some(provider) = self.providers.get_mut(id)
            {
                let ctx = ComponentContext::new(focused).with_appearance(self.appearance);
                let mut inner = clipped.sub_frame(content);
                provider.render(&mut inner, content, &ctx);
            }
        }

        self.panel.render_top(frame, now);
        let indicators = self.dock.indicators(&self.windows);
        self.panel.render_dock(frame, &indicators);
        self.toasts.render(frame, desktop);
    }

    fn render_background(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let base = Style::default().bg(self.appearance.desktop_color());
        frame.fill(area, " ", base);
        let pattern = base.fg(self.appearance.pattern_color());
        for row in area.y..area.y.saturating_add(area.height) {
            for col in area.x..area.x.saturating_add(area.width) {
                if (col + row * 3) % 11 == 0 {
                    frame.set_string(col, row, "·", pattern);
                }
            }
        }
    }

    /// Route one terminal event. Returns whether anything consumed it.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse, now),
            Event::Key(_) | Event::Paste(_) => match self.windows.front_most() {
                Some(id) => self.dispatch(id, event, now),
                None => false,
            },
            Event::FocusLost => {
                self.windows.cancel_drag();
                false
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        let pointer = self.metrics.to_pixels(mouse.column, mouse.row);
        let origin = self.desktop_origin();
        if self.windows.drag_session().is_some() {
            match mouse.kind {
                MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                    self.windows.pointer_move(pointer, origin);
                    return true;
                }
                MouseEventKind::Up(_) => {
                    self.windows.pointer_up();
                    return true;
                }
                _ => {}
            }
        }

        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(id) = self.panel.dock_item_at(mouse.column, mouse.row)
        {
            self.dock.on_item_activated(&mut self.windows, id);
            return true;
        }

        let Some(id) = self.window_at(mouse.column, mouse.row) else {
            return false;
        };
        let Some(rect) = self.window_rect(id) else {
            return false;
        };

        let press = matches!(mouse.kind, MouseEventKind::Down(_));
        if press && let Some(action) = self.decorator.hit_test(rect, mouse.column, mouse.row) {
            let mut controls = WindowControls::new();
            match action {
                HeaderAction::Close => controls.request_close(),
                HeaderAction::Minimize => controls.request_minimize(),
                HeaderAction::Drag => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        self.windows
                            .pointer_down(id, pointer, origin, PointerTarget::Surface);
                    } else {
                        self.windows.bring_to_front(id);
                    }
                    return true;
                }
            }
            self.windows.bring_to_front(id);
            self.windows.apply_controls(id, controls);
            return true;
        }

        let Some(content) = self.visible_content_area(id) else {
            return false;
        };
        if !rect_contains(content, mouse.column, mouse.row) {
            // window border
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.windows
                    .pointer_down(id, pointer, origin, PointerTarget::Surface);
                return true;
            }
            return false;
        }

        let local = MouseEvent {
            column: mouse.column - content.x,
            row: mouse.row - content.y,
            ..mouse
        };
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let target = self
                .providers
                .get(id)
                .map(|p| p.pointer_target(local.column, local.row))
                .unwrap_or(PointerTarget::Surface);
            self.windows.pointer_down(id, pointer, origin, target);
        } else if press {
            self.windows.bring_to_front(id);
        }
        self.dispatch(id, &Event::Mouse(local), now) || press
    }

    fn dispatch(&mut self, id: ContentId, event: &Event, now: Instant) -> bool {
        let Some(provider) = self.providers.get_mut(id) else {
            tracing::warn!(window = %id, "no provider for window");
            return false;
        };
        let mut controls = WindowControls::new();
        let mut requests = Vec::new();
        let handled = {
            let mut ctx = ProviderContext::new(&mut controls, &mut requests, self.appearance);
            provider.handle_event(event, &mut ctx)
        };
        self.windows.apply_controls(id, controls);
        for request in requests {
            self.apply_request(request, now);
        }
        handled
    }

    pub fn apply_request(&mut self, request: HostRequest, now: Instant) {
        match request {
            HostRequest::SetBackground(index) => {
                if self.appearance.set_background(index) {
                    tracing::info!(
                        background = self.appearance.background().id,
                        "background changed"
                    );
                } else {
                    tracing::warn!(index, "ignored unknown background");
                }
            }
            HostRequest::SetOpacity(opacity) => {
                self.appearance.set_opacity(opacity);
                tracing::debug!(opacity = self.appearance.opacity(), "opacity changed");
            }
            HostRequest::Toast(toast) => self.toasts.push(toast, now),
            HostRequest::OpenUrl(url) => {
                (self.link_handler)(&url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Toast;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::buffer::Buffer;
    use std::sync::{Arc, Mutex};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn desktop() -> Desktop {
        Desktop::new(ProviderRegistry::with_defaults())
            .unwrap()
            .with_metrics(CellMetrics::new(10, 20))
    }

    fn render(desktop: &mut Desktop, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        desktop.render(&mut ui, now());
        buf
    }

    #[test]
    fn metrics_map_between_cells_and_pixels() {
        let m = CellMetrics::new(10, 20);
        assert_eq!(m.to_pixels(3, 2), Point::new(30, 40));
        let rect = m.window_rect(Rect::new(0, 1, 80, 20), Point::new(105, 80), (700, 500));
        assert_eq!(rect, Rect::new(10, 5, 70, 25));
        assert_eq!(CellMetrics::new(0, 0), CellMetrics::new(1, 1));
    }

    #[test]
    fn incomplete_registry_is_rejected() {
        let err = Desktop::new(ProviderRegistry::new()).err().unwrap();
        assert!(matches!(err, ProviderError::Missing(ContentId::About)));
    }

    #[test]
    fn header_drag_moves_window_by_cells() {
        let mut d = desktop();
        d.windows_mut().open(ContentId::Terminal);
        render(&mut d, Rect::new(0, 0, 120, 40));
        let rect = d.window_rect(ContentId::Terminal).unwrap();
        assert_eq!((rect.x, rect.y), (10, 5));

        let t = Instant::now();
        d.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 5), t);
        assert!(d.windows().drag_session().is_some());
        d.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 25, 8), t);
        d.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 25, 8), t);
        assert!(d.windows().drag_session().is_none());
        let rect = d.window_rect(ContentId::Terminal).unwrap();
        assert_eq!((rect.x, rect.y), (15, 8));
    }

    #[test]
    fn header_buttons_close_and_minimize() {
        let mut d = desktop();
        d.windows_mut().open(ContentId::About);
        d.windows_mut().open(ContentId::Skills);
        render(&mut d, Rect::new(0, 0, 160, 50));
        let skills = d.window_rect(ContentId::Skills).unwrap();
        let t = Instant::now();
        d.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), skills.x + 3, skills.y),
            t,
        );
        assert!(!d.windows().is_open_visible(ContentId::Skills));
        assert!(d.windows().window(ContentId::Skills).is_some());
        assert!(d.windows().drag_session().is_none());

        let about = d.window_rect(ContentId::About).unwrap();
        d.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), about.x + 1, about.y),
            t,
        );
        assert!(d.windows().window(ContentId::About).is_none());
    }

    #[test]
    fn keys_go_to_the_front_window() {
        let mut d = desktop();
        d.windows_mut().open(ContentId::Settings);
        render(&mut d, Rect::new(0, 0, 120, 40));
        let before = d.appearance().opacity();
        let key = Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert!(d.handle_event(&key, Instant::now()));
        assert_eq!(d.appearance().opacity(), before - 5);
    }

    #[test]
    fn focus_loss_cancels_drag() {
        let mut d = desktop();
        d.windows_mut().open(ContentId::Terminal);
        render(&mut d, Rect::new(0, 0, 120, 40));
        let t = Instant::now();
        d.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 5), t);
        d.handle_event(&Event::FocusLost, t);
        assert!(d.windows().drag_session().is_none());
    }

    #[test]
    fn host_requests_update_preferences_and_open_links() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = opened.clone();
        let mut d = desktop().with_link_handler(Arc::new(move |url: &str| {
            sink.lock().unwrap().push(url.to_string());
            true
        }));
        let t = Instant::now();
        d.apply_request(HostRequest::SetBackground(2), t);
        d.apply_request(HostRequest::SetBackground(99), t);
        d.apply_request(HostRequest::SetOpacity(3), t);
        d.apply_request(HostRequest::Toast(Toast::info("hi")), t);
        d.apply_request(HostRequest::OpenUrl("https://example.com".into()), t);
        assert_eq!(d.appearance().background_index(), 2);
        assert_eq!(d.appearance().opacity(), 10);
        assert_eq!(d.toasts().visible().count(), 1);
        assert_eq!(*opened.lock().unwrap(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn clicks_on_empty_desktop_are_ignored() {
        let mut d = desktop();
        render(&mut d, Rect::new(0, 0, 80, 24));
        assert!(!d.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
            Instant::now()
        ));
    }
}
