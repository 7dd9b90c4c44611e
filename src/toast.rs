//! Short-lived notifications drawn in the desktop's top-right corner.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::constants::TOAST_LIFETIME_MS;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            description: None,
        }
    }
}

#[derive(Debug)]
pub struct Toasts {
    lifetime: Duration,
    active: Vec<(Toast, Instant)>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_LIFETIME_MS))
    }
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            active: Vec::new(),
        }
    }

    pub fn push(&mut self, toast: Toast, now: Instant) {
        tracing::debug!(title = %toast.title, kind = ?toast.kind, "toast");
        self.active.push((toast, now + self.lifetime));
    }

    /// Drop toasts whose lifetime has passed.
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|(_, expires)| *expires > now);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Stack toasts downwards from the top-right corner of `area`, newest
    /// first.
    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let width = area.width.min(44);
        if width < 4 {
            return;
        }
        let mut y = area.y;
        let bottom = area.y.saturating_add(area.height);
        let x = area.x + area.width - width;
        let text_width = (width - 2) as usize;
        for toast in self.active.iter().rev().map(|(toast, _)| toast) {
            let height = if toast.description.is_some() { 2 } else { 1 };
            if y.saturating_add(height) > bottom {
                break;
            }
            let accent = match toast.kind {
                ToastKind::Success => crate::theme::positive(),
                ToastKind::Error => crate::theme::negative(),
                ToastKind::Info => crate::theme::accent(),
            };
            let base = Style::default()
                .bg(crate::theme::toast_bg())
                .fg(crate::theme::toast_fg());
            frame.fill(Rect::new(x, y, width, height), " ", base);
            frame.set_string(x, y, "▌", base.fg(accent));
            let title = crate::ui::truncate_to_width(&toast.title, text_width);
            frame.set_string(x + 2, y, &title, base.add_modifier(Modifier::BOLD));
            if let Some(description) = &toast.description {
                frame.set_string(x, y + 1, "▌", base.fg(accent));
                let text = crate::ui::truncate_to_width(description, text_width);
                frame.set_string(
                    x + 2,
                    y + 1,
                    &text,
                    base.fg(crate::theme::window_muted_fg()),
                );
            }
            y = y.saturating_add(height + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(100));
        toasts.push(Toast::info("first"), start);
        toasts.push(Toast::info("second"), start + Duration::from_millis(50));
        toasts.prune(start + Duration::from_millis(99));
        assert_eq!(toasts.visible().count(), 2);
        toasts.prune(start + Duration::from_millis(100));
        let titles: Vec<&str> = toasts.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second"]);
        toasts.prune(start + Duration::from_millis(200));
        assert!(toasts.is_empty());
    }

    #[test]
    fn newest_toast_renders_on_top() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push(Toast::info("old"), now);
        toasts.push(Toast::success("Message Sent!", "thanks"), now);
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        toasts.render(&mut ui, area);
        let row: String = (2..14)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(row, "Message Sent");
        assert_eq!(buf.cell((2, 3)).unwrap().symbol(), "o");
    }
}
