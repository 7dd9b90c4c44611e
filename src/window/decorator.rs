use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use crate::ui::UiFrame;

/// What a press on a window's header row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Close,
    Minimize,
    Drag,
}

/// Draws window chrome and answers geometry questions about it. Geometry is
/// in terminal cells; `rect` is the whole window including chrome.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(&self, frame: &mut UiFrame<'_>, rect: Rect, title: &str, focused: bool);

    /// Area left for the content provider.
    fn content_area(&self, rect: Rect) -> Rect;

    /// Classify a press at `(column, row)`. `None` means the press is not on
    /// the header row.
    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> Option<HeaderAction>;
}

// Header layout: close glyph at column 1, minimize glyph at column 3, title
// from column 5. Each button owns a two-column hit zone.
const CLOSE_COLUMNS: std::ops::Range<u16> = 0..2;
const MINIMIZE_COLUMNS: std::ops::Range<u16> = 2..4;
const TITLE_OFFSET: u16 = 5;

/// Dark translucent-glass look: a solid header strip with traffic-light
/// buttons over a bordered body.
#[derive(Debug, Default)]
pub struct GlassDecorator;

impl WindowDecorator for GlassDecorator {
    fn render_window(&self, frame: &mut UiFrame<'_>, rect: Rect, title: &str, focused: bool) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let body_style = Style::default()
            .bg(crate::theme::window_bg())
            .fg(crate::theme::window_fg());
        let border_style = Style::default().bg(crate::theme::window_bg()).fg(if focused {
            crate::theme::border_focused()
        } else {
            crate::theme::border()
        });
        let header_style = if focused {
            Style::default()
                .bg(crate::theme::header_bg())
                .fg(crate::theme::header_focused_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(crate::theme::header_bg())
                .fg(crate::theme::header_fg())
        };

        frame.fill(rect, " ", body_style);

        // Header
        let header = Rect {
            height: 1,
            ..rect
        };
        frame.fill(header, " ", header_style);
        let button_bg = crate::theme::header_bg();
        frame.set_string(
            rect.x.saturating_add(1),
            rect.y,
            "●",
            Style::default().bg(button_bg).fg(crate::theme::close_button()),
        );
        frame.set_string(
            rect.x.saturating_add(3),
            rect.y,
            "●",
            Style::default()
                .bg(button_bg)
                .fg(crate::theme::minimize_button()),
        );
        if rect.width > TITLE_OFFSET + 1 {
            let available = (rect.width - TITLE_OFFSET - 1) as usize;
            let title = crate::ui::truncate_to_width(title, available);
            frame.set_string(rect.x + TITLE_OFFSET, rect.y, &title, header_style);
        }

        if rect.height < 2 {
            return;
        }
        let left = rect.x;
        let right = rect.x.saturating_add(rect.width).saturating_sub(1);
        let bottom = rect.y.saturating_add(rect.height).saturating_sub(1);

        // Sides
        for y in rect.y.saturating_add(1)..bottom {
            frame.set_string(left, y, "│", border_style);
            frame.set_string(right, y, "│", border_style);
        }
        // Bottom
        if bottom > rect.y {
            for x in left..=right {
                let symbol = if x == left {
                    "└"
                } else if x == right {
                    "┘"
                } else {
                    "─"
                };
                frame.set_string(x, bottom, symbol, border_style);
            }
        }
    }

    fn content_area(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x.saturating_add(1),
            y: rect.y.saturating_add(1),
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(2),
        }
    }

    fn hit_test(&self, rect: Rect, column: u16, row: u16) -> Option<HeaderAction> {
        if row != rect.y || !crate::ui::rect_contains(rect, column, row) {
            return None;
        }
        let offset = column - rect.x;
        if CLOSE_COLUMNS.contains(&offset) {
            Some(HeaderAction::Close)
        } else if MINIMIZE_COLUMNS.contains(&offset) {
            Some(HeaderAction::Minimize)
        } else {
            Some(HeaderAction::Drag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn rendered_row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn header_buttons_and_drag_strip() {
        let rect = Rect::new(4, 2, 20, 6);
        let d = GlassDecorator;
        assert_eq!(d.hit_test(rect, 4, 2), Some(HeaderAction::Close));
        assert_eq!(d.hit_test(rect, 5, 2), Some(HeaderAction::Close));
        assert_eq!(d.hit_test(rect, 6, 2), Some(HeaderAction::Minimize));
        assert_eq!(d.hit_test(rect, 7, 2), Some(HeaderAction::Minimize));
        assert_eq!(d.hit_test(rect, 8, 2), Some(HeaderAction::Drag));
        assert_eq!(d.hit_test(rect, 23, 2), Some(HeaderAction::Drag));
        assert_eq!(d.hit_test(rect, 24, 2), None);
        assert_eq!(d.hit_test(rect, 8, 3), None);
        assert_eq!(d.hit_test(rect, 3, 2), None);
    }

    #[test]
    fn content_area_sits_inside_the_chrome() {
        let d = GlassDecorator;
        assert_eq!(d.content_area(Rect::new(0, 0, 10, 5)), Rect::new(1, 1, 8, 3));
        assert_eq!(d.content_area(Rect::new(0, 0, 1, 1)), Rect::new(1, 1, 0, 0));
    }

    #[test]
    fn renders_title_and_border() {
        let area = Rect::new(0, 0, 16, 4);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        GlassDecorator.render_window(&mut ui, area, "Terminal", true);
        assert_eq!(rendered_row(&buf, 0), " ● ● Terminal   ");
        assert_eq!(rendered_row(&buf, 3), "└──────────────┘");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), "│");
        assert_eq!(buf.cell((15, 2)).unwrap().symbol(), "│");
    }

    #[test]
    fn partially_offscreen_windows_are_clipped() {
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        GlassDecorator.render_window(&mut ui, Rect::new(4, 1, 30, 10), "Projects", false);
        assert_eq!(buf.cell((4, 2)).unwrap().symbol(), "│");
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), " ");
    }
}
