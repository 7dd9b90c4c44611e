use chrono::NaiveDateTime;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
};

use crate::constants::{DOCK_HEIGHT, TOP_BAR_HEIGHT};
use crate::content::ContentId;
use crate::launcher::DockIndicator;
use crate::ui::{UiFrame, rect_contains, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockHit {
    id: ContentId,
    rect: Rect,
}

impl DockHit {
    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// The top bar and the dock strip. Both are laid out per frame; the dock
/// remembers where each tile landed so presses can be mapped back to items.
#[derive(Debug)]
pub struct Panel {
    top_area: Rect,
    dock_area: Rect,
    dock_hits: Vec<DockHit>,
    title: String,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            top_area: Rect::default(),
            dock_area: Rect::default(),
            dock_hits: Vec::new(),
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn top_area(&self) -> Rect {
        self.top_area
    }

    pub fn dock_area(&self) -> Rect {
        self.dock_area
    }

    pub fn dock_hits(&self) -> &[DockHit] {
        &self.dock_hits
    }

    /// Split the provided `area` into three regions:
    /// - top bar (`TOP_BAR_HEIGHT` rows),
    /// - dock strip (`DOCK_HEIGHT` rows) at the bottom, and
    /// - the desktop in between, which is returned for windows.
    pub fn split_area(&mut self, area: Rect) -> (Rect, Rect, Rect) {
        let top_h = TOP_BAR_HEIGHT.min(area.height);
        let dock_h = DOCK_HEIGHT.min(area.height.saturating_sub(top_h));
        let top = Rect {
            height: top_h,
            ..area
        };
        let dock = Rect {
            y: area.y.saturating_add(area.height).saturating_sub(dock_h),
            height: dock_h,
            ..area
        };
        let desktop = Rect {
            y: area.y.saturating_add(top_h),
            height: area.height.saturating_sub(top_h).saturating_sub(dock_h),
            ..area
        };
        self.top_area = top;
        self.dock_area = dock;
        (top, dock, desktop)
    }

    /// Portfolio name on the left, `Sat, Oct 18  3:04 PM` on the right.
    pub fn render_top(&self, frame: &mut UiFrame<'_>, now: NaiveDateTime) {
        let area = self.top_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default()
            .bg(crate::theme::bar_bg())
            .fg(crate::theme::bar_fg());
        frame.fill(area, " ", style);
        let clock = format!("{}  {}", now.format("%a, %b %-d"), now.format("%-I:%M %p"));
        let clock_width = clock.chars().count() as u16;
        let title_room = area.width.saturating_sub(clock_width + 2) as usize;
        let title = truncate_to_width(&format!(" {}", self.title), title_room);
        frame.set_string(area.x, area.y, &title, style.add_modifier(Modifier::BOLD));
        if clock_width < area.width {
            frame.set_string(
                area.x + area.width - clock_width - 1,
                area.y,
                &clock,
                style,
            );
        }
    }

    /// Dock tiles centred in the strip: a spacer row, the tiles, and an
    /// indicator row marking open windows.
    pub fn render_dock(&mut self, frame: &mut UiFrame<'_>, indicators: &[DockIndicator]) {
        self.dock_hits.clear();
        let area = self.dock_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(crate::theme::dock_bg())
            .fg(crate::theme::bar_fg());
        frame.fill(area, " ", base);

        let labelled: Vec<String> = indicators
            .iter()
            .map(|i| format!(" {} {} ", i.item.glyph, i.item.label))
            .collect();
        let labelled_width: usize =
            labelled.iter().map(|t| t.chars().count()).sum::<usize>() + indicators.len();
        let tiles: Vec<String> = if labelled_width <= area.width as usize {
            labelled
        } else {
            indicators
                .iter()
                .map(|i| format!(" {} ", i.item.glyph))
                .collect()
        };
        let total: u16 = tiles
            .iter()
            .map(|t| t.chars().count() as u16 + 1)
            .sum::<u16>()
            .saturating_sub(1);
        let tile_row = area.y + area.height.min(2).saturating_sub(1);
        let indicator_row = tile_row + 1;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for (indicator, tile) in indicators.iter().zip(tiles) {
            let width = tile.chars().count() as u16;
            let tile_style = Style::default()
                .bg(crate::theme::rgb_to_color(indicator.item.color))
                .fg(crate::theme::bar_fg())
                .add_modifier(Modifier::BOLD);
            frame.set_string(x, tile_row, &tile, tile_style);
            if indicator.open && indicator_row < area.y + area.height {
                frame.set_string(
                    x + width / 2,
                    indicator_row,
                    "•",
                    base.fg(crate::theme::dock_indicator()),
                );
            }
            let rect = Rect {
                x,
                y: area.y,
                width,
                height: area.height,
            }
            .intersection(area);
            if rect.width > 0 {
                self.dock_hits.push(DockHit {
                    id: indicator.item.id,
                    rect,
                });
            }
            x = x.saturating_add(width + 1);
        }
    }

    pub fn dock_item_at(&self, column: u16, row: u16) -> Option<ContentId> {
        self.dock_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, column, row))
            .map(|hit| hit.id)
    }

    /// The dock item under a left press, if any.
    pub fn hit_test_dock(&self, event: &Event) -> Option<ContentId> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        self.dock_item_at(mouse.column, mouse.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::Dock;
    use crate::window::WindowManager;
    use chrono::NaiveDate;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn split_area_reserves_bars() {
        let mut p = Panel::new("Shaik Folio");
        let (top, dock, desktop) = p.split_area(Rect::new(0, 0, 80, 24));
        assert_eq!(top, Rect::new(0, 0, 80, 1));
        assert_eq!(dock, Rect::new(0, 21, 80, 3));
        assert_eq!(desktop, Rect::new(0, 1, 80, 20));
        let (_, dock, desktop) = p.split_area(Rect::new(0, 0, 80, 2));
        assert_eq!(dock.height, 1);
        assert_eq!(desktop.height, 0);
    }

    #[test]
    fn top_bar_shows_name_and_clock() {
        let mut p = Panel::new("Shaik Folio");
        let area = Rect::new(0, 0, 40, 1);
        p.split_area(Rect::new(0, 0, 40, 10));
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let mut ui = UiFrame::from_parts(Rect::new(0, 0, 40, 10), &mut buf);
        let now = NaiveDate::from_ymd_opt(2025, 10, 18)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap();
        p.render_top(&mut ui, now);
        let text = row_text(&buf, area.y);
        assert!(text.starts_with(" Shaik Folio"));
        assert!(text.ends_with("Sat, Oct 18  3:04 PM "), "{text:?}");
    }

    #[test]
    fn dock_tiles_map_back_to_items() {
        let mut p = Panel::new("x");
        let full = Rect::new(0, 0, 160, 20);
        let (_, dock_area, _) = p.split_area(full);
        let mut wm = WindowManager::new();
        wm.open(ContentId::Terminal);
        let dock = Dock::new();
        let mut buf = Buffer::empty(full);
        let mut ui = UiFrame::from_parts(full, &mut buf);
        p.render_dock(&mut ui, &dock.indicators(&wm));

        assert_eq!(p.dock_hits().len(), 7);
        let terminal = p
            .dock_hits()
            .iter()
            .find(|h| h.id() == ContentId::Terminal)
            .unwrap()
            .rect();
        let press = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: terminal.x + 1,
            row: dock_area.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(p.hit_test_dock(&press), Some(ContentId::Terminal));
        assert!(row_text(&buf, dock_area.y + 1).contains("Who am i"));
        assert_eq!(
            buf.cell((terminal.x + terminal.width / 2, dock_area.y + 2))
                .unwrap()
                .symbol(),
            "•"
        );
        assert_eq!(p.dock_item_at(0, dock_area.y + 1), None);
    }

    #[test]
    fn narrow_dock_falls_back_to_glyphs() {
        let mut p = Panel::new("x");
        let full = Rect::new(0, 0, 30, 10);
        let (_, dock_area, _) = p.split_area(full);
        let wm = WindowManager::new();
        let mut buf = Buffer::empty(full);
        let mut ui = UiFrame::from_parts(full, &mut buf);
        p.render_dock(&mut ui, &Dock::new().indicators(&wm));
        assert!(p.dock_hits().iter().all(|h| h.rect().width == 3));
        assert!(!row_text(&buf, dock_area.y + 1).contains("Terminal"));
    }
}
