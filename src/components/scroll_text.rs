//! Scrollable, word-wrapped text with clickable links.
//!
//! Providers describe their content with a [`Document`] each frame; the
//! [`ScrollText`] keeps the scroll offset and remembers where links were
//! drawn so presses on them can be classified as controls.

use std::ops::Range;

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::constants::SCROLL_LINES_PER_NOTCH;
use crate::linkifier::{Linkifier, decorate_link_style};
use crate::ui::UiFrame;
use crate::window::PointerTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLink {
    /// Columns covered by the link, relative to the line start.
    pub columns: Range<u16>,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct DocLine {
    spans: Vec<Span<'static>>,
    links: Vec<LineLink>,
}

impl DocLine {
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    pub fn links(&self) -> &[LineLink] {
        &self.links
    }

    fn width(&self) -> u16 {
        self.spans
            .iter()
            .map(|s| s.content.chars().count() as u16)
            .sum()
    }

    fn push(&mut self, text: String, style: Style, link: Option<String>) {
        if let Some(url) = link {
            let start = self.width();
            let end = start + text.chars().count() as u16;
            self.links.push(LineLink {
                columns: start..end,
                url,
            });
        }
        self.spans.push(Span::styled(text, style));
    }
}

/// Line-oriented content builder. Text is wrapped to `width` columns and
/// scanned for links as it is added.
pub struct Document<'a> {
    width: u16,
    linkifier: &'a Linkifier,
    lines: Vec<DocLine>,
}

impl<'a> Document<'a> {
    pub fn new(width: u16, linkifier: &'a Linkifier) -> Self {
        Self {
            width: width.max(1),
            linkifier,
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(DocLine::default());
        self
    }

    pub fn heading(&mut self, text: &str) -> &mut Self {
        let style = Style::default()
            .fg(crate::theme::heading())
            .add_modifier(Modifier::BOLD);
        self.text(text, style)
    }

    pub fn muted(&mut self, text: &str) -> &mut Self {
        self.text(text, Style::default().fg(crate::theme::window_muted_fg()))
    }

    /// Wrapped text; any URL or e-mail address inside becomes a link.
    pub fn text(&mut self, text: &str, style: Style) -> &mut Self {
        self.indented("", text, style)
    }

    /// Wrapped text whose first row starts with `prefix` and whose
    /// continuation rows are indented by the prefix width.
    pub fn indented(&mut self, prefix: &str, text: &str, style: Style) -> &mut Self {
        let indent = prefix.chars().count();
        let available = (self.width as usize).saturating_sub(indent).max(1);
        for (idx, row) in wrap(text, available).into_iter().enumerate() {
            let mut line = DocLine::default();
            if idx == 0 {
                line.push(prefix.to_string(), style, None);
            } else if indent > 0 {
                line.push(" ".repeat(indent), style, None);
            }
            for (segment, link) in self.linkifier.split(&row) {
                let segment_style = if link.is_some() {
                    decorate_link_style(style)
                } else {
                    style
                };
                line.push(segment, segment_style, link);
            }
            self.lines.push(line);
        }
        self
    }

    /// `label: value` on one logical line, the label muted.
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        let prefix = format!("{label}: ");
        let mut line = DocLine::default();
        line.push(
            prefix.clone(),
            Style::default().fg(crate::theme::window_muted_fg()),
            None,
        );
        let remaining = (self.width as usize).saturating_sub(prefix.chars().count());
        let value = crate::ui::truncate_to_width(value, remaining);
        for (segment, link) in self.linkifier.split(&value) {
            let style = if link.is_some() {
                decorate_link_style(Style::default())
            } else {
                Style::default()
            };
            line.push(segment, style, link);
        }
        self.lines.push(line);
        self
    }

    /// An explicit link whose visible label differs from its target.
    pub fn link(&mut self, prefix: &str, label: &str, url: &str) -> &mut Self {
        let mut line = DocLine::default();
        line.push(prefix.to_string(), Style::default(), None);
        line.push(
            label.to_string(),
            decorate_link_style(Style::default()),
            Some(url.to_string()),
        );
        self.lines.push(line);
        self
    }

    /// A pre-styled single row; truncated, never wrapped.
    pub fn spans(&mut self, spans: Vec<Span<'static>>) -> &mut Self {
        let mut line = DocLine::default();
        let mut remaining = self.width as usize;
        for span in spans {
            if remaining == 0 {
                break;
            }
            let text = crate::ui::truncate_to_width(&span.content, remaining);
            remaining -= text.chars().count();
            line.push(text, span.style, None);
        }
        self.lines.push(line);
        self
    }

    pub fn into_lines(self) -> Vec<DocLine> {
        self.lines
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    Ignored,
    Consumed,
    OpenLink(String),
}

#[derive(Debug, Default)]
pub struct ScrollText {
    offset: usize,
    total: usize,
    view: usize,
    /// Links drawn last frame: (row within the area, columns, url).
    visible_links: Vec<(u16, Range<u16>, String)>,
}

impl ScrollText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.view)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.offset.saturating_add_signed(delta);
        self.offset = next.min(self.max_offset());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Show the last lines on the next render, however many there are by
    /// then.
    pub fn pin_to_bottom(&mut self) {
        self.offset = usize::MAX;
    }

    /// Width available for text when a scrollbar may be needed.
    pub fn text_width(area: Rect) -> u16 {
        area.width.saturating_sub(1).max(1)
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, lines: &[DocLine]) {
        self.total = lines.len();
        self.view = area.height as usize;
        self.offset = self.offset.min(self.max_offset());
        self.visible_links.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (row, line) in lines.iter().skip(self.offset).take(self.view).enumerate() {
            let row = row as u16;
            let rect = Rect {
                x: area.x,
                y: area.y + row,
                width: Self::text_width(area),
                height: 1,
            };
            frame.render_widget(Paragraph::new(Line::from(line.spans.clone())), rect);
            for link in &line.links {
                self.visible_links
                    .push((row, link.columns.clone(), link.url.clone()));
            }
        }
        if self.total > self.view {
            let mut state = ScrollbarState::new(self.max_offset()).position(self.offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area,
                &mut state,
            );
        }
    }

    /// Link drawn at `(column, row)` relative to the rendered area.
    pub fn link_at(&self, column: u16, row: u16) -> Option<&str> {
        self.visible_links
            .iter()
            .find(|(r, cols, _)| *r == row && cols.contains(&column))
            .map(|(_, _, url)| url.as_str())
    }

    pub fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        if self.link_at(column, row).is_some() {
            PointerTarget::Control
        } else {
            PointerTarget::Surface
        }
    }

    /// Handle an event whose mouse coordinates are already relative to the
    /// rendered area.
    pub fn handle_event(&mut self, event: &Event) -> ScrollOutcome {
        let page = self.view.max(1) as isize;
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => {
                    self.scroll_by(SCROLL_LINES_PER_NOTCH as isize);
                    ScrollOutcome::Consumed
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_by(-(SCROLL_LINES_PER_NOTCH as isize));
                    ScrollOutcome::Consumed
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    match self.link_at(mouse.column, mouse.row) {
                        Some(url) => ScrollOutcome::OpenLink(url.to_string()),
                        None => ScrollOutcome::Ignored,
                    }
                }
                _ => ScrollOutcome::Ignored,
            },
            Event::Key(key) => {
                match key.code {
                    KeyCode::Down => self.scroll_by(1),
                    KeyCode::Up => self.scroll_by(-1),
                    KeyCode::PageDown => self.scroll_by(page),
                    KeyCode::PageUp => self.scroll_by(-page),
                    KeyCode::Home => self.offset = 0,
                    KeyCode::End => self.scroll_to_bottom(),
                    _ => return ScrollOutcome::Ignored,
                }
                ScrollOutcome::Consumed
            }
            _ => ScrollOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn render(scroll: &mut ScrollText, lines: &[DocLine], area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        scroll.render(&mut ui, area, lines);
        buf
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_ones() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn document_records_link_columns() {
        let linkifier = Linkifier::new();
        let mut doc = Document::new(40, &linkifier);
        doc.field("GitHub", "github.com/someone")
            .link("  ", "Verify", "https://example.com/v");
        let lines = doc.into_lines();
        assert_eq!(lines[0].plain(), "GitHub: github.com/someone");
        assert_eq!(lines[0].links()[0].columns, 8..26);
        assert_eq!(lines[1].links()[0].columns, 2..8);
        assert_eq!(lines[1].links()[0].url, "https://example.com/v");
    }

    #[test]
    fn indented_text_aligns_continuation_rows() {
        let linkifier = Linkifier::new();
        let mut doc = Document::new(10, &linkifier);
        doc.indented("- ", "alpha beta gamma", Style::default());
        let rows: Vec<String> = doc.into_lines().iter().map(DocLine::plain).collect();
        assert_eq!(rows, vec!["- alpha", "  beta", "  gamma"]);
    }

    #[test]
    fn links_are_controls_only_where_drawn() {
        let linkifier = Linkifier::new();
        let mut doc = Document::new(30, &linkifier);
        doc.blank().link("", "repo", "https://example.com/repo");
        let lines = doc.into_lines();
        let mut scroll = ScrollText::new();
        render(&mut scroll, &lines, Rect::new(0, 0, 30, 5));
        assert_eq!(scroll.pointer_target(1, 1), PointerTarget::Control);
        assert_eq!(scroll.pointer_target(1, 0), PointerTarget::Surface);
        assert_eq!(scroll.pointer_target(10, 1), PointerTarget::Surface);
        assert_eq!(
            scroll.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 1)),
            ScrollOutcome::OpenLink("https://example.com/repo".to_string())
        );
    }

    #[test]
    fn wheel_and_keys_scroll_within_bounds() {
        let linkifier = Linkifier::new();
        let mut doc = Document::new(10, &linkifier);
        for i in 0..10 {
            doc.text(&format!("row {i}"), Style::default());
        }
        let lines = doc.into_lines();
        let mut scroll = ScrollText::new();
        let area = Rect::new(0, 0, 10, 4);
        render(&mut scroll, &lines, area);
        assert_eq!(
            scroll.handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            ScrollOutcome::Consumed
        );
        assert_eq!(scroll.offset(), SCROLL_LINES_PER_NOTCH);
        scroll.handle_event(&Event::Key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)));
        assert_eq!(scroll.offset(), 6);
        scroll.handle_event(&mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(scroll.offset(), 6);
        let buf = render(&mut scroll, &lines, area);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "r");
        assert_eq!(buf.cell((4, 0)).unwrap().symbol(), "6");
        scroll.handle_event(&Event::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)));
        assert_eq!(scroll.offset(), 0);
    }
}
