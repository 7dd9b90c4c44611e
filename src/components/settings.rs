use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::appearance::{Appearance, BACKGROUNDS};
use crate::constants::{MAX_OPACITY, MIN_OPACITY, OPACITY_STEP};
use crate::ui::UiFrame;
use crate::window::PointerTarget;

// Row layout of the appearance page.
const OPACITY_TITLE_ROW: u16 = 3;
const SLIDER_ROW: u16 = 5;
const BACKGROUNDS_TITLE_ROW: u16 = 8;
const FIRST_BACKGROUND_ROW: u16 = 9;
const DECREASE: &str = "[-]";
const INCREASE: &str = "[+]";
/// Columns taken by the `[-] ` prefix and ` [+]` suffix around the bar.
const SLIDER_MARGIN: u16 = 4;

/// Opacity slider and background picker. Everything it changes is a host
/// preference, so it only ever emits [`HostRequest`]s.
#[derive(Debug, Default)]
pub struct SettingsProvider {
    /// Highlighted background row for keyboard selection.
    cursor: usize,
    /// Content width at the last render.
    width: u16,
}

fn bar_width(width: u16) -> u16 {
    width.saturating_sub(SLIDER_MARGIN * 2).max(1)
}

/// Snap to the slider's step and range.
pub fn snap_opacity(value: i32) -> u8 {
    let step = i32::from(OPACITY_STEP);
    let snapped = ((value + step / 2).div_euclid(step)) * step;
    snapped.clamp(i32::from(MIN_OPACITY), i32::from(MAX_OPACITY)) as u8
}

/// Opacity selected by a press `offset` cells into a bar `width` cells wide.
pub fn slider_value(offset: u16, width: u16) -> u8 {
    let span = i32::from(MAX_OPACITY - MIN_OPACITY);
    let max_offset = i32::from(width.saturating_sub(1).max(1));
    let offset = i32::from(offset).min(max_offset);
    snap_opacity(i32::from(MIN_OPACITY) + (offset * span + max_offset / 2) / max_offset)
}

enum SettingsHit {
    Decrease,
    Increase,
    Bar(u16),
    Background(usize),
}

impl SettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn hit(&self, column: u16, row: u16) -> Option<SettingsHit> {
        if column >= self.width {
            return None;
        }
        if row == SLIDER_ROW {
            let bar = bar_width(self.width);
            return if column < SLIDER_MARGIN {
                Some(SettingsHit::Decrease)
            } else if column < SLIDER_MARGIN + bar {
                Some(SettingsHit::Bar(column - SLIDER_MARGIN))
            } else {
                Some(SettingsHit::Increase)
            };
        }
        let index = usize::from(row.checked_sub(FIRST_BACKGROUND_ROW)?);
        (index < BACKGROUNDS.len()).then_some(SettingsHit::Background(index))
    }

    fn adjust(&self, ctx: &mut ProviderContext<'_>, delta: i32) {
        let next = snap_opacity(i32::from(ctx.appearance().opacity()) + delta);
        ctx.request(HostRequest::SetOpacity(next));
    }

    fn render_slider(&self, frame: &mut UiFrame<'_>, area: Rect, appearance: Appearance) {
        let y = area.y + SLIDER_ROW;
        let bar = bar_width(area.width);
        let button = Style::default().fg(crate::theme::accent());
        frame.set_string(area.x, y, DECREASE, button);
        let range = u32::from(MAX_OPACITY - MIN_OPACITY);
        let filled = (u32::from(appearance.opacity() - MIN_OPACITY) * u32::from(bar) + range / 2)
            / range;
        let filled = filled as u16;
        frame.set_string(
            area.x + SLIDER_MARGIN,
            y,
            &"━".repeat(filled as usize),
            Style::default().fg(crate::theme::accent()),
        );
        frame.set_string(
            area.x + SLIDER_MARGIN + filled,
            y,
            &"─".repeat((bar - filled) as usize),
            Style::default().fg(crate::theme::border()),
        );
        frame.set_string(area.x + SLIDER_MARGIN + bar + 1, y, INCREASE, button);
        let muted = Style::default().fg(crate::theme::header_fg());
        frame.set_string(area.x + SLIDER_MARGIN, y + 1, "10%", muted);
        frame.set_string(
            (area.x + SLIDER_MARGIN + bar).saturating_sub(4),
            y + 1,
            "100%",
            muted,
        );
    }
}

impl ContentProvider for SettingsProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.width = area.width;
        let appearance = ctx.appearance();
        let heading = Style::default()
            .fg(crate::theme::window_fg())
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(crate::theme::window_muted_fg());

        frame.set_string(area.x, area.y, "Customize your desktop environment", heading);
        frame.set_string(area.x, area.y + 1, "Personalize your portfolio experience", muted);

        let title_y = area.y + OPACITY_TITLE_ROW;
        frame.set_string(area.x, title_y, "Background Opacity", heading);
        let percent = format!("{}%", appearance.opacity());
        frame.set_string(
            (area.x + area.width).saturating_sub(percent.len() as u16),
            title_y,
            &percent,
            Style::default().fg(crate::theme::window_fg()),
        );
        frame.set_string(
            area.x,
            title_y + 1,
            "Adjust transparency for optimal visibility",
            muted,
        );
        self.render_slider(frame, area, appearance);

        frame.set_string(
            area.x,
            area.y + BACKGROUNDS_TITLE_ROW,
            "Available Backgrounds",
            heading,
        );
        for (idx, bg) in BACKGROUNDS.iter().enumerate() {
            let y = area.y + FIRST_BACKGROUND_ROW + idx as u16;
            let active = idx == appearance.background_index();
            let marker = if active { "(●)" } else { "( )" };
            let row_style = if ctx.focused() && idx == self.cursor {
                Style::default().bg(crate::theme::input_bg())
            } else {
                Style::default()
            };
            frame.fill(Rect::new(area.x, y, area.width, 1), " ", row_style);
            frame.set_string(area.x, y, marker, row_style.fg(crate::theme::accent()));
            frame.set_string(
                area.x + 4,
                y,
                "██",
                row_style.fg(crate::theme::rgb_to_color(bg.rgb)),
            );
            frame.set_string(area.x + 7, y, &format!("{:<20}", bg.name), row_style);
            frame.set_string(area.x + 27, y, "Static", row_style.fg(crate::theme::header_fg()));
            if active {
                frame.set_string(
                    area.x + 35,
                    y,
                    "ACTIVE",
                    Style::default()
                        .bg(crate::theme::accent())
                        .fg(crate::theme::window_fg())
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
        frame.set_string(
            area.x,
            area.y + FIRST_BACKGROUND_ROW + BACKGROUNDS.len() as u16 + 1,
            "Select a background to apply it. ←/→ adjust opacity, ↑/↓ and Enter pick.",
            muted,
        );
    }

    fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        match self.hit(column, row) {
            Some(_) => PointerTarget::Control,
            None => PointerTarget::Surface,
        }
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ProviderContext<'_>) -> bool {
        let step = i32::from(OPACITY_STEP);
        match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.hit(mouse.column, mouse.row) {
                    Some(SettingsHit::Decrease) => self.adjust(ctx, -step),
                    Some(SettingsHit::Increase) => self.adjust(ctx, step),
                    Some(SettingsHit::Bar(offset)) => {
                        let value = slider_value(offset, bar_width(self.width));
                        ctx.request(HostRequest::SetOpacity(value));
                    }
                    Some(SettingsHit::Background(idx)) => {
                        self.cursor = idx;
                        ctx.request(HostRequest::SetBackground(idx));
                    }
                    None => return false,
                }
                true
            }
            Event::Key(key) => {
                match key.code {
                    KeyCode::Left | KeyCode::Char('-') => self.adjust(ctx, -step),
                    KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                        self.adjust(ctx, step)
                    }
                    KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
                    KeyCode::Down => self.cursor = (self.cursor + 1).min(BACKGROUNDS.len() - 1),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        ctx.request(HostRequest::SetBackground(self.cursor));
                    }
                    KeyCode::Char(ch @ '1'..='9') => {
                        let idx = (ch as usize) - ('1' as usize);
                        if idx >= BACKGROUNDS.len() {
                            return false;
                        }
                        self.cursor = idx;
                        ctx.request(HostRequest::SetBackground(idx));
                    }
                    _ => return false,
                }
                true
            }
            _ => false,
        }
    }
}
