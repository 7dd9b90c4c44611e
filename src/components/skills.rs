use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, ProviderContext};
use crate::data::{SKILL_CATEGORIES, SKILLS, Skill, SkillLevel};
use crate::linkifier::Linkifier;
use crate::ui::UiFrame;

const NAME_WIDTH: usize = 18;
const LEVEL_WIDTH: usize = 14;

#[derive(Debug, Default)]
pub struct SkillsProvider {
    scroll: ScrollText,
    linkifier: Linkifier,
}

pub(crate) fn level_style(level: SkillLevel) -> Style {
    let color = match level {
        SkillLevel::Expert => crate::theme::highlight(),
        SkillLevel::Advanced => crate::theme::link(),
        SkillLevel::Intermediate | SkillLevel::Beginner => crate::theme::positive(),
    };
    Style::default().fg(color)
}

/// `width` cells of bar, filled in proportion to `percentage`.
pub(crate) fn percentage_bar(percentage: u8, width: usize) -> (String, String) {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    ("█".repeat(filled), "░".repeat(width - filled))
}

impl SkillsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn skill_row(skill: &Skill, width: u16) -> Vec<Span<'static>> {
        let fixed = NAME_WIDTH + LEVEL_WIDTH + 6;
        let bar_width = (width as usize).saturating_sub(fixed).clamp(4, 30);
        let (filled, empty) = percentage_bar(skill.percentage, bar_width);
        vec![
            Span::raw(format!("{:<NAME_WIDTH$}", skill.name)),
            Span::styled(
                format!("{:<LEVEL_WIDTH$}", skill.level.label()),
                level_style(skill.level),
            ),
            Span::styled(filled, Style::default().fg(crate::theme::accent())),
            Span::styled(empty, Style::default().fg(crate::theme::border())),
            Span::raw(format!(" {:>3}%", skill.percentage)),
        ]
    }

    pub(crate) fn document(&self, width: u16) -> Document<'_> {
        let mut doc = Document::new(width, &self.linkifier);
        doc.heading("Technical Skills")
            .muted(&format!(
                "{} skills across {} areas",
                SKILLS.len(),
                SKILL_CATEGORIES.len()
            ))
            .blank();
        for (key, label) in SKILL_CATEGORIES {
            doc.text(
                label,
                Style::default()
                    .fg(crate::theme::window_fg())
                    .add_modifier(Modifier::BOLD),
            );
            for skill in SKILLS.iter().filter(|s| s.category == *key) {
                doc.spans(Self::skill_row(skill, width));
                doc.muted(&format!(
                    "  {} yrs · {} projects",
                    skill.years, skill.projects
                ));
            }
            doc.blank();
        }
        doc
    }
}

impl ContentProvider for SkillsProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        let lines = self.document(ScrollText::text_width(area)).into_lines();
        self.scroll.render(frame, area, &lines);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &mut ProviderContext<'_>) -> bool {
        !matches!(self.scroll.handle_event(event), ScrollOutcome::Ignored)
    }
}
