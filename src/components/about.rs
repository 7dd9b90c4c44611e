use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::data::{ACHIEVEMENTS, EDUCATION, EXPERIENCES, LANGUAGES, PERSONAL_INFO, PUBLICATIONS};
use crate::linkifier::Linkifier;
use crate::ui::UiFrame;
use crate::window::PointerTarget;

/// Biography: summary, education, experience, publications, achievements and
/// languages.
#[derive(Debug, Default)]
pub struct AboutProvider {
    scroll: ScrollText,
    linkifier: Linkifier,
}

impl AboutProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn document(&self, width: u16) -> Document<'_> {
        let info = &PERSONAL_INFO;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let accent = Style::default().fg(crate::theme::link());
        let mut doc = Document::new(width, &self.linkifier);

        doc.text(info.name, bold.fg(crate::theme::window_fg()))
            .text(info.title, accent)
            .muted(info.location)
            .blank()
            .text(info.summary, Style::default())
            .blank();

        doc.heading("Education");
        for edu in EDUCATION {
            doc.text(edu.degree, bold)
                .muted(&format!("{} · {} · {}", edu.institution, edu.year, edu.grade));
        }
        doc.blank().heading("Experience");
        for exp in EXPERIENCES {
            doc.text(&format!("{} - {}", exp.title, exp.company), bold)
                .muted(exp.period);
            for item in exp.description {
                doc.indented("  • ", item, Style::default());
            }
        }
        doc.blank().heading("Publications");
        for publication in PUBLICATIONS {
            doc.indented("• ", publication.title, Style::default())
                .indented("  ", publication.journal, Style::default().fg(crate::theme::window_muted_fg()));
        }
        doc.blank().heading("Achievements");
        for achievement in ACHIEVEMENTS {
            doc.indented("• ", achievement, Style::default());
        }
        doc.blank()
            .heading("Languages")
            .text(&LANGUAGES.join(" · "), Style::default());
        doc
    }
}

impl ContentProvider for AboutProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        let lines = self.document(ScrollText::text_width(area)).into_lines();
        self.scroll.render(frame, area, &lines);
    }

    fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        self.scroll.pointer_target(column, row)
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ProviderContext<'_>) -> bool {
        match self.scroll.handle_event(event) {
            ScrollOutcome::Ignored => false,
            ScrollOutcome::Consumed => true,
            ScrollOutcome::OpenLink(url) => {
                ctx.request(HostRequest::OpenUrl(url));
                true
            }
        }
    }
}
