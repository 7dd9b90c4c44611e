use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::data::{PROJECTS, ProjectStatus};
use crate::linkifier::Linkifier;
use crate::ui::UiFrame;
use crate::window::PointerTarget;

#[derive(Debug, Default)]
pub struct ProjectsProvider {
    scroll: ScrollText,
    linkifier: Linkifier,
}

fn status_style(status: ProjectStatus) -> Style {
    let color = match status {
        ProjectStatus::Completed | ProjectStatus::Live => crate::theme::positive(),
        ProjectStatus::Ongoing | ProjectStatus::InDevelopment => crate::theme::heading(),
        ProjectStatus::Published => crate::theme::highlight(),
    };
    Style::default().fg(color)
}

impl ProjectsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn document(&self, width: u16) -> Document<'_> {
        let mut doc = Document::new(width, &self.linkifier);
        doc.heading("Featured Projects")
            .muted(&format!("{} projects across AI and web development", PROJECTS.len()))
            .blank();
        for project in PROJECTS {
            doc.spans(vec![
                Span::styled(
                    project.title.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", project.status.label()),
                    status_style(project.status),
                ),
                Span::styled(
                    format!("  {} · {}", project.year, project.category),
                    Style::default().fg(crate::theme::window_muted_fg()),
                ),
            ]);
            doc.text(project.description, Style::default())
                .text(
                    &project.technologies.join(" · "),
                    Style::default().fg(crate::theme::positive()),
                )
                .link("Code: ", project.github_url, project.github_url)
                .blank();
        }
        doc
    }
}

impl ContentProvider for ProjectsProvider {
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
