use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::data::CERTIFICATES;
use crate::linkifier::Linkifier;
use crate::ui::UiFrame;
use crate::window::PointerTarget;

#[derive(Debug, Default)]
pub struct CertificatesProvider {
    scroll: ScrollText,
    linkifier: Linkifier,
}

impl CertificatesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn document(&self, width: u16) -> Document<'_> {
        let mut doc = Document::new(width, &self.linkifier);
        doc.heading("Professional Certifications")
            .muted(&format!("{} verified credentials", CERTIFICATES.len()))
            .blank();
        for cert in CERTIFICATES {
            doc.text(cert.name, Style::default().add_modifier(Modifier::BOLD))
                .muted(&format!("{} · {} · {}", cert.issuer, cert.date, cert.category))
                .link("Verify: ", "View credential", cert.url)
                .blank();
        }
        doc
    }
}

impl ContentProvider for CertificatesProvider {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_certificate_links_to_its_verification_page() {
        let provider = CertificatesProvider::new();
        let lines = provider.document(90).into_lines();
        let urls: Vec<&str> = lines
            .iter()
            .flat_map(|l| l.links())
            .map(|l| l.url.as_str())
            .collect();
        assert_eq!(urls.len(), CERTIFICATES.len());
        assert!(urls.iter().zip(CERTIFICATES).all(|(u, c)| *u == c.url));
    }
}
