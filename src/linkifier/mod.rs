use std::ops::Range;
use std::sync::Arc;

use linkify::{LinkFinder, LinkKind};
use ratatui::style::{Modifier, Style};

/// Opens a link target. Returns whether the link was handled.
pub type LinkHandler = Arc<dyn Fn(&str) -> bool + Send + Sync + 'static>;

/// Handler that launches the system browser. Failures are logged, never
/// surfaced to the desktop.
pub fn browser_link_handler() -> LinkHandler {
    Arc::new(|url: &str| match webbrowser::open(url) {
        Ok(()) => {
            tracing::info!(url, "opened link");
            true
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "failed to open link");
            false
        }
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedLink {
    /// Byte range of the link text within the scanned string.
    pub range: Range<usize>,
    /// Target suitable for a browser: bare domains gain `https://` and
    /// e-mail addresses gain `mailto:`.
    pub url: String,
}

#[derive(Debug)]
pub struct Linkifier {
    finder: LinkFinder,
}

impl Default for Linkifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Linkifier {
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url, LinkKind::Email]);
        finder.url_must_have_scheme(false);
        Self { finder }
    }

    pub fn detect_links(&self, text: &str) -> Vec<DetectedLink> {
        let mut links = Vec::new();
        for span in self.finder.links(text) {
            let start = span.start();
            let (matched, _) = strip_trailing_punctuation(span.as_str());
            if matched.is_empty() {
                continue;
            }
            let url = match span.kind() {
                LinkKind::Email => format!("mailto:{matched}"),
                _ if matched.contains("://") => matched.to_string(),
                // bare words like `Node.js` look like domains; require a path
                _ if !matched.contains('/') => continue,
                _ => format!("https://{matched}"),
            };
            links.push(DetectedLink {
                range: start..start + matched.len(),
                url,
            });
        }
        links
    }

    /// Split `text` into `(segment, link)` pieces in order, so callers can
    /// style link segments differently.
    pub fn split(&self, text: &str) -> Vec<(String, Option<String>)> {
        let mut parts = Vec::new();
        let mut last = 0;

        for link in self.detect_links(text) {
            if link.range.start > last {
                parts.push((text[last..link.range.start].to_string(), None));
            }
            parts.push((text[link.range.clone()].to_string(), Some(link.url)));
            last = link.range.end;
        }

        if last < text.len() {
            parts.push((text[last..].to_string(), None));
        }

        if parts.is_empty() {
            parts.push((text.to_string(), None));
        }

        parts
    }
}

pub fn decorate_link_style(style: Style) -> Style {
    style
        .add_modifier(Modifier::UNDERLINED)
        .fg(crate::theme::link())
}

fn strip_trailing_punctuation(s: &str) -> (&str, &str) {
    let trimmed = s.trim_end_matches(['.', ',', '?', '!', ':', ';', ')', ']', '\'', '"']);
    s.split_at(trimmed.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domains_gain_a_scheme() {
        let l = Linkifier::new();
        let links = l.detect_links("GitHub: github.com/skluqmansajid");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://github.com/skluqmansajid");
        assert_eq!(links[0].range, 8..32);
    }

    #[test]
    fn dotted_words_without_a_path_are_not_links() {
        let l = Linkifier::new();
        assert!(l.detect_links("React, Node.js, MongoDB").is_empty());
    }

    #[test]
    fn emails_become_mailto() {
        let l = Linkifier::new();
        let links = l.detect_links("Email: someone@example.com");
        assert_eq!(links[0].url, "mailto:someone@example.com");
    }

    #[test]
    fn trailing_punctuation_is_not_part_of_the_link() {
        let l = Linkifier::new();
        let links = l.detect_links("see https://example.com/a).");
        assert_eq!(links[0].url, "https://example.com/a");
    }

    #[test]
    fn split_preserves_all_text() {
        let l = Linkifier::new();
        let text = "Verify: https://www.credly.com/go/X4OAXmv1 now";
        let parts = l.split(text);
        let joined: String = parts.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, text);
        assert_eq!(parts.iter().filter(|(_, link)| link.is_some()).count(), 1);
        assert_eq!(l.split("plain words"), vec![("plain words".to_string(), None)]);
    }
}
