//! A fake shell: a fixed table of commands answered from the portfolio data.
//! Nothing is ever executed.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::data::{CERTIFICATES, EDUCATION, EXPERIENCES, PERSONAL_INFO, PROJECTS, SKILLS};
use crate::linkifier::Linkifier;
use crate::ui::UiFrame;
use crate::window::PointerTarget;

pub const PROMPT: &str = "luqman@ubuntu:~$";
const SHORTCUTS_HINT: &str =
    "Quick Shortcuts: a=about, s=skills, p=projects, c=certificates, h=help";
const SKILLS_SHOWN: usize = 12;

const HELP: &str = indoc! {"
    about (a)          - Personal information
    skills (s)         - Technical skills
    projects (p)       - Project portfolio
    education (e)      - Education history
    certificates (c)   - Certifications
    contact (co)       - Contact info
    experience (ex)    - Work experience
    clear (cl)         - Clear terminal
    help (h)           - Show commands
"};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Plain,
    Heading,
    Accent,
    Muted,
    Success,
    Error,
}

impl OutputStyle {
    fn style(self) -> Style {
        match self {
            OutputStyle::Plain => Style::default().fg(crate::theme::window_fg()),
            OutputStyle::Heading => Style::default()
                .fg(crate::theme::heading())
                .add_modifier(Modifier::BOLD),
            OutputStyle::Accent => Style::default().fg(crate::theme::link()),
            OutputStyle::Muted => Style::default().fg(crate::theme::window_muted_fg()),
            OutputStyle::Success => Style::default().fg(crate::theme::positive()),
            OutputStyle::Error => Style::default().fg(crate::theme::negative()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: OutputStyle,
}

fn line(style: OutputStyle, text: impl Into<String>) -> OutputLine {
    OutputLine {
        text: text.into(),
        style,
    }
}

/// One command and its answer. The banner is an entry with empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub input: String,
    pub output: Vec<OutputLine>,
}

#[derive(Debug, Clone)]
pub struct Interpreter {
    history: Vec<Entry>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a shortcut to its command name.
pub fn resolve(command: &str) -> &str {
    match command {
        "a" => "about",
        "s" => "skills",
        "p" => "projects",
        "e" => "education",
        "c" => "certificates",
        "co" => "contact",
        "ex" => "experience",
        "cl" => "clear",
        "h" => "help",
        other => other,
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            history: vec![Entry {
                input: String::new(),
                output: vec![
                    line(
                        OutputStyle::Success,
                        "Welcome to Luqman's Professional Terminal!",
                    ),
                    line(
                        OutputStyle::Muted,
                        "Ubuntu 22.04 LTS - Type 'help' or 'h' for available commands",
                    ),
                    line(OutputStyle::Accent, PERSONAL_INFO.title),
                    line(OutputStyle::Heading, SHORTCUTS_HINT),
                ],
            }],
        }
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    /// Run one line of input. Input is trimmed and lower-cased before lookup;
    /// the raw input is what gets echoed.
    pub fn execute(&mut self, input: &str) {
        let raw = input.trim().to_lowercase();
        if raw.is_empty() {
            self.history.push(Entry {
                input: input.to_string(),
                output: Vec::new(),
            });
            return;
        }
        let command = resolve(&raw);
        tracing::debug!(command, "terminal command");
        if command == "clear" {
            self.history = vec![Entry {
                input: String::new(),
                output: vec![
                    line(
                        OutputStyle::Success,
                        "Terminal cleared. Type 'help' or 'h' for commands.",
                    ),
                    line(OutputStyle::Heading, SHORTCUTS_HINT),
                ],
            }];
            return;
        }
        self.history.push(Entry {
            input: input.to_string(),
            output: output_for(command),
        });
    }
}

fn output_for(command: &str) -> Vec<OutputLine> {
    let mut out = Vec::new();
    match command {
        "help" => {
            out.push(line(OutputStyle::Heading, "Available Commands & Shortcuts:"));
            out.extend(HELP.lines().map(|l| line(OutputStyle::Success, l)));
        }
        "about" => {
            let info = &PERSONAL_INFO;
            out.push(line(OutputStyle::Accent, info.name));
            out.push(line(OutputStyle::Plain, info.title));
            out.push(line(OutputStyle::Muted, info.summary));
            out.push(line(
                OutputStyle::Muted,
                format!("Location: {}", info.location),
            ));
        }
        "skills" => {
            out.push(line(OutputStyle::Heading, "Technical Skills:"));
            for skill in SKILLS.iter().take(SKILLS_SHOWN) {
                out.push(line(
                    OutputStyle::Plain,
                    format!("{:<20}{}", skill.name, skill.level.label()),
                ));
            }
            out.push(line(
                OutputStyle::Muted,
                format!(
                    "... and {} more skills",
                    SKILLS.len().saturating_sub(SKILLS_SHOWN)
                ),
            ));
        }
        "projects" => {
            out.push(line(OutputStyle::Heading, "Projects:"));
            for project in PROJECTS {
                out.push(line(OutputStyle::Plain, project.title));
                out.push(line(OutputStyle::Muted, project.description));
                out.push(line(OutputStyle::Success, project.technologies.join(", ")));
                out.push(line(OutputStyle::Accent, project.github_url));
            }
        }
        "education" => {
            out.push(line(OutputStyle::Heading, "Education:"));
            for edu in EDUCATION {
                out.push(line(OutputStyle::Plain, edu.degree));
                out.push(line(OutputStyle::Muted, edu.institution));
                out.push(line(
                    OutputStyle::Success,
                    format!("{} • {}", edu.year, edu.grade),
                ));
            }
        }
        "certificates" => {
            out.push(line(OutputStyle::Heading, "Certificates:"));
            for cert in CERTIFICATES {
                out.push(line(OutputStyle::Plain, cert.name));
                out.push(line(OutputStyle::Muted, cert.issuer));
                out.push(line(
                    OutputStyle::Success,
                    format!("{} • {}", cert.date, cert.category),
                ));
                out.push(line(OutputStyle::Accent, format!("Verify: {}", cert.url)));
            }
        }
        "contact" => {
            let info = &PERSONAL_INFO;
            out.push(line(OutputStyle::Heading, "Contact Information:"));
            for (label, value) in [
                ("Email", info.email),
                ("Phone", info.phone),
                ("GitHub", info.github),
                ("LinkedIn", info.linkedin),
                ("Location", info.location),
            ] {
                out.push(line(OutputStyle::Plain, format!("{label}: {value}")));
            }
        }
        "experience" => {
            out.push(line(OutputStyle::Heading, "Work Experience:"));
            for exp in EXPERIENCES {
                out.push(line(
                    OutputStyle::Plain,
                    format!("{} - {}", exp.title, exp.company),
                ));
                out.push(line(OutputStyle::Muted, exp.period));
                if let Some(first) = exp.description.first() {
                    out.push(line(OutputStyle::Muted, *first));
                }
            }
        }
        unknown => out.push(line(
            OutputStyle::Error,
            format!(
                "Command not found: '{unknown}'. Type 'help' or 'h' for available commands."
            ),
        )),
    }
    out
}

#[derive(Debug, Default)]
pub struct TerminalProvider {
    interpreter: Interpreter,
    input: String,
    scroll: ScrollText,
    linkifier: Linkifier,
}

impl TerminalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    fn document(&self, width: u16, focused: bool) -> Document<'_> {
        let prompt_style = Style::default().fg(crate::theme::positive());
        let mut doc = Document::new(width, &self.linkifier);
        for entry in self.interpreter.history() {
            if !entry.input.is_empty() {
                doc.spans(vec![
                    Span::styled(PROMPT, prompt_style),
                    Span::raw(" "),
                    Span::styled(entry.input.clone(), OutputStyle::Plain.style()),
                ]);
            }
            for out in &entry.output {
                doc.text(&out.text, out.style.style());
            }
            doc.blank();
        }
        let cursor = if focused { "█" } else { " " };
        doc.spans(vec![
            Span::styled(PROMPT, prompt_style),
            Span::raw(" "),
            Span::styled(self.input.clone(), OutputStyle::Plain.style()),
            Span::styled(cursor, OutputStyle::Plain.style()),
        ]);
        doc
    }

    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.interpreter.execute(&input);
        self.scroll.pin_to_bottom();
    }
}

impl ContentProvider for TerminalProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        frame.fill(area, " ", Style::default().bg(crate::theme::header_bg()));
        let lines = self
            .document(ScrollText::text_width(area), ctx.focused())
            .into_lines();
        self.scroll.render(frame, area, &lines);
    }

    fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        self.scroll.pointer_target(column, row)
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ProviderContext<'_>) -> bool {
        match event {
            Event::Key(key)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match key.code {
                    KeyCode::Enter => self.submit(),
                    KeyCode::Backspace => {
                        self.input.pop();
                    }
                    KeyCode::Char(ch) => {
                        self.input.push(ch);
                        self.scroll.pin_to_bottom();
                    }
                    _ => return self.scroll.handle_event(event) == ScrollOutcome::Consumed,
                }
                true
            }
            Event::Paste(text) => {
                self.input
                    .extend(text.chars().filter(|c| !c.is_control()));
                true
            }
            _ => match self.scroll.handle_event(event) {
                ScrollOutcome::Ignored => false,
                ScrollOutcome::Consumed => true,
                ScrollOutcome::OpenLink(url) => {
                    ctx.request(HostRequest::OpenUrl(url));
                    true
                }
            },
        }
    }
}
