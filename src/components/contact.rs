//! Contact details plus a four-field message form.
//!
//! The form is local to the provider. Submitting it never sends anything; it
//! raises a toast through the host and clears itself on success.

use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::scroll_text::{Document, ScrollOutcome, ScrollText};
use super::{ComponentContext, ContentProvider, HostRequest, ProviderContext};
use crate::data::PERSONAL_INFO;
use crate::linkifier::Linkifier;
use crate::toast::Toast;
use crate::ui::UiFrame;
use crate::window::PointerTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your@email.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project...",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: [String; 4],
    focus: FormField,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            values: Default::default(),
            focus: FormField::Name,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn insert(&mut self, ch: char) {
        self.values[self.focus.index()].push(ch);
    }

    pub fn backspace(&mut self) {
        self.values[self.focus.index()].pop();
    }

    /// Fields left empty (whitespace counts as empty).
    pub fn missing(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect()
    }

    /// Validate and, on success, clear the form. The returned toast is what
    /// the user should see either way.
    pub fn submit(&mut self) -> Toast {
        let missing = self.missing();
        if let Some(first) = missing.first() {
            self.focus = *first;
            let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            tracing::debug!(missing = ?names, "contact form incomplete");
            return Toast::error(
                "Please fill in all fields",
                format!("Missing: {}", names.join(", ")),
            );
        }
        if !is_valid_email(self.value(FormField::Email).trim()) {
            self.focus = FormField::Email;
            return Toast::error(
                "Invalid email address",
                "Please enter an address like your@email.com",
            );
        }
        tracing::info!(
            subject_len = self.value(FormField::Subject).len(),
            message_len = self.value(FormField::Message).len(),
            "contact form submitted"
        );
        *self = Self::default();
        Toast::success(
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you soon.",
        )
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

// Form rows, bottom-anchored in the content area:
// heading, four fields, the send button and a note.
const FORM_HEIGHT: u16 = 7;
const FIELD_ROW: u16 = 1;
const BUTTON_ROW: u16 = 5;
const LABEL_WIDTH: u16 = 9;
const SEND_LABEL: &str = "[ Send Message ]";

#[derive(Debug, Default)]
pub struct ContactProvider {
    form: ContactForm,
    scroll: ScrollText,
    linkifier: Linkifier,
    /// Content area size at the last render, at the origin.
    area: Rect,
}

enum FormHit {
    Field(FormField),
    Send,
}

impl ContactProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    fn details_height(height: u16) -> u16 {
        height.saturating_sub(FORM_HEIGHT)
    }

    fn form_top(&self) -> u16 {
        Self::details_height(self.area.height)
    }

    pub(crate) fn document(&self, width: u16) -> Document<'_> {
        let info = &PERSONAL_INFO;
        let mut doc = Document::new(width, &self.linkifier);
        doc.heading("Let's discuss your next project")
            .muted("Available for new opportunities and collaborations")
            .blank()
            .text(
                "Contact Information",
                Style::default().add_modifier(Modifier::BOLD),
            )
            .field("Email", info.email)
            .field("Phone", info.phone)
            .field("GitHub", info.github)
            .field("LinkedIn", info.linkedin)
            .field("Location", info.location)
            .blank()
            .text("Availability", Style::default().add_modifier(Modifier::BOLD))
            .field("Next Available", info.availability)
            .field("Timezone", info.timezone)
            .field("Working Hours", info.working_hours);
        doc
    }

    fn hit_form(&self, column: u16, row: u16) -> Option<FormHit> {
        let top = self.form_top();
        if row < top || column >= self.area.width {
            return None;
        }
        let local = row - top;
        if (FIELD_ROW..FIELD_ROW + 4).contains(&local) {
            return Some(FormHit::Field(
                FormField::ALL[usize::from(local - FIELD_ROW)],
            ));
        }
        if local == BUTTON_ROW && column < SEND_LABEL.chars().count() as u16 {
            return Some(FormHit::Send);
        }
        None
    }

    fn submit(&mut self, ctx: &mut ProviderContext<'_>) {
        let toast = self.form.submit();
        ctx.request(HostRequest::Toast(toast));
    }

    fn render_form(&self, frame: &mut UiFrame<'_>, area: Rect, focused: bool) {
        let y = area.y;
        let muted = Style::default().fg(crate::theme::window_muted_fg());
        frame.set_string(
            area.x,
            y,
            "Send Message",
            Style::default()
                .fg(crate::theme::heading())
                .add_modifier(Modifier::BOLD),
        );
        for (idx, field) in FormField::ALL.into_iter().enumerate() {
            let row = y + FIELD_ROW + idx as u16;
            let active = focused && self.form.focus() == field;
            let label_style = if active {
                Style::default()
                    .fg(crate::theme::accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                muted
            };
            frame.set_string(area.x, row, field.label(), label_style);
            let input_x = area.x + LABEL_WIDTH;
            let input_width = area.width.saturating_sub(LABEL_WIDTH);
            if input_width == 0 {
                continue;
            }
            let input_bg = Style::default().bg(crate::theme::input_bg());
            frame.fill(Rect::new(input_x, row, input_width, 1), " ", input_bg);
            let value = self.form.value(field);
            let visible = input_width.saturating_sub(2) as usize;
            if value.is_empty() {
                let text = crate::ui::truncate_to_width(field.placeholder(), visible);
                frame.set_string(input_x + 1, row, &text, input_bg.fg(crate::theme::header_fg()));
            } else {
                // keep the tail visible while typing
                let count = value.chars().count();
                let text: String = value.chars().skip(count.saturating_sub(visible)).collect();
                frame.set_string(input_x + 1, row, &text, input_bg.fg(crate::theme::window_fg()));
            }
            if active {
                let cursor = (value.chars().count().min(visible) as u16).saturating_add(1);
                frame.set_string(
                    input_x + cursor.min(input_width.saturating_sub(1)),
                    row,
                    "▏",
                    input_bg.fg(crate::theme::accent()),
                );
            }
        }
        frame.set_string(
            area.x,
            y + BUTTON_ROW,
            SEND_LABEL,
            Style::default()
                .bg(crate::theme::accent())
                .fg(crate::theme::window_fg())
                .add_modifier(Modifier::BOLD),
        );
        frame.set_string(
            area.x,
            y + BUTTON_ROW + 1,
            "I typically respond within 24 hours",
            muted,
        );
    }
}

impl ContentProvider for ContactProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.area = Rect::new(0, 0, area.width, area.height);
        let details = Rect {
            height: Self::details_height(area.height),
            ..area
        };
        let lines = self.document(ScrollText::text_width(details)).into_lines();
        self.scroll.render(frame, details, &lines);
        let form = Rect {
            y: area.y + details.height,
            height: area.height - details.height,
            ..area
        };
        self.render_form(frame, form, ctx.focused());
    }

    fn pointer_target(&self, column: u16, row: u16) -> PointerTarget {
        if self.hit_form(column, row).is_some() {
            return PointerTarget::Control;
        }
        if row < self.form_top() {
            return self.scroll.pointer_target(column, row);
        }
        PointerTarget::Surface
    }

    fn handle_event(&mut self, event: &Event, ctx: &mut ProviderContext<'_>) -> bool {
        match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_form(mouse.column, mouse.row) {
                    Some(FormHit::Field(field)) => {
                        self.form.set_focus(field);
                        true
                    }
                    Some(FormHit::Send) => {
                        self.submit(ctx);
                        true
                    }
                    None => match self.scroll.handle_event(event) {
                        ScrollOutcome::OpenLink(url) => {
                            ctx.request(HostRequest::OpenUrl(url));
                            true
                        }
                        other => other == ScrollOutcome::Consumed,
                    },
                }
            }
            Event::Mouse(_) => self.scroll.handle_event(event) == ScrollOutcome::Consumed,
            Event::Key(key) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return false;
                }
                match key.code {
                    KeyCode::Tab | KeyCode::Down => {
                        self.form.set_focus(self.form.focus().next());
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        self.form.set_focus(self.form.focus().prev());
                    }
                    KeyCode::Enter => self.submit(ctx),
                    KeyCode::Backspace => self.form.backspace(),
                    KeyCode::Char(ch) => self.form.insert(ch),
                    KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => {
                        return self.scroll.handle_event(event) == ScrollOutcome::Consumed;
                    }
                    _ => return false,
                }
                true
            }
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    self.form.insert(ch);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;
    use crate::toast::ToastKind;
    use crate::window::WindowControls;
    use crossterm::event::{KeyEvent, MouseEvent};
    use ratatui::buffer::Buffer;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(provider: &mut ContactProvider, ctx: &mut ProviderContext<'_>, text: &str) {
        for ch in text.chars() {
            provider.handle_event(&key(KeyCode::Char(ch)), ctx);
        }
    }

    fn rendered(provider: &mut ContactProvider, height: u16) {
        let area = Rect::new(0, 0, 60, height);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        provider.render(&mut ui, area, &ComponentContext::new(true));
    }

    #[test]
    fn complete_submission_clears_and_thanks() {
        let mut form = ContactForm::new();
        form.set_value(FormField::Name, "Ada");
        form.set_value(FormField::Email, "ada@example.com");
        form.set_value(FormField::Subject, "Hello");
        form.set_value(FormField::Message, "Let's build something");
        let toast = form.submit();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message Sent!");
        assert!(FormField::ALL.iter().all(|f| form.value(*f).is_empty()));
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn incomplete_submission_keeps_input() {
        let mut form = ContactForm::new();
        form.set_value(FormField::Name, "Ada");
        form.set_value(FormField::Subject, "   ");
        let toast = form.submit();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(
            toast.description.as_deref(),
            Some("Missing: Email, Subject, Message")
        );
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.focus(), FormField::Email);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = ContactForm::new();
        form.set_value(FormField::Name, "Ada");
        form.set_value(FormField::Email, "ada.example.com");
        form.set_value(FormField::Subject, "Hi");
        form.set_value(FormField::Message, "Hi");
        assert_eq!(form.submit().title, "Invalid email address");
        assert_eq!(form.value(FormField::Message), "Hi");
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn focus_cycles_through_fields() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn typing_and_enter_submit_through_the_host() {
        let mut provider = ContactProvider::new();
        rendered(&mut provider, 30);
        let mut controls = WindowControls::new();
        let mut requests = Vec::new();
        let mut ctx = ProviderContext::new(&mut controls, &mut requests, Appearance::default());
        type_text(&mut provider, &mut ctx, "Ada");
        provider.handle_event(&key(KeyCode::Tab), &mut ctx);
        type_text(&mut provider, &mut ctx, "ada@example.com");
        provider.handle_event(&key(KeyCode::Tab), &mut ctx);
        type_text(&mut provider, &mut ctx, "Hi");
        provider.handle_event(&key(KeyCode::Tab), &mut ctx);
        type_text(&mut provider, &mut ctx, "Hello there");
        provider.handle_event(&key(KeyCode::Enter), &mut ctx);
        assert!(matches!(
            requests.as_slice(),
            [HostRequest::Toast(t)] if t.title == "Message Sent!"
        ));
        assert!(provider.form().value(FormField::Name).is_empty());
        assert!(!controls.close_requested());
    }

    #[test]
    fn form_rows_are_controls() {
        let mut provider = ContactProvider::new();
        rendered(&mut provider, 30);
        let top = 30 - FORM_HEIGHT;
        assert_eq!(provider.pointer_target(20, top + 2), PointerTarget::Control);
        assert_eq!(provider.pointer_target(2, top + BUTTON_ROW), PointerTarget::Control);
        assert_eq!(provider.pointer_target(40, top + BUTTON_ROW), PointerTarget::Surface);
        assert_eq!(provider.pointer_target(2, 0), PointerTarget::Surface);

        let mut controls = WindowControls::new();
        let mut requests = Vec::new();
        let mut ctx = ProviderContext::new(&mut controls, &mut requests, Appearance::default());
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: top + 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(provider.handle_event(&click, &mut ctx));
        assert_eq!(provider.form().focus(), FormField::Subject);
    }
}
