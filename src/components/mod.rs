use std::collections::BTreeMap;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::appearance::Appearance;
use crate::content::{ContentId, UnknownContentId};
use crate::toast::Toast;
use crate::ui::UiFrame;
use crate::window::{PointerTarget, WindowControls};

pub mod about;
pub mod certificates;
pub mod contact;
pub mod projects;
pub mod scroll_text;
pub mod settings;
pub mod skills;
pub mod terminal;

pub use about::AboutProvider;
pub use certificates::CertificatesProvider;
pub use contact::{ContactForm, ContactProvider, FormField};
pub use projects::ProjectsProvider;
pub use scroll_text::{DocLine, Document, ScrollOutcome, ScrollText};
pub use settings::SettingsProvider;
pub use skills::SkillsProvider;
pub use terminal::{Interpreter, TerminalProvider};

pub use crate::component_context::ComponentContext;

/// Something a provider wants the host to do. Providers never touch host
/// state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    SetBackground(usize),
    SetOpacity(u8),
    Toast(Toast),
    OpenUrl(String),
}

/// Handed to a provider while it handles an event: the window's
/// close/minimize requests plus a queue of host requests.
pub struct ProviderContext<'a> {
    controls: &'a mut WindowControls,
    requests: &'a mut Vec<HostRequest>,
    appearance: Appearance,
}

impl<'a> ProviderContext<'a> {
    pub fn new(
        controls: &'a mut WindowControls,
        requests: &'a mut Vec<HostRequest>,
        appearance: Appearance,
    ) -> Self {
        Self {
            controls,
            requests,
            appearance,
        }
    }

    pub fn request_close(&mut self) {
        self.controls.request_close();
    }

    pub fn request_minimize(&mut self) {
        self.controls.request_minimize();
    }

    pub fn request(&mut self, request: HostRequest) {
        self.requests.push(request);
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

/// Renders the body of one kind of window. Mouse coordinates passed to
/// `pointer_target` and `handle_event` are relative to the content area's
/// top-left cell.
pub trait ContentProvider {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    /// Whether a press at `(column, row)` lands on an interactive control.
    /// Controls never start a window drag.
    fn pointer_target(&self, _column: u16, _row: u16) -> PointerTarget {
        PointerTarget::Surface
    }

    fn handle_event(&mut self, _event: &Event, _ctx: &mut ProviderContext<'_>) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error(transparent)]
    UnknownContent(#[from] UnknownContentId),
    #[error("no content provider registered for `{0}`")]
    Missing(ContentId),
}

/// Maps every content id to the provider that renders it. Names are
/// validated when a provider is registered, not when it is looked up.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<ContentId, Box<dyn ContentProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in provider for every content id.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ContentId::About, Box::new(AboutProvider::new()));
        registry.register(ContentId::Projects, Box::new(ProjectsProvider::new()));
        registry.register(ContentId::Skills, Box::new(SkillsProvider::new()));
        registry.register(
            ContentId::Certificates,
            Box::new(CertificatesProvider::new()),
        );
        registry.register(ContentId::Contact, Box::new(ContactProvider::new()));
        registry.register(ContentId::Terminal, Box::new(TerminalProvider::new()));
        registry.register(ContentId::Settings, Box::new(SettingsProvider::new()));
        registry
    }

    /// Install `provider` for `id`, replacing any previous one.
    pub fn register(&mut self, id: ContentId, provider: Box<dyn ContentProvider>) {
        if self.providers.insert(id, provider).is_some() {
            tracing::debug!(content = %id, "replaced content provider");
        } else {
            tracing::debug!(content = %id, "registered content provider");
        }
    }

    pub fn register_named(
        &mut self,
        name: &str,
        provider: Box<dyn ContentProvider>,
    ) -> Result<ContentId, ProviderError> {
        let id: ContentId = name.parse()?;
        self.register(id, provider);
        Ok(id)
    }

    pub fn contains(&self, id: ContentId) -> bool {
        self.providers.contains_key(&id)
    }

    /// Fails with the first content id that has no provider.
    pub fn ensure_complete(&self) -> Result<(), ProviderError> {
        match ContentId::ALL.iter().find(|id| !self.contains(**id)) {
            Some(missing) => Err(ProviderError::Missing(*missing)),
            None => Ok(()),
        }
    }

    pub fn get_mut(&mut self, id: ContentId) -> Option<&mut (dyn ContentProvider + 'static)> {
        self.providers.get_mut(&id).map(|p| p.as_mut())
    }

    pub fn get(&self, id: ContentId) -> Option<&(dyn ContentProvider + 'static)> {
        self.providers.get(&id).map(|p| p.as_ref())
    }
}
