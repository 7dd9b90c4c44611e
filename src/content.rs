//! The closed set of content kinds a desktop window can show.
//!
//! Every window is keyed by a [`ContentId`]. The window manager only passes
//! these ids around; titles, dock labels and display sizes are presentation
//! metadata that live here so the host can look them up.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content id `{0}`")]
pub struct UnknownContentId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentId {
    About,
    Projects,
    Skills,
    Certificates,
    Contact,
    Terminal,
    Settings,
}

/// Pixel size a window is laid out at. Owned by presentation, opaque to the
/// window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

impl ContentId {
    pub const ALL: [ContentId; 7] = [
        ContentId::About,
        ContentId::Projects,
        ContentId::Skills,
        ContentId::Certificates,
        ContentId::Contact,
        ContentId::Terminal,
        ContentId::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContentId::About => "about",
            ContentId::Projects => "projects",
            ContentId::Skills => "skills",
            ContentId::Certificates => "certificates",
            ContentId::Contact => "contact",
            ContentId::Terminal => "terminal",
            ContentId::Settings => "settings",
        }
    }

    /// Title shown in the window header.
    pub const fn title(self) -> &'static str {
        match self {
            ContentId::About => "About Me",
            ContentId::Projects => "Projects",
            ContentId::Skills => "Skills & Expertise",
            ContentId::Certificates => "Certificates",
            ContentId::Contact => "Get In Touch",
            ContentId::Terminal => "Terminal",
            ContentId::Settings => "System Settings",
        }
    }

    pub const fn display_size(self) -> DisplaySize {
        let (width, height) = match self {
            ContentId::About => (800, 600),
            ContentId::Projects => (900, 650),
            ContentId::Skills => (850, 600),
            ContentId::Certificates => (900, 650),
            ContentId::Contact => (800, 650),
            ContentId::Terminal => (700, 500),
            ContentId::Settings => (700, 550),
        };
        DisplaySize { width, height }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentId {
    type Err = UnknownContentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownContentId(s.to_string()))
    }
}
