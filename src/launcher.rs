//! Dock bridge between launch requests and the window manager.
//!
//! Activating a dock item always opens (or restores, or raises) its window.
//! The dock never closes or toggles a window.

use crate::content::ContentId;
use crate::window::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockItem {
    pub id: ContentId,
    pub label: &'static str,
    /// Short glyph drawn on the dock tile.
    pub glyph: &'static str,
    pub color: (u8, u8, u8),
}

pub const DOCK_ITEMS: [DockItem; 7] = [
    DockItem {
        id: ContentId::About,
        label: "Who am i",
        glyph: "@",
        color: (59, 130, 246),
    },
    DockItem {
        id: ContentId::Projects,
        label: "Portfolio Projects",
        glyph: "#",
        color: (234, 179, 8),
    },
    DockItem {
        id: ContentId::Skills,
        label: "My Skills",
        glyph: "*",
        color: (168, 85, 247),
    },
    DockItem {
        id: ContentId::Certificates,
        label: "Certificates",
        glyph: "%",
        color: (249, 115, 22),
    },
    DockItem {
        id: ContentId::Contact,
        label: "Contact Me",
        glyph: "&",
        color: (34, 197, 94),
    },
    DockItem {
        id: ContentId::Terminal,
        label: "Terminal",
        glyph: ">",
        color: (55, 65, 81),
    },
    DockItem {
        id: ContentId::Settings,
        label: "Settings",
        glyph: "=",
        color: (107, 114, 128),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockIndicator {
    pub item: DockItem,
    pub open: bool,
}

#[derive(Debug, Clone)]
pub struct Dock {
    items: Vec<DockItem>,
}

impl Default for Dock {
    fn default() -> Self {
        Self::new()
    }
}

impl Dock {
    pub fn new() -> Self {
        Self {
            items: DOCK_ITEMS.to_vec(),
        }
    }

    pub fn items(&self) -> &[DockItem] {
        &self.items
    }

    pub fn item(&self, id: ContentId) -> Option<&DockItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn on_item_activated(&self, windows: &mut WindowManager, id: ContentId) {
        tracing::info!(window = %id, "dock item activated");
        windows.open(id);
    }

    /// Presence indicator for each dock item, in dock order.
    pub fn indicators(&self, windows: &WindowManager) -> Vec<DockIndicator> {
        let visible = windows.list_open_visible();
        self.items
            .iter()
            .map(|item| DockIndicator {
                item: *item,
                open: visible.contains(&item.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dock_covers_every_content_id_once() {
        let dock = Dock::new();
        for id in ContentId::ALL {
            assert_eq!(dock.items().iter().filter(|item| item.id == id).count(), 1);
        }
    }

    #[test]
    fn activation_opens_and_never_toggles() {
        let dock = Dock::new();
        let mut wm = WindowManager::new();
        dock.on_item_activated(&mut wm, ContentId::Skills);
        dock.on_item_activated(&mut wm, ContentId::Skills);
        assert!(wm.is_open_visible(ContentId::Skills));
        assert_eq!(wm.registry().len(), 1);
    }

    #[test]
    fn activation_restores_minimized_window() {
        let dock = Dock::new();
        let mut wm = WindowManager::new();
        dock.on_item_activated(&mut wm, ContentId::Terminal);
        wm.minimize(ContentId::Terminal);
        dock.on_item_activated(&mut wm, ContentId::Terminal);
        assert!(wm.is_open_visible(ContentId::Terminal));
    }

    #[test]
    fn indicators_follow_visibility() {
        let dock = Dock::new();
        let mut wm = WindowManager::new();
        wm.open(ContentId::About);
        wm.open(ContentId::Terminal);
        wm.minimize(ContentId::Terminal);
        let open: Vec<ContentId> = dock
            .indicators(&wm)
            .into_iter()
            .filter(|indicator| indicator.open)
            .map(|indicator| indicator.item.id)
            .collect();
        assert_eq!(open, vec![ContentId::About]);
    }
}
