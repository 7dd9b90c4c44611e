//! A portfolio desktop for the terminal: draggable, stackable windows over a
//! themed background, launched from a dock.
//!
//! The window-manager core ([`window`], [`launcher`]) knows nothing about
//! terminals. [`desktop`] hosts it on a `ratatui` frame and feeds it
//! `crossterm` input.

pub mod appearance;
pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod data;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod launcher;
pub mod linkifier;
pub mod panel;
pub mod runner;
pub mod term_color;
pub mod theme;
pub mod toast;
pub mod tracing_sub;
pub mod ui;
pub mod window;
