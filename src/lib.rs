//! codebox - live analysis engine for an embeddable code editing widget
//!
//! This crate provides viewport-restricted syntax highlighting, current-word
//! autocomplete with popup placement, the keyboard focus state machine and
//! the line-number gutter layout. Host widgets plug in through the traits in
//! [`surface`]; state transitions follow the Elm Architecture pattern.

pub mod autocomplete;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod gutter;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod surface;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use controller::EditorController;
pub use messages::Msg;
pub use model::{Document, EditorModel};
pub use surface::{ListPopup, PopupSurface, TextSurface};
pub use theme::Theme;
