//! Keyboard input types
//!
//! The host translates its native key events into [`Keystroke`]s before
//! forwarding them to the controller. Routing is decided by the focus state
//! machine in [`crate::update`], not by a binding table.

mod types;

pub use types::{KeyCode, KeyParseError, Keystroke, Modifiers};
