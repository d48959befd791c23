//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::keymap::Keystroke;
use crate::model::Point;

/// Caret context gathered by the controller after a highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContext {
    /// Word ending at the caret
    pub word: String,
    /// Top-left of the caret in surface pixels
    pub caret_point: Point,
    pub line_height: i32,
    pub container_height: i32,
}

/// Text content messages
#[derive(Debug, Clone)]
pub enum AnalysisMsg {
    /// The text changed; filter the dictionary and place the popup
    TextChanged(TextContext),
}

/// Keys seen by the text surface or the popup
#[derive(Debug, Clone, Copy)]
pub enum KeyMsg {
    /// Text surface, before native handling
    Preview(Keystroke),
    /// Text surface key down
    Text(Keystroke),
    /// Popup key down
    Popup(Keystroke),
}

/// Focus and pointer events of the text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMsg {
    TextFocused,
    TextBlurred,
    TextClicked,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Analysis messages (text changes)
    Analysis(AnalysisMsg),
    /// Keyboard messages
    Key(KeyMsg),
    /// Focus and click messages
    Focus(FocusMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn text_changed(context: TextContext) -> Self {
        Msg::Analysis(AnalysisMsg::TextChanged(context))
    }

    pub fn preview_key(key: Keystroke) -> Self {
        Msg::Key(KeyMsg::Preview(key))
    }

    pub fn text_key(key: Keystroke) -> Self {
        Msg::Key(KeyMsg::Text(key))
    }

    pub fn popup_key(key: Keystroke) -> Self {
        Msg::Key(KeyMsg::Popup(key))
    }
}
