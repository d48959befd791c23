//! Editor model - the complete state of the analysis engine
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod popup;
pub mod viewport;

pub use document::Document;
pub use popup::{FocusState, PopupState};
pub use viewport::{CaretState, Point, Viewport};

use crate::autocomplete::AutoCompleteIndex;
use crate::config::EditorConfig;
use crate::syntax::RuleSet;

/// State owned by the controller
#[derive(Debug, Clone, Default)]
pub struct EditorModel {
    pub focus: FocusState,
    pub popup: PopupState,
    /// Highlight rules, re-read at the start of every pass
    pub rules: RuleSet,
    /// Autocomplete dictionary, re-read on every text change
    pub dictionary: AutoCompleteIndex,
    pub config: EditorConfig,
    /// Word under the caret at the last text change
    pub current_word: String,
}

impl EditorModel {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Check model invariants, panicking with context on violation
    ///
    /// Only active in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        assert!(
            !self.popup.visible || !self.popup.entries.is_empty(),
            "[{}] popup visible without entries",
            context
        );
        assert_eq!(
            self.popup.visible,
            self.focus != FocusState::Editing,
            "[{}] popup visibility disagrees with focus state {:?}",
            context,
            self.focus
        );
        if self.focus == FocusState::Navigating {
            assert!(
                self.popup.selected_index.is_some(),
                "[{}] navigating without a selection",
                context
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
