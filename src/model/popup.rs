//! Autocomplete popup and focus state

use serde::Serialize;

use crate::autocomplete::{AutoCompleteEntry, PopupBounds, PopupPlacement};
use crate::keymap::KeyCode;

/// Which surface owns the keyboard and whether suggestions are up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FocusState {
    /// Text surface focused, popup hidden
    #[default]
    Editing,
    /// Text surface focused, popup showing matches
    Suggesting,
    /// Popup focused with a selected entry
    Navigating,
}

impl FocusState {
    pub fn name(&self) -> &'static str {
        match self {
            FocusState::Editing => "Editing",
            FocusState::Suggesting => "Suggesting",
            FocusState::Navigating => "Navigating",
        }
    }
}

/// Popup contents, geometry and selection
///
/// `visible` implies `entries` is non-empty. Hiding keeps the last entries and
/// selection around until the next [`PopupState::show`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PopupState {
    pub visible: bool,
    pub entries: Vec<AutoCompleteEntry>,
    pub bounds: PopupBounds,
    pub flipped: bool,
    pub selected_index: Option<usize>,
    /// First entry shown when the list is taller than the popup
    pub scroll_top: usize,
    /// Rows that fit in the popup (0 = all)
    pub page_size: usize,
}

impl PopupState {
    /// Show `entries` at `placement`; an empty list hides the popup instead
    pub fn show(
        &mut self,
        entries: Vec<AutoCompleteEntry>,
        placement: PopupPlacement,
        page_size: usize,
    ) {
        if entries.is_empty() {
            self.hide();
            return;
        }
        self.visible = true;
        self.entries = entries;
        self.bounds = placement.bounds;
        self.flipped = placement.flipped;
        self.selected_index = None;
        self.scroll_top = 0;
        self.page_size = page_size;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// First entry below the caret, last entry above it
    pub fn boundary_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else if self.flipped {
            Some(self.entries.len() - 1)
        } else {
            Some(0)
        }
    }

    pub fn at_boundary(&self) -> bool {
        self.selected_index.is_some() && self.selected_index == self.boundary_index()
    }

    /// Key that moves from the text surface into the list
    pub fn open_key(&self) -> KeyCode {
        if self.flipped {
            KeyCode::Up
        } else {
            KeyCode::Down
        }
    }

    /// Key that walks back toward the text surface
    pub fn retreat_key(&self) -> KeyCode {
        if self.flipped {
            KeyCode::Down
        } else {
            KeyCode::Up
        }
    }

    /// Select `index`, clamped to the list, scrolling it into view
    pub fn select(&mut self, index: usize) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        let index = index.min(last);
        self.selected_index = Some(index);

        if index < self.scroll_top {
            self.scroll_top = index;
        } else if self.page_size > 0 && index >= self.scroll_top + self.page_size {
            self.scroll_top = index + 1 - self.page_size;
        }
        Some(index)
    }

    /// Move the selection one entry, never wrapping
    pub fn step(&mut self, forward: bool) -> Option<usize> {
        let current = self.selected_index?;
        let next = if forward {
            current + 1
        } else {
            current.saturating_sub(1)
        };
        self.select(next)
    }

    pub fn selected_entry(&self) -> Option<&AutoCompleteEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }
}
