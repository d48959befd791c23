//! Boundary traits for the host's text and popup widgets
//!
//! The controller only talks to widgets through these traits. The crate ships
//! in-memory implementations ([`Document`](crate::model::Document) and
//! [`ListPopup`]) used by tests, benches and the CLI.

use std::ops::{Deref, DerefMut, Range};

use ropey::Rope;

use crate::autocomplete::{AutoCompleteEntry, PopupBounds};
use crate::model::Point;
use crate::syntax::{StylePatch, TextStyle};

/// Scoped suppression of change notifications and repaints
pub trait UpdateSuspension {
    /// Stop delivering notifications and repaints; calls nest
    fn suspend_updates(&mut self);
    /// Undo one `suspend_updates`; the outermost resume repaints once
    fn resume_updates(&mut self);
}

/// The text widget
pub trait TextSurface: UpdateSuspension {
    /// Snapshot of the buffer (cheap clone)
    fn text(&self) -> Rope;
    /// Caret offset (start of the selection)
    fn selection_start(&self) -> usize;
    fn set_selection(&mut self, start: usize, len: usize);
    fn replace_range(&mut self, range: Range<usize>, text: &str);
    fn replace_selection(&mut self, text: &str);
    /// Char range currently rendered
    fn visible_range(&self) -> Range<usize>;
    /// Top-left of the caret in surface pixels
    fn caret_screen_point(&self) -> Point;
    fn line_height(&self) -> i32;
    fn container_height(&self) -> i32;
    fn default_style(&self) -> TextStyle;
    fn set_style(&mut self, range: Range<usize>, patch: &StylePatch);
    fn focus(&mut self);

    fn line_of_offset(&self, offset: usize) -> usize {
        let text = self.text();
        text.char_to_line(offset.min(text.len_chars()))
    }

    fn lines(&self) -> Vec<String> {
        self.text().lines().map(|line| line.to_string()).collect()
    }
}

/// The autocomplete list widget
pub trait PopupSurface {
    fn set_entries(&mut self, entries: &[AutoCompleteEntry]);
    fn set_bounds(&mut self, bounds: PopupBounds);
    fn show(&mut self);
    fn hide(&mut self);
    fn selected_index(&self) -> Option<usize>;
    fn set_selected_index(&mut self, index: Option<usize>);
    fn focus(&mut self);
}

/// Suspends updates on a surface until dropped
///
/// Resuming happens in `Drop`, so it also runs on early return and while
/// unwinding.
pub struct SuspendGuard<'a, S: UpdateSuspension + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: UpdateSuspension + ?Sized> SuspendGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.suspend_updates();
        Self { surface }
    }
}

impl<S: UpdateSuspension + ?Sized> Drop for SuspendGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.resume_updates();
    }
}

impl<S: UpdateSuspension + ?Sized> Deref for SuspendGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: UpdateSuspension + ?Sized> DerefMut for SuspendGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

/// In-memory popup list
#[derive(Debug, Clone, Default)]
pub struct ListPopup {
    pub entries: Vec<AutoCompleteEntry>,
    pub bounds: PopupBounds,
    pub visible: bool,
    pub selected: Option<usize>,
    pub focused: bool,
}

impl PopupSurface for ListPopup {
    fn set_entries(&mut self, entries: &[AutoCompleteEntry]) {
        self.entries = entries.to_vec();
        self.selected = None;
    }

    fn set_bounds(&mut self, bounds: PopupBounds) {
        self.bounds = bounds;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.entries.len());
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
