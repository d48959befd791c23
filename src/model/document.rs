//! Document model - an in-memory text surface
//!
//! A rope buffer with a style table, a single selection and a scroll window.
//! It implements [`TextSurface`] so the controller can drive it exactly like a
//! host widget.

use std::ops::Range;
use std::path::Path;

use ropey::Rope;

use super::viewport::{Point, Viewport};
use crate::surface::{TextSurface, UpdateSuspension};
use crate::syntax::{StylePatch, StyleRuns, TextStyle};

/// Text buffer, styles and view state of the reference text surface
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Per-character styles
    pub styles: StyleRuns,
    /// Selection start (the caret) and length, in chars
    pub selection: (usize, usize),
    /// First line in the window
    pub top_line: usize,
    /// Lines that fit in the window
    pub visible_lines: usize,
    pub line_height: i32,
    pub char_width: i32,
    pub focused: bool,

    suspend_depth: usize,
    /// Repaints performed (one per outermost resume, or per live style change)
    repaints: usize,
    /// Style changes that happened while notifications were live
    live_style_changes: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::with_text("")
    }
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial text, caret at the start
    pub fn with_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let styles = StyleRuns::new(buffer.len_chars(), TextStyle::default());
        Self {
            buffer,
            styles,
            selection: (0, 0),
            top_line: 0,
            visible_lines: 40,
            line_height: 16,
            char_width: 8,
            focused: true,
            suspend_depth: 0,
            repaints: 0,
            live_style_changes: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::with_text(&content))
    }

    /// Set pixel metrics
    pub fn with_metrics(mut self, line_height: i32, char_width: i32) -> Self {
        self.line_height = line_height;
        self.char_width = char_width;
        self
    }

    /// Set the window height in lines
    pub fn with_visible_lines(mut self, visible_lines: usize) -> Self {
        self.visible_lines = visible_lines;
        self
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Caret offset
    pub fn caret(&self) -> usize {
        self.selection.0
    }

    /// Place the caret, collapsing the selection
    pub fn set_caret(&mut self, offset: usize) {
        self.set_selection(offset, 0);
    }

    /// Scroll so that `line` is the first line in the window
    pub fn scroll_to(&mut self, line: usize) {
        self.top_line = line.min(self.line_count().saturating_sub(1));
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from_lines(&self.buffer, self.top_line, self.visible_lines)
    }

    pub fn style_at(&self, offset: usize) -> Option<&TextStyle> {
        self.styles.style_at(offset)
    }

    pub fn is_suspended(&self) -> bool {
        self.suspend_depth > 0
    }

    pub fn repaint_count(&self) -> usize {
        self.repaints
    }

    pub fn live_style_changes(&self) -> usize {
        self.live_style_changes
    }
}

impl UpdateSuspension for Document {
    fn suspend_updates(&mut self) {
        self.suspend_depth += 1;
    }

    fn resume_updates(&mut self) {
        self.suspend_depth = self.suspend_depth.saturating_sub(1);
        if self.suspend_depth == 0 {
            self.repaints += 1;
        }
    }
}

impl TextSurface for Document {
    fn text(&self) -> Rope {
        self.buffer.clone()
    }

    fn selection_start(&self) -> usize {
        self.selection.0
    }

    fn set_selection(&mut self, start: usize, len: usize) {
        let total = self.buffer.len_chars();
        let start = start.min(total);
        self.selection = (start, len.min(total - start));
    }

    fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let total = self.buffer.len_chars();
        let end = range.end.min(total);
        let start = range.start.min(end);
        let inserted = text.chars().count();

        self.buffer.remove(start..end);
        self.buffer.insert(start, text);
        self.styles.remove(start..end);
        self.styles.insert(start, inserted);
        self.selection = (start + inserted, 0);
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, len) = self.selection;
        self.replace_range(start..start + len, text);
    }

    fn visible_range(&self) -> Range<usize> {
        self.viewport().char_range()
    }

    fn caret_screen_point(&self) -> Point {
        let caret = self.caret();
        let line = self.buffer.char_to_line(caret);
        let column = caret - self.buffer.line_to_char(line);
        Point::new(
            column as i32 * self.char_width,
            (line as i32 - self.top_line as i32) * self.line_height,
        )
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn container_height(&self) -> i32 {
        self.visible_lines as i32 * self.line_height
    }

    fn default_style(&self) -> TextStyle {
        self.styles.default_style().clone()
    }

    fn set_style(&mut self, range: Range<usize>, patch: &StylePatch) {
        self.styles.paint(range, patch);
        if self.suspend_depth == 0 {
            self.live_style_changes += 1;
            self.repaints += 1;
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}
