//! Viewport and caret snapshots derived from a text surface

use std::ops::Range;

use ropey::Rope;
use serde::Serialize;

/// A point in surface pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The contiguous char range currently rendered
///
/// `last_visible_offset` is exclusive. Always
/// `first_visible_offset <= last_visible_offset <= document length`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub first_visible_offset: usize,
    pub last_visible_offset: usize,
    pub first_visible_line: usize,
    pub last_visible_line: usize,
}

impl Viewport {
    /// Viewport over `range`, clamped to the document
    pub fn from_range(text: &Rope, range: Range<usize>) -> Self {
        let len = text.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);

        let first_visible_line = text.char_to_line(start);
        let last_visible_line = if end == len || end == start {
            // The empty line after a trailing newline is still on screen
            text.char_to_line(end)
        } else {
            text.char_to_line(end - 1)
        };

        Self {
            first_visible_offset: start,
            last_visible_offset: end,
            first_visible_line,
            last_visible_line,
        }
    }

    /// Viewport showing `visible_lines` lines from `top_line`
    pub fn from_lines(text: &Rope, top_line: usize, visible_lines: usize) -> Self {
        let line_count = text.len_lines();
        let top = top_line.min(line_count.saturating_sub(1));
        let bottom = (top + visible_lines).min(line_count);
        let start = text.line_to_char(top);
        let end = text.line_to_char(bottom);
        if visible_lines == 0 {
            return Self::from_range(text, start..start);
        }
        Self::from_range(text, start..end)
    }

    /// Char range of the visible text
    pub fn char_range(&self) -> Range<usize> {
        self.first_visible_offset..self.last_visible_offset
    }

    /// Number of visible chars
    pub fn len(&self) -> usize {
        self.last_visible_offset - self.first_visible_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of line rows in the window
    pub fn line_count(&self) -> usize {
        self.last_visible_line - self.first_visible_line + 1
    }

    pub fn contains_line(&self, line: usize) -> bool {
        (self.first_visible_line..=self.last_visible_line).contains(&line)
    }
}

/// Caret snapshot for the current event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaretState {
    /// Char offset
    pub offset: usize,
    /// 0-indexed line of `offset`
    pub line: usize,
    /// Top-left of the caret in surface coordinates
    pub screen_point: Point,
}

impl CaretState {
    pub fn from_offset(text: &Rope, offset: usize, screen_point: Point) -> Self {
        let offset = offset.min(text.len_chars());
        Self {
            offset,
            line: text.char_to_line(offset),
            screen_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(lines: usize) -> Rope {
        let text: String = (0..lines).map(|i| format!("line{}\n", i)).collect();
        Rope::from(text)
    }

    #[test]
    fn test_from_lines_middle_of_document() {
        let text = numbered(100);
        let viewport = Viewport::from_lines(&text, 10, 5);

        assert_eq!(viewport.first_visible_line, 10);
        assert_eq!(viewport.last_visible_line, 14);
        assert_eq!(viewport.first_visible_offset, text.line_to_char(10));
        assert_eq!(viewport.last_visible_offset, text.line_to_char(15));
        assert_eq!(viewport.line_count(), 5);
    }

    #[test]
    fn test_from_lines_at_end_includes_trailing_empty_line() {
        let text = numbered(3);
        let viewport = Viewport::from_lines(&text, 0, 10);

        assert_eq!(viewport.last_visible_offset, text.len_chars());
        assert_eq!(viewport.last_visible_line, 3);
    }

    #[test]
    fn test_from_range_clamps() {
        let text = Rope::from("short");
        let viewport = Viewport::from_range(&text, 3..50);
        assert_eq!(viewport.char_range(), 3..5);

        let viewport = Viewport::from_range(&text, 9..50);
        assert_eq!(viewport.char_range(), 5..5);
        assert!(viewport.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let text = Rope::new();
        let viewport = Viewport::from_lines(&text, 4, 10);
        assert_eq!(viewport, Viewport::default());
        assert!(viewport.contains_line(0));
    }

    #[test]
    fn test_caret_state_line() {
        let text = Rope::from("ab\ncd\nef");
        let caret = CaretState::from_offset(&text, 4, Point::new(7, 16));
        assert_eq!(caret.line, 1);
        assert_eq!(CaretState::from_offset(&text, 99, Point::default()).offset, 8);
    }
}
