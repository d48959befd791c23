//! Line-number gutter layout
//!
//! A pure function of the viewport and caret: which numbers to draw and where
//! the current-line band goes.

use serde::{Deserialize, Serialize};

use crate::model::{CaretState, Viewport};

/// Gutter geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GutterMetrics {
    /// Zero-padded width of each line number
    pub digits: usize,
    /// Gutter width in pixels
    pub width: i32,
    /// Left edge of the numbers
    pub text_x: i32,
}

impl Default for GutterMetrics {
    fn default() -> Self {
        Self {
            digits: 4,
            width: 48,
            text_x: 8,
        }
    }
}

/// Current-line band rectangle in gutter coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GutterBand {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// What the gutter draws for one viewport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GutterLayout {
    /// Absolute index of the first row
    pub first_line: usize,
    /// One label per visible line, top to bottom
    pub line_numbers: Vec<String>,
    /// Row of the caret line, `None` when it is scrolled out
    pub current_row: Option<usize>,
    pub band: Option<GutterBand>,
}

impl GutterMetrics {
    /// Zero-padded 0-based line index
    pub fn format_line(&self, line: usize) -> String {
        format!("{:0width$}", line, width = self.digits)
    }

    /// Band for `row`, inset one pixel at the top
    pub fn band(&self, row: usize, line_height: i32) -> GutterBand {
        GutterBand {
            x: 0,
            y: row as i32 * line_height + 1,
            width: self.width,
            height: (line_height - 1).max(0),
        }
    }

    pub fn layout(&self, viewport: &Viewport, caret: &CaretState, line_height: i32) -> GutterLayout {
        let line_numbers = (viewport.first_visible_line..=viewport.last_visible_line)
            .map(|line| self.format_line(line))
            .collect();
        let current_row = viewport
            .contains_line(caret.line)
            .then(|| caret.line - viewport.first_visible_line);

        GutterLayout {
            first_line: viewport.first_visible_line,
            line_numbers,
            current_row,
            band: current_row.map(|row| self.band(row, line_height)),
        }
    }
}
