//! Replacing the caret line with a chosen entry

use std::ops::Range;

use ropey::Rope;

use crate::util::line_content_range;

/// Edit that commits an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    /// Caret line content, terminator excluded
    pub range: Range<usize>,
    pub replacement: String,
    /// Caret after the edit
    pub caret: usize,
}

/// Replace the whole caret line with `entry_text`
///
/// The caret shifts by the change in line length, then is clamped onto the
/// new line when that shift would carry it off either end.
pub fn plan_commit(text: &Rope, caret: usize, entry_text: &str) -> CommitPlan {
    let caret = caret.min(text.len_chars());
    let range = line_content_range(text, text.char_to_line(caret));
    let old_len = range.len() as isize;
    let new_len = entry_text.chars().count() as isize;

    let shifted = caret as isize + (new_len - old_len);
    let line_start = range.start as isize;
    let caret = shifted.clamp(line_start, line_start + new_len) as usize;

    CommitPlan {
        range,
        replacement: entry_text.to_string(),
        caret,
    }
}
