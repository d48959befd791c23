//! Text scanning helpers: current word, line ranges, byte/char conversion

use std::ops::Range;

use ropey::Rope;

/// Backspace character some surfaces leave in the change stream after a delete
pub const DELETE_SENTINEL: char = '\u{8}';

/// Check if a character ends a line
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Check if a character separates autocomplete words (space or line break)
#[inline]
pub fn is_word_boundary(ch: char) -> bool {
    ch == ' ' || is_line_break(ch)
}

/// The word ending at `caret` (char offset)
///
/// Empty when the caret is at the document start or right after a space,
/// a line break or the delete sentinel. Otherwise the maximal run of
/// characters before the caret containing no space or line break.
///
/// Walks backward from the caret, so the cost is the word length plus one
/// rope lookup, independent of document size.
pub fn current_word(text: &Rope, caret: usize) -> String {
    let len = text.len_chars();
    if caret == 0 || len == 0 || caret > len {
        return String::new();
    }

    let preceding = text.char(caret - 1);
    if is_word_boundary(preceding) || preceding == DELETE_SENTINEL {
        return String::new();
    }

    let mut chars = text.chars_at(caret);
    let mut start = caret;
    while let Some(ch) = chars.prev() {
        if is_word_boundary(ch) {
            break;
        }
        start -= 1;
    }

    text.slice(start..caret).to_string()
}

/// Char range of `line` without its line terminator
pub fn line_content_range(text: &Rope, line: usize) -> Range<usize> {
    let start = text.line_to_char(line);
    let slice = text.line(line);
    let mut len = slice.len_chars();
    while len > 0 && is_line_break(slice.char(len - 1)) {
        len -= 1;
    }
    start..start + len
}

/// Converts ascending byte offsets of one `&str` into char offsets
///
/// Regex engines report byte offsets; surfaces and ropes index by char.
/// Offsets must be queried in non-decreasing order, which keeps a whole
/// left-to-right match scan linear in the text length.
pub struct ByteCharCursor<'a> {
    text: &'a str,
    byte: usize,
    char: usize,
}

impl<'a> ByteCharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            char: 0,
        }
    }

    /// Char offset of `byte`, which must lie on a char boundary
    pub fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            // Out-of-order query; restart from the beginning
            self.byte = 0;
            self.char = 0;
        }
        self.char += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.char
    }
}
