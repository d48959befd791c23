//! Style data structures
//!
//! A highlight pass produces [`StyleSpan`]s: document ranges paired with a
//! [`StylePatch`]. Surfaces apply spans in order, each one overwriting the
//! attributes it sets. [`StyleRuns`] is the in-memory style table used by the
//! reference [`Document`](crate::model::Document) surface.

use std::ops::Range;

use serde::Serialize;

use crate::theme::{Color, Font};

/// Fully resolved style of a character
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub foreground: Color,
    pub background: Color,
    pub font: Font,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            font: Font::default(),
        }
    }
}

impl TextStyle {
    /// Overwrite the attributes the patch sets
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(fg) = patch.foreground {
            self.foreground = fg;
        }
        if let Some(bg) = patch.background {
            self.background = bg;
        }
        if let Some(font) = &patch.font {
            self.font = font.clone();
        }
    }
}

/// Partial style: `None` attributes are left untouched when applied
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StylePatch {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub font: Option<Font>,
}

impl StylePatch {
    /// Reset foreground and font to the surface defaults
    ///
    /// The background is not part of the reset.
    pub fn reset(defaults: &TextStyle) -> Self {
        Self {
            foreground: Some(defaults.foreground),
            background: None,
            font: Some(defaults.font.clone()),
        }
    }

    /// Set every attribute
    pub fn full(foreground: Color, background: Color, font: Font) -> Self {
        Self {
            foreground: Some(foreground),
            background: Some(background),
            font: Some(font),
        }
    }
}

/// A style patch over a document char range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub patch: StylePatch,
}

/// A maximal run of identically styled characters
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub style: TextStyle,
}

/// Run-length style table covering `0..len`
///
/// Runs are contiguous, sorted, non-empty, and adjacent runs never share a
/// style.
#[derive(Debug, Clone)]
pub struct StyleRuns {
    runs: Vec<StyleRun>,
    len: usize,
    default: TextStyle,
}

impl StyleRuns {
    /// Table of `len` characters in the default style
    pub fn new(len: usize, default: TextStyle) -> Self {
        let runs = if len == 0 {
            Vec::new()
        } else {
            vec![StyleRun {
                range: 0..len,
                style: default.clone(),
            }]
        };
        Self { runs, len, default }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    pub fn default_style(&self) -> &TextStyle {
        &self.default
    }

    /// Style of the character at `offset`
    pub fn style_at(&self, offset: usize) -> Option<&TextStyle> {
        let idx = self.runs.partition_point(|r| r.range.end <= offset);
        self.runs
            .get(idx)
            .filter(|r| r.range.start <= offset)
            .map(|r| &r.style)
    }

    /// Char ranges whose foreground is `color`
    pub fn ranges_with_foreground(&self, color: Color) -> Vec<Range<usize>> {
        self.runs
            .iter()
            .filter(|r| r.style.foreground == color)
            .map(|r| r.range.clone())
            .collect()
    }

    /// Apply `patch` to `range` (clamped to the table)
    pub fn paint(&mut self, range: Range<usize>, patch: &StylePatch) {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        if start == end {
            return;
        }

        self.split_at(start);
        self.split_at(end);
        let first = self.runs.partition_point(|r| r.range.end <= start);
        for run in &mut self.runs[first..] {
            if run.range.start >= end {
                break;
            }
            run.style.apply(patch);
        }
        self.coalesce();
    }

    /// Account for `count` characters inserted at `at`
    ///
    /// Inserted text takes the style of the character before it, or of the
    /// first character when inserted at the start.
    pub fn insert(&mut self, at: usize, count: usize) {
        if count == 0 {
            return;
        }
        if self.runs.is_empty() {
            self.runs.push(StyleRun {
                range: 0..count,
                style: self.default.clone(),
            });
            self.len = count;
            return;
        }

        let at = at.min(self.len);
        let idx = if at == 0 {
            0
        } else {
            self.runs.partition_point(|r| r.range.end < at)
        };
        self.runs[idx].range.end += count;
        for run in &mut self.runs[idx + 1..] {
            run.range.start += count;
            run.range.end += count;
        }
        self.len += count;
    }

    /// Account for the characters in `range` being removed
    pub fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        if start == end {
            return;
        }
        let count = end - start;

        self.split_at(start);
        self.split_at(end);
        self.runs
            .retain(|r| !(r.range.start >= start && r.range.end <= end));
        for run in &mut self.runs {
            if run.range.start >= end {
                run.range.start -= count;
                run.range.end -= count;
            }
        }
        self.len -= count;
        self.coalesce();
    }

    fn split_at(&mut self, pos: usize) {
        let idx = self.runs.partition_point(|r| r.range.end <= pos);
        let Some(run) = self.runs.get_mut(idx) else {
            return;
        };
        if run.range.start < pos {
            let tail = StyleRun {
                range: pos..run.range.end,
                style: run.style.clone(),
            };
            run.range.end = pos;
            self.runs.insert(idx + 1, tail);
        }
    }

    fn coalesce(&mut self) {
        let mut merged: Vec<StyleRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(last) if last.style == run.style => last.range.end = run.range.end,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}
