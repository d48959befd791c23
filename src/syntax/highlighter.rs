//! Viewport-restricted regex highlighting
//!
//! Only the visible slice of the document is scanned, so the cost of a pass
//! scales with the viewport and not with the document. The pass is pure: it
//! returns style spans and leaves applying them to the caller.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use fancy_regex::{Regex, RegexBuilder};
use ropey::Rope;

use super::highlights::{StylePatch, StyleSpan, TextStyle};
use super::rules::HighlightRule;
use crate::model::Viewport;
use crate::util::text::ByteCharCursor;

/// Default cap on backtracking steps per match attempt
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// A rule that contributed nothing to a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern does not compile
    Invalid {
        rule: usize,
        pattern: String,
        message: String,
    },
    /// The engine gave up while matching (e.g. backtrack limit)
    Match {
        rule: usize,
        pattern: String,
        message: String,
    },
}

impl PatternError {
    /// Index of the failing rule in the rule set
    pub fn rule(&self) -> usize {
        match self {
            PatternError::Invalid { rule, .. } | PatternError::Match { rule, .. } => *rule,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Invalid {
                rule,
                pattern,
                message,
            } => write!(f, "rule {} has invalid pattern {:?}: {}", rule, pattern, message),
            PatternError::Match {
                rule,
                pattern,
                message,
            } => write!(f, "rule {} failed matching {:?}: {}", rule, pattern, message),
        }
    }
}

impl std::error::Error for PatternError {}

/// Result of one highlight pass
#[derive(Debug, Clone, Default)]
pub struct HighlightPass {
    /// Spans in application order: the reset span first, then rule matches
    /// in rule order
    pub spans: Vec<StyleSpan>,
    /// Rules skipped in this pass
    pub errors: Vec<PatternError>,
}

/// Applies a rule set to the visible region of a document
///
/// Compiled patterns are cached by pattern text. Patterns that no rule uses
/// anymore are dropped at the end of each pass, so the host can edit the rule
/// set freely between passes.
#[derive(Debug)]
pub struct ViewportHighlighter {
    patterns: HashMap<String, Result<Regex, String>>,
    backtrack_limit: usize,
}

impl Default for ViewportHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_BACKTRACK_LIMIT)
    }
}

impl ViewportHighlighter {
    pub fn new(backtrack_limit: usize) -> Self {
        Self {
            patterns: HashMap::new(),
            backtrack_limit,
        }
    }

    /// Number of cached patterns (valid or not)
    pub fn cached_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Compute the style spans for the visible part of `text`
    pub fn highlight(
        &mut self,
        text: &Rope,
        rules: &[HighlightRule],
        viewport: &Viewport,
        defaults: &TextStyle,
    ) -> HighlightPass {
        let mut pass = HighlightPass::default();
        let len = text.len_chars();
        let end = viewport.last_visible_offset.min(len);
        let start = viewport.first_visible_offset.min(end);
        if start == end {
            return pass;
        }

        let visible: Cow<str> = text.slice(start..end).into();
        pass.spans.push(StyleSpan {
            range: start..end,
            patch: StylePatch::reset(defaults),
        });

        let limit = self.backtrack_limit;
        let mut used: HashMap<String, Result<Regex, String>> = HashMap::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if !used.contains_key(&rule.pattern) {
                let compiled = self
                    .patterns
                    .remove(&rule.pattern)
                    .unwrap_or_else(|| compile(&rule.pattern, limit));
                used.insert(rule.pattern.clone(), compiled);
            }

            let regex = match &used[&rule.pattern] {
                Ok(regex) => regex,
                Err(message) => {
                    pass.errors.push(PatternError::Invalid {
                        rule: index,
                        pattern: rule.pattern.clone(),
                        message: message.clone(),
                    });
                    continue;
                }
            };

            match scan(regex, &visible, start, &rule.patch()) {
                Ok(spans) => pass.spans.extend(spans),
                Err(e) => {
                    tracing::warn!(rule = index, pattern = %rule.pattern, "Skipping rule: {}", e);
                    pass.errors.push(PatternError::Match {
                        rule: index,
                        pattern: rule.pattern.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        self.patterns = used;

        tracing::debug!(
            visible_chars = end - start,
            rules = rules.len(),
            spans = pass.spans.len(),
            skipped = pass.errors.len(),
            "Highlight pass"
        );
        pass
    }
}

/// Compile with multiline semantics
fn compile(pattern: &str, backtrack_limit: usize) -> Result<Regex, String> {
    RegexBuilder::new(&format!("(?m){}", pattern))
        .backtrack_limit(backtrack_limit)
        .build()
        .map_err(|e| {
            tracing::warn!(pattern = %pattern, "Invalid highlight pattern: {}", e);
            e.to_string()
        })
}

/// All non-empty, non-overlapping matches in `visible`, shifted by `base`
///
/// Matches found before a failure are discarded with the rule.
fn scan(
    regex: &Regex,
    visible: &str,
    base: usize,
    patch: &StylePatch,
) -> Result<Vec<StyleSpan>, fancy_regex::Error> {
    let mut cursor = ByteCharCursor::new(visible);
    let mut spans = Vec::new();
    for found in regex.find_iter(visible) {
        let found = found?;
        if found.start() == found.end() {
            continue;
        }
        let start = cursor.char_offset(found.start());
        let end = cursor.char_offset(found.end());
        spans.push(StyleSpan {
            range: base + start..base + end,
            patch: patch.clone(),
        });
    }
    Ok(spans)
}
