//! Regex-based syntax highlighting over the visible region
//!
//! - `rules`: highlight rules and the ordered rule set
//! - `highlights`: style spans, patches and the run-length style table
//! - `highlighter`: the viewport-restricted highlight pass

mod highlighter;
mod highlights;
mod rules;

pub use highlighter::{HighlightPass, PatternError, ViewportHighlighter, DEFAULT_BACKTRACK_LIMIT};
pub use highlights::{StylePatch, StyleRun, StyleRuns, StyleSpan, TextStyle};
pub use rules::{HighlightRule, RuleSet};
