//! Highlight rules
//!
//! A rule is a regex pattern plus the style painted over its matches. Rules
//! form an ordered [`RuleSet`]; on overlap the later rule wins.

use serde::{Deserialize, Serialize};

use super::highlights::StylePatch;
use crate::theme::{Color, Font};

/// A pattern and the style applied to every match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRule {
    /// Regex, matched with multiline semantics (`^`/`$` match at line ends)
    pub pattern: String,
    #[serde(default = "default_foreground")]
    pub foreground: Color,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub font: Font,
}

fn default_foreground() -> Color {
    Color::BLACK
}

fn default_background() -> Color {
    Color::WHITE
}

/// Ordered rules; order is the overlap tie-break
pub type RuleSet = Vec<HighlightRule>;

impl HighlightRule {
    /// Rule with the given foreground and default background/font
    pub fn new(pattern: impl Into<String>, foreground: Color) -> Self {
        Self {
            pattern: pattern.into(),
            foreground,
            background: default_background(),
            font: Font::default(),
        }
    }

    /// Set the background color (builder pattern)
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the font (builder pattern)
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Patch painted over each match
    pub fn patch(&self) -> StylePatch {
        StylePatch::full(self.foreground, self.background, self.font.clone())
    }
}
