//! Utility modules

pub mod text;

pub use text::{current_word, is_line_break, is_word_boundary, line_content_range};
