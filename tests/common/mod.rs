//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use codebox::autocomplete::{entries_from_words, PopupPlacement};
use codebox::model::FocusState;
use codebox::surface::PopupSurface;
use codebox::syntax::HighlightRule;
use codebox::theme::Color;
use codebox::{Document, EditorConfig, EditorController, ListPopup};

pub const GREEN: Color = Color::rgb(0, 0x80, 0);
pub const BLUE: Color = Color::rgb(0, 0, 0xFF);
pub const RED: Color = Color::rgb(0xFF, 0, 0);

pub type TestController = EditorController<Document, ListPopup>;

/// Controller over `text` with the caret at `caret`
pub fn test_controller(text: &str, caret: usize) -> TestController {
    let mut document = Document::with_text(text).with_metrics(16, 8);
    document.set_caret(caret);
    EditorController::new(document, ListPopup::default(), EditorConfig::default())
}

/// Controller with a dictionary and rules, after one analysis pass
pub fn analyzed(
    text: &str,
    caret: usize,
    words: &[&str],
    rules: Vec<HighlightRule>,
) -> TestController {
    let mut controller = test_controller(text, caret);
    controller.model_mut().dictionary = entries_from_words(words.iter().copied(), 0);
    controller.model_mut().rules = rules;
    controller.on_text_changed();
    controller
}

/// Put the controller in Navigating with `words` shown and `selected` chosen
pub fn navigating(controller: &mut TestController, words: &[&str], selected: usize) {
    let entries = entries_from_words(words.iter().copied(), 0);
    {
        let model = controller.model_mut();
        model.popup.show(entries.clone(), PopupPlacement::default(), 10);
        model.popup.select(selected);
        model.focus = FocusState::Navigating;
    }
    let popup = controller.popup_mut();
    popup.set_entries(&entries);
    popup.set_selected_index(Some(selected));
    popup.show();
    popup.focus();
}

/// Text of every char range painted with `color`
pub fn painted(controller: &TestController, color: Color) -> Vec<String> {
    let document = controller.text();
    document
        .styles
        .ranges_with_foreground(color)
        .into_iter()
        .map(|range| document.buffer.slice(range).to_string())
        .collect()
}
