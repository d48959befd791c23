mod common;

use codebox::autocomplete::{entries_from_words, filter, AutoCompleteEntry};
use codebox::model::FocusState;
use codebox::surface::PopupSurface;
use codebox::util::current_word;
use codebox::TextSurface;
use ropey::Rope;

use common::analyzed;

fn texts(entries: &[AutoCompleteEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.text.as_str()).collect()
}

#[test]
fn test_filter_keeps_dictionary_order() {
    let index = entries_from_words(["foo", "foobar", "bar"], 0);
    assert_eq!(texts(&filter(&index, "foo")), vec!["foo", "foobar"]);
}

#[test]
fn test_filter_membership_matches_contains() {
    let words = ["main", "remain", "Main", "maintain", "min", "xmainx", ""];
    let index = entries_from_words(words, 0);

    for word in ["main", "ain", "M", "x", "in"] {
        let found = filter(&index, word);
        let expected: Vec<&str> = words.iter().copied().filter(|w| w.contains(word)).collect();
        assert_eq!(texts(&found), expected, "word {:?}", word);
    }
}

#[test]
fn test_typed_word_opens_popup() {
    let controller = analyzed("hello wor", 9, &["world", "other"], vec![]);

    assert_eq!(controller.model().current_word, "wor");
    assert_eq!(controller.model().focus, FocusState::Suggesting);
    assert_eq!(texts(&controller.popup().entries), vec!["world"]);
    assert!(controller.popup().visible);
    assert_eq!(controller.popup().selected_index(), None);
}

#[test]
fn test_popup_hidden_after_space() {
    let mut controller = analyzed("hello wor", 9, &["world"], vec![]);
    controller.text_mut().replace_range(9..9, " ");
    controller.on_text_changed();

    assert_eq!(controller.model().current_word, "");
    assert_eq!(controller.model().focus, FocusState::Editing);
    assert!(!controller.popup().visible);
}

#[test]
fn test_no_match_keeps_popup_hidden() {
    let controller = analyzed("zzz", 3, &["world"], vec![]);
    assert!(!controller.popup().visible);
    assert_eq!(controller.model().focus, FocusState::Editing);
}

#[test]
fn test_empty_document_hides_popup() {
    let mut controller = analyzed("w", 1, &["world"], vec![]);
    assert!(controller.popup().visible);

    controller.text_mut().replace_range(0..1, "");
    controller.on_text_changed();
    assert!(!controller.popup().visible);
}

#[test]
fn test_dictionary_edits_apply_on_next_change() {
    let mut controller = analyzed("pri", 3, &[], vec![]);
    assert!(!controller.popup().visible);

    controller.model_mut().dictionary = entries_from_words(["print", "println"], 2);
    controller.on_text_changed();
    assert_eq!(controller.popup().entries.len(), 2);
    assert_eq!(controller.popup().entries[0].category, 2);
}

#[test]
fn test_current_word_boundaries() {
    let text = Rope::from("let x = foo\n\tbar baz\u{8}");

    assert_eq!(current_word(&text, 0), "");
    assert_eq!(current_word(&text, 4), "");
    assert_eq!(current_word(&text, 11), "foo");
    assert_eq!(current_word(&text, 12), "");
    // Tabs are part of the word
    assert_eq!(current_word(&text, 16), "\tbar");
    assert_eq!(current_word(&text, 20), "baz");
    assert_eq!(current_word(&text, 21), "");
}

#[test]
fn test_current_word_is_maximal_run() {
    let text = Rope::from("alpha beta\r\ngamma delta");
    let chars: Vec<char> = text.chars().collect();

    for caret in 1..=chars.len() {
        let word = current_word(&text, caret);
        let prev = chars[caret - 1];
        if prev == ' ' || prev == '\n' || prev == '\r' {
            assert!(word.is_empty());
            continue;
        }
        let start = chars[..caret]
            .iter()
            .rposition(|&c| c == ' ' || c == '\n' || c == '\r')
            .map_or(0, |p| p + 1);
        let expected: String = chars[start..caret].iter().collect();
        assert_eq!(word, expected, "caret {}", caret);
    }
}
