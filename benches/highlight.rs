//! Benchmarks for the per-keystroke analysis pass
//!
//! Highlight cost should track the viewport, not the document.
//!
//! Run with: cargo bench --bench highlight

use codebox::autocomplete::{entries_from_words, filter};
use codebox::model::Viewport;
use codebox::syntax::{HighlightRule, RuleSet, TextStyle, ViewportHighlighter};
use codebox::theme::Color;
use codebox::{Document, EditorConfig, EditorController, ListPopup};
use ropey::Rope;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn generate_source(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "fn function_{}(x: i32) -> i32 {{ let y = x * {}; // double it\n",
                i, i
            )
        })
        .collect()
}

fn rules() -> RuleSet {
    vec![
        HighlightRule::new("\\b(fn|let|i32)\\b", Color::rgb(0, 0, 0xFF)),
        HighlightRule::new("\\b\\d+\\b", Color::rgb(0x80, 0, 0x80)),
        HighlightRule::new("//.*$", Color::rgb(0, 0x80, 0)),
    ]
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn highlight_fixed_viewport(bencher: divan::Bencher, lines: usize) {
    let text = Rope::from(generate_source(lines));
    let viewport = Viewport::from_lines(&text, lines / 2, 40);
    let rules = rules();
    let defaults = TextStyle::default();
    let mut highlighter = ViewportHighlighter::default();

    bencher.bench_local(|| {
        let pass = highlighter.highlight(&text, &rules, &viewport, &defaults);
        divan::black_box(pass);
    });
}

#[divan::bench(args = [10, 40, 160])]
fn highlight_viewport_height(bencher: divan::Bencher, visible_lines: usize) {
    let text = Rope::from(generate_source(10_000));
    let viewport = Viewport::from_lines(&text, 100, visible_lines);
    let rules = rules();
    let defaults = TextStyle::default();
    let mut highlighter = ViewportHighlighter::default();

    bencher.bench_local(|| {
        let pass = highlighter.highlight(&text, &rules, &viewport, &defaults);
        divan::black_box(pass);
    });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn filter_dictionary(bencher: divan::Bencher, words: usize) {
    let index = entries_from_words((0..words).map(|i| format!("function_{}", i)), 0);

    bencher.bench_local(|| {
        divan::black_box(filter(&index, divan::black_box("tion_99")));
    });
}

#[divan::bench(args = [1_000, 100_000])]
fn full_text_change_pass(bencher: divan::Bencher, lines: usize) {
    let source = generate_source(lines);
    let mut document = Document::with_text(&source);
    document.scroll_to(lines / 2);
    let caret = document.buffer.line_to_char(lines / 2 + 3) + 5;
    document.set_caret(caret);

    let mut controller = EditorController::new(document, ListPopup::default(), EditorConfig::default());
    controller.model_mut().rules = rules();
    controller.model_mut().dictionary =
        entries_from_words((0..500).map(|i| format!("function_{}", i)), 0);

    bencher.bench_local(|| {
        controller.on_text_changed();
    });
}
