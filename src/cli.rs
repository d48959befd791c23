//! Command-line host for the analysis engine
//!
//! Loads a document into the in-memory surfaces, runs an analysis pass,
//! replays keys the way a widget host would route them and reports styles,
//! current word, popup and gutter.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use codebox::autocomplete::{entries_from_words, popup_rows, AutoCompleteIndex, PopupBounds, PopupRow};
use codebox::gutter::GutterLayout;
use codebox::keymap::{KeyCode, Keystroke, Modifiers};
use codebox::model::FocusState;
use codebox::syntax::RuleSet;
use codebox::{Document, EditorConfig, EditorController, ListPopup, TextSurface};

/// Run the codebox analysis engine over a file
#[derive(Parser, Debug)]
#[command(name = "codebox", version, about = "Highlight, complete and lay out a document")]
pub struct CliArgs {
    /// Document to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Highlight rules (YAML list of {pattern, foreground, background, font})
    #[arg(short, long, value_name = "YAML")]
    pub rules: Option<PathBuf>,

    /// Autocomplete dictionary, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Category tag given to every dictionary word
    #[arg(long, default_value_t = 0)]
    pub category: usize,

    /// Config file (default: ~/.config/codebox/config.yaml)
    #[arg(short, long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Caret char offset (default: end of document)
    #[arg(long, value_name = "N", conflicts_with = "line")]
    pub caret: Option<usize>,

    /// Put the caret on line N (1-indexed)
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Column N on --line (1-indexed, default: end of line)
    #[arg(long, value_name = "N", requires = "line")]
    pub column: Option<usize>,

    /// First visible line (0-indexed)
    #[arg(long, default_value_t = 0)]
    pub top_line: usize,

    /// Lines in the window
    #[arg(long, default_value_t = 40)]
    pub visible_lines: usize,

    /// Keys to replay, comma separated (e.g. "down,down,enter")
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write debug logs to ~/.config/codebox/logs/
    #[arg(long)]
    pub log_file: bool,
}

/// A document wired to the controller
pub struct Session {
    controller: EditorController<Document, ListPopup>,
}

impl Session {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => EditorConfig::load_from(path)?,
            None => EditorConfig::load(),
        };

        let mut document = Document::from_file(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
            .with_visible_lines(args.visible_lines);
        document.scroll_to(args.top_line);
        let caret = caret_offset(&document, args);
        document.set_caret(caret);

        let mut controller = EditorController::new(document, ListPopup::default(), config);
        if let Some(path) = &args.rules {
            controller.model_mut().rules = load_rules(path)?;
        }
        if let Some(path) = &args.words {
            controller.model_mut().dictionary = load_words(path, args.category)?;
        }

        controller.on_text_changed();
        Ok(Self { controller })
    }

    /// Replay `keys` and report the final state
    pub fn run(mut self, keys: &[String]) -> Result<Report> {
        for key in keys {
            let key = Keystroke::parse(key).with_context(|| format!("Invalid key {:?}", key))?;
            self.press(key);
        }
        Ok(self.report())
    }

    /// Route a key like a widget host: popup first when it has focus,
    /// otherwise preview, key down, then the text surface's own handling
    pub fn press(&mut self, key: Keystroke) {
        let before = self.controller.text().buffer.clone();

        if self.controller.model().focus == FocusState::Navigating {
            self.controller.on_popup_key_down(key);
        } else if !self.controller.on_preview_key_down(key) && !self.controller.on_key_down(key) {
            native_key(self.controller.text_mut(), key);
        }

        if self.controller.text().buffer != before {
            self.controller.on_text_changed();
        }
    }

    pub fn report(&self) -> Report {
        let document = self.controller.text();
        let model = self.controller.model();
        let defaults = document.styles.default_style();

        let highlights = document
            .styles
            .runs()
            .iter()
            .filter(|run| run.style != *defaults)
            .map(|run| HighlightReport {
                start: run.range.start,
                end: run.range.end,
                foreground: run.style.foreground.to_hex(),
                text: document.buffer.slice(run.range.clone()).to_string(),
            })
            .collect();

        let popup = model.popup.visible.then(|| PopupReport {
            flipped: model.popup.flipped,
            bounds: model.popup.bounds,
            rows: popup_rows(&model.popup, model.config.item_height, None),
        });

        Report {
            text: document.buffer.to_string(),
            caret: document.caret(),
            word: model.current_word.clone(),
            focus: model.focus,
            highlights,
            popup,
            gutter: self.controller.gutter(),
            errors: self
                .controller
                .last_errors()
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Load a YAML rule list
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse rules {}", path.display()))
}

/// Load a word list, one entry per non-blank line
pub fn load_words(path: &Path, category: usize) -> Result<AutoCompleteIndex> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read words {}", path.display()))?;
    let words = content.lines().map(str::trim).filter(|w| !w.is_empty());
    Ok(entries_from_words(words, category))
}

fn caret_offset(document: &Document, args: &CliArgs) -> usize {
    let text = &document.buffer;
    match (args.caret, args.line) {
        (Some(offset), _) => offset.min(text.len_chars()),
        (None, Some(line)) => {
            let line = line.saturating_sub(1).min(text.len_lines().saturating_sub(1));
            let range = codebox::util::line_content_range(text, line);
            match args.column {
                Some(column) => (range.start + column.saturating_sub(1)).min(range.end),
                None => range.end,
            }
        }
        (None, None) => text.len_chars(),
    }
}

/// What the text widget does with keys the engine let through
fn native_key(document: &mut Document, key: Keystroke) {
    let typing = key.mods.is_empty() || key.mods == Modifiers::SHIFT;
    if !typing {
        return;
    }

    let caret = document.caret();
    match key.key {
        KeyCode::Char(c) => {
            let c = if key.mods == Modifiers::SHIFT {
                c.to_ascii_uppercase()
            } else {
                c
            };
            document.replace_selection(&c.to_string());
        }
        KeyCode::Space => document.replace_selection(" "),
        KeyCode::Enter => document.replace_selection("\n"),
        KeyCode::Tab => document.replace_selection("\t"),
        KeyCode::Backspace if document.selection.1 > 0 => document.replace_selection(""),
        KeyCode::Backspace if caret > 0 => document.replace_range(caret - 1..caret, ""),
        KeyCode::Delete if document.selection.1 > 0 => document.replace_selection(""),
        KeyCode::Delete => document.replace_range(caret..caret + 1, ""),
        KeyCode::Left => document.set_caret(caret.saturating_sub(1)),
        KeyCode::Right => document.set_caret(caret + 1),
        KeyCode::Home | KeyCode::End => {
            let line = document.buffer.char_to_line(caret);
            let range = codebox::util::line_content_range(&document.buffer, line);
            let target = if key.key == KeyCode::Home {
                range.start
            } else {
                range.end
            };
            document.set_caret(target);
        }
        KeyCode::Up | KeyCode::Down => {
            let text = &document.buffer;
            let line = text.char_to_line(caret);
            let column = caret - text.line_to_char(line);
            let target = if key.key == KeyCode::Up {
                line.checked_sub(1)
            } else {
                Some(line + 1).filter(|&l| l < text.len_lines())
            };
            if let Some(target) = target {
                let range = codebox::util::line_content_range(text, target);
                let offset = (range.start + column).min(range.end);
                document.set_caret(offset);
            }
        }
        _ => {}
    }
}

/// Final engine state after a run
#[derive(Debug, Serialize)]
pub struct Report {
    pub text: String,
    pub caret: usize,
    pub word: String,
    pub focus: FocusState,
    pub highlights: Vec<HighlightReport>,
    pub popup: Option<PopupReport>,
    pub gutter: GutterLayout,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HighlightReport {
    pub start: usize,
    pub end: usize,
    pub foreground: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PopupReport {
    pub flipped: bool,
    pub bounds: PopupBounds,
    pub rows: Vec<PopupRow>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "caret {}  word {:?}  focus {}",
            self.caret,
            self.word,
            self.focus.name()
        )?;

        writeln!(f, "highlights:")?;
        for h in &self.highlights {
            writeln!(f, "  {}..{} {} {:?}", h.start, h.end, h.foreground, h.text)?;
        }

        match &self.popup {
            Some(popup) => {
                let b = popup.bounds;
                writeln!(
                    f,
                    "popup {} at ({}, {}) {}x{}:",
                    if popup.flipped { "above" } else { "below" },
                    b.x,
                    b.y,
                    b.width,
                    b.height
                )?;
                for row in &popup.rows {
                    let marker = if row.selected { '>' } else { ' ' };
                    writeln!(f, "  {} {}", marker, row.text)?;
                }
            }
            None => writeln!(f, "popup hidden")?,
        }

        writeln!(f, "gutter:")?;
        for (row, number) in self.gutter.line_numbers.iter().enumerate() {
            let marker = if self.gutter.current_row == Some(row) {
                " *"
            } else {
                ""
            };
            writeln!(f, "  {}{}", number, marker)?;
        }

        for error in &self.errors {
            writeln!(f, "skipped: {}", error)?;
        }
        Ok(())
    }
}
