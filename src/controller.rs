//! Editor controller - wires host events to the analysis engine
//!
//! Each handler gathers what it needs from the surfaces, runs the pure parts
//! (highlighting, word scan, [`update`]) and executes the resulting commands
//! against the surfaces.

use crate::autocomplete::plan_commit;
use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::gutter::GutterLayout;
use crate::keymap::Keystroke;
use crate::messages::{FocusMsg, Msg, TextContext};
use crate::model::{CaretState, EditorModel, Viewport};
use crate::surface::{PopupSurface, SuspendGuard, TextSurface};
use crate::syntax::{PatternError, ViewportHighlighter};
use crate::update::update;
use crate::util::current_word;

/// Owns the model and drives a text surface and a popup surface
pub struct EditorController<S, P> {
    model: EditorModel,
    text: S,
    popup: P,
    highlighter: ViewportHighlighter,
    last_errors: Vec<PatternError>,
}

impl<S: TextSurface, P: PopupSurface> EditorController<S, P> {
    pub fn new(text: S, popup: P, config: EditorConfig) -> Self {
        let highlighter = ViewportHighlighter::new(config.backtrack_limit);
        Self {
            model: EditorModel::new(config),
            text,
            popup,
            highlighter,
            last_errors: Vec::new(),
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    /// Rules and dictionary are host-owned data; edit them freely between events
    pub fn model_mut(&mut self) -> &mut EditorModel {
        &mut self.model
    }

    pub fn text(&self) -> &S {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut S {
        &mut self.text
    }

    pub fn popup(&self) -> &P {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut P {
        &mut self.popup
    }

    /// Rules skipped by the last highlight pass
    pub fn last_errors(&self) -> &[PatternError] {
        &self.last_errors
    }

    /// Full analysis pass: highlight, word scan, filter, placement
    pub fn on_text_changed(&mut self) {
        let mut text = SuspendGuard::new(&mut self.text);
        let snapshot = text.text();
        let caret = text.selection_start();

        self.last_errors = highlight_visible(&mut *text, &mut self.highlighter, &self.model);
        text.set_selection(caret, 0);

        let context = TextContext {
            word: current_word(&snapshot, caret),
            caret_point: text.caret_screen_point(),
            line_height: text.line_height(),
            container_height: text.container_height(),
        };
        if let Some(cmd) = update(&mut self.model, Msg::text_changed(context)) {
            execute(cmd, &mut *text, &mut self.popup, &self.model);
        }
    }

    /// Re-highlight the new visible range; autocomplete is left alone
    pub fn on_scrolled(&mut self) {
        let mut text = SuspendGuard::new(&mut self.text);
        let caret = text.selection_start();
        self.last_errors = highlight_visible(&mut *text, &mut self.highlighter, &self.model);
        text.set_selection(caret, 0);
    }

    /// Text surface key before native handling; returns true to suppress it
    pub fn on_preview_key_down(&mut self, key: Keystroke) -> bool {
        self.dispatch(Msg::preview_key(key))
    }

    /// Text surface key down; returns true to suppress native handling
    pub fn on_key_down(&mut self, key: Keystroke) -> bool {
        self.dispatch(Msg::text_key(key))
    }

    /// Popup key down; returns true to suppress native handling
    pub fn on_popup_key_down(&mut self, key: Keystroke) -> bool {
        // The host list may have moved its selection on its own (mouse, paging)
        if self.model.popup.visible {
            if let Some(index) = self.popup.selected_index() {
                self.model.popup.select(index);
            }
        }
        self.dispatch(Msg::popup_key(key))
    }

    pub fn on_got_focus(&mut self) {
        self.dispatch(Msg::Focus(FocusMsg::TextFocused));
    }

    pub fn on_lost_focus(&mut self) {
        self.dispatch(Msg::Focus(FocusMsg::TextBlurred));
    }

    pub fn on_click(&mut self) {
        self.dispatch(Msg::Focus(FocusMsg::TextClicked));
    }

    /// Gutter contents for the current viewport and caret
    pub fn gutter(&self) -> GutterLayout {
        let snapshot = self.text.text();
        let viewport = Viewport::from_range(&snapshot, self.text.visible_range());
        let caret = CaretState::from_offset(
            &snapshot,
            self.text.selection_start(),
            self.text.caret_screen_point(),
        );
        self.model
            .config
            .gutter
            .layout(&viewport, &caret, self.text.line_height())
    }

    fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let suppress = cmd.suppresses_key();
                execute(cmd, &mut self.text, &mut self.popup, &self.model);
                suppress
            }
            None => false,
        }
    }
}

/// Run the highlighter over the visible range and apply its spans
fn highlight_visible<S: TextSurface + ?Sized>(
    text: &mut S,
    highlighter: &mut ViewportHighlighter,
    model: &EditorModel,
) -> Vec<PatternError> {
    let snapshot = text.text();
    let viewport = Viewport::from_range(&snapshot, text.visible_range());
    let pass = highlighter.highlight(&snapshot, &model.rules, &viewport, &text.default_style());
    for span in &pass.spans {
        text.set_style(span.range.clone(), &span.patch);
    }
    pass.errors
}

fn execute<S, P>(cmd: Cmd, text: &mut S, popup: &mut P, model: &EditorModel)
where
    S: TextSurface + ?Sized,
    P: PopupSurface + ?Sized,
{
    match cmd {
        Cmd::ShowPopup => {
            popup.set_entries(&model.popup.entries);
            popup.set_bounds(model.popup.bounds);
            popup.show();
        }
        Cmd::HidePopup => popup.hide(),
        Cmd::FocusPopup => popup.focus(),
        Cmd::FocusText => text.focus(),
        Cmd::SelectEntry(index) => popup.set_selected_index(Some(index)),
        Cmd::Commit(entry) => {
            let plan = plan_commit(&text.text(), text.selection_start(), &entry);
            text.replace_range(plan.range, &plan.replacement);
            text.set_selection(plan.caret, 0);
        }
        Cmd::InsertText(inserted) => text.replace_selection(&inserted),
        Cmd::SuppressKey => {}
        Cmd::Batch(cmds) => {
            for cmd in cmds {
                execute(cmd, text, popup, model);
            }
        }
    }
}
