//! Update functions for the Elm-style architecture
//!
//! All focus and popup transitions flow through these functions. They only
//! touch the model; surface work is returned as [`Cmd`]s.

mod analysis;
mod focus;
mod keys;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{EditorModel, FocusState};

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use analysis::update_analysis;
pub use focus::update_focus;
pub use keys::update_keys;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Analysis(m) => analysis::update_analysis(model, m),
        Msg::Key(m) => keys::update_keys(model, m),
        Msg::Focus(m) => focus::update_focus(model, m),
    }
}

/// Update with a debug span, a state diff and invariant checks
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StateSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "focus", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Key::Popup(Keystroke { key: Up, mods: Modifiers(0) })`
/// - `Focus::TextClicked`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Analysis(m) => format!("Analysis::{:?}", m),
        Msg::Key(m) => format!("Key::{:?}", m),
        Msg::Focus(m) => format!("Focus::{:?}", m),
    }
}

/// Hide the popup and fall back to Editing
///
/// Returns focus to the text surface when the popup had it.
fn dismiss(model: &mut EditorModel) -> Option<Cmd> {
    let was = model.focus;
    if was == FocusState::Editing && !model.popup.visible {
        return None;
    }
    model.popup.hide();
    model.focus = FocusState::Editing;

    if was == FocusState::Navigating {
        Some(Cmd::batch(vec![Cmd::HidePopup, Cmd::FocusText]))
    } else {
        Some(Cmd::HidePopup)
    }
}
