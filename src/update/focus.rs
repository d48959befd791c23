//! Focus and click handling for the text surface

use crate::commands::Cmd;
use crate::messages::FocusMsg;
use crate::model::{EditorModel, FocusState};

use super::dismiss;

/// Handle focus messages
///
/// Losing focus to the popup while navigating is expected and keeps the
/// popup open.
pub fn update_focus(model: &mut EditorModel, msg: FocusMsg) -> Option<Cmd> {
    match msg {
        FocusMsg::TextFocused | FocusMsg::TextClicked => {
            if model.focus == FocusState::Editing {
                None
            } else {
                dismiss(model)
            }
        }
        FocusMsg::TextBlurred => {
            if model.focus == FocusState::Suggesting {
                dismiss(model)
            } else {
                None
            }
        }
    }
}
