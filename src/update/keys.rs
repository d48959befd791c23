//! Key routing between the text surface and the popup

use crate::commands::Cmd;
use crate::keymap::{KeyCode, Keystroke};
use crate::messages::KeyMsg;
use crate::model::{EditorModel, FocusState};

use super::dismiss;

/// Handle key messages
pub fn update_keys(model: &mut EditorModel, msg: KeyMsg) -> Option<Cmd> {
    match msg {
        KeyMsg::Preview(key) => preview_key(model, key),
        KeyMsg::Text(key) => text_key(model, key),
        KeyMsg::Popup(key) => popup_key(model, key),
    }
}

/// Keys seen by the text surface before its own handling
fn preview_key(model: &mut EditorModel, key: Keystroke) -> Option<Cmd> {
    if key.is(KeyCode::Tab) && model.focus != FocusState::Navigating {
        return Some(Cmd::batch(vec![
            Cmd::InsertText(model.config.indent()),
            Cmd::SuppressKey,
        ]));
    }

    // Native Enter/Escape handling still runs
    if (key.is(KeyCode::Enter) || key.is(KeyCode::Escape)) && model.focus == FocusState::Suggesting
    {
        return dismiss(model);
    }

    None
}

/// The open key moves from the text surface into the popup
fn text_key(model: &mut EditorModel, key: Keystroke) -> Option<Cmd> {
    if model.focus != FocusState::Suggesting || !key.is(model.popup.open_key()) {
        return None;
    }

    let index = model.popup.boundary_index()?;
    let index = model.popup.select(index)?;
    model.focus = FocusState::Navigating;

    Some(Cmd::batch(vec![
        Cmd::SelectEntry(index),
        Cmd::FocusPopup,
        Cmd::SuppressKey,
    ]))
}

fn popup_key(model: &mut EditorModel, key: Keystroke) -> Option<Cmd> {
    if model.focus != FocusState::Navigating {
        return None;
    }

    if key.is(KeyCode::Enter) {
        return Some(commit(model));
    }
    if key.is(KeyCode::Escape) || key.is(KeyCode::Backspace) {
        return Some(leave_popup(model));
    }

    let retreat = model.popup.retreat_key();
    if key.is(retreat) {
        if model.popup.selected_index.is_none() || model.popup.at_boundary() {
            return Some(leave_popup(model));
        }
        let index = model.popup.step(retreat == KeyCode::Down)?;
        return Some(Cmd::batch(vec![Cmd::SelectEntry(index), Cmd::SuppressKey]));
    }

    let open = model.popup.open_key();
    if key.is(open) {
        let index = match model.popup.selected_index {
            Some(_) => model.popup.step(open == KeyCode::Down)?,
            None => model.popup.select(model.popup.boundary_index()?)?,
        };
        return Some(Cmd::batch(vec![Cmd::SelectEntry(index), Cmd::SuppressKey]));
    }

    None
}

/// Back to the text surface without committing
fn leave_popup(model: &mut EditorModel) -> Cmd {
    model.popup.hide();
    model.focus = FocusState::Editing;
    Cmd::batch(vec![Cmd::HidePopup, Cmd::FocusText, Cmd::SuppressKey])
}

/// Replace the caret line with the selected entry and return to the text
fn commit(model: &mut EditorModel) -> Cmd {
    let entry = model.popup.selected_entry().map(|e| e.text.clone());
    model.popup.hide();
    model.focus = FocusState::Editing;

    let mut cmds = vec![Cmd::HidePopup];
    if let Some(text) = entry {
        tracing::debug!(entry = %text, "Committing entry");
        cmds.push(Cmd::Commit(text));
    }
    cmds.push(Cmd::FocusText);
    cmds.push(Cmd::SuppressKey);
    Cmd::batch(cmds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::{entries_from_words, PopupPlacement};
    use crate::keymap::Modifiers;

    fn suggesting(words: &[&str], flipped: bool) -> EditorModel {
        let mut model = EditorModel::default();
        let placement = PopupPlacement {
            flipped,
            ..PopupPlacement::default()
        };
        model
            .popup
            .show(entries_from_words(words.iter().copied(), 0), placement, 10);
        model.focus = FocusState::Suggesting;
        model
    }

    fn key(code: KeyCode) -> Keystroke {
        Keystroke::key(code)
    }

    #[test]
    fn test_tab_inserts_indent() {
        let mut model = EditorModel::default();
        let cmd = update_keys(&mut model, KeyMsg::Preview(key(KeyCode::Tab))).unwrap();
        assert_eq!(
            cmd,
            Cmd::batch(vec![Cmd::InsertText("    ".into()), Cmd::SuppressKey])
        );
    }

    #[test]
    fn test_shift_tab_is_not_indent() {
        let mut model = EditorModel::default();
        let shift_tab = Keystroke::new(KeyCode::Tab, Modifiers::SHIFT);
        assert_eq!(update_keys(&mut model, KeyMsg::Preview(shift_tab)), None);
    }

    #[test]
    fn test_escape_in_text_dismisses_without_suppressing() {
        let mut model = suggesting(&["alpha"], false);
        let cmd = update_keys(&mut model, KeyMsg::Preview(key(KeyCode::Escape))).unwrap();
        assert!(!cmd.suppresses_key());
        assert_eq!(model.focus, FocusState::Editing);
    }

    #[test]
    fn test_open_key_selects_first_entry_below() {
        let mut model = suggesting(&["alpha", "beta"], false);
        let cmd = update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down))).unwrap();

        assert_eq!(model.focus, FocusState::Navigating);
        assert_eq!(model.popup.selected_index, Some(0));
        assert!(cmd.suppresses_key());
        assert!(cmd.flatten().contains(&Cmd::FocusPopup));
    }

    #[test]
    fn test_open_key_selects_last_entry_when_flipped() {
        let mut model = suggesting(&["alpha", "beta", "gamma"], true);
        assert_eq!(update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down))), None);

        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Up)));
        assert_eq!(model.popup.selected_index, Some(2));
    }

    #[test]
    fn test_retreat_at_boundary_leaves_popup() {
        let mut model = suggesting(&["alpha", "beta"], false);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down)));

        let cmd = update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Up))).unwrap();
        assert_eq!(model.focus, FocusState::Editing);
        assert_eq!(model.popup.selected_index, Some(0));
        let cmds = cmd.flatten();
        assert!(cmds.contains(&Cmd::FocusText));
        assert!(!cmds.iter().any(|c| matches!(c, Cmd::Commit(_))));
    }

    #[test]
    fn test_navigation_clamps_at_far_end() {
        let mut model = suggesting(&["alpha", "beta"], false);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down)));
        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Down)));
        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Down)));
        assert_eq!(model.popup.selected_index, Some(1));

        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Up)));
        assert_eq!(model.popup.selected_index, Some(0));
        assert_eq!(model.focus, FocusState::Navigating);
    }

    #[test]
    fn test_flipped_retreat_walks_down() {
        let mut model = suggesting(&["a1", "a2", "a3"], true);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Up)));
        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Up)));
        assert_eq!(model.popup.selected_index, Some(1));

        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Down)));
        assert_eq!(model.popup.selected_index, Some(2));
        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Down)));
        assert_eq!(model.focus, FocusState::Editing);
    }

    #[test]
    fn test_enter_commits_selected_entry() {
        let mut model = suggesting(&["alpha", "beta"], false);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down)));
        update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Down)));

        let cmd = update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Enter))).unwrap();
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::HidePopup,
                Cmd::Commit("beta".into()),
                Cmd::FocusText,
                Cmd::SuppressKey
            ]
        );
        assert_eq!(model.focus, FocusState::Editing);
    }

    #[test]
    fn test_backspace_returns_focus_without_commit() {
        let mut model = suggesting(&["alpha"], false);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down)));
        let cmd = update_keys(&mut model, KeyMsg::Popup(key(KeyCode::Backspace))).unwrap();

        assert_eq!(model.focus, FocusState::Editing);
        assert!(!cmd.flatten().iter().any(|c| matches!(c, Cmd::Commit(_))));
    }

    #[test]
    fn test_tab_ignored_while_navigating() {
        let mut model = suggesting(&["alpha"], false);
        update_keys(&mut model, KeyMsg::Text(key(KeyCode::Down)));
        assert_eq!(update_keys(&mut model, KeyMsg::Preview(key(KeyCode::Tab))), None);
    }
}
