//! Text change handling: filter the dictionary, place the popup

use crate::autocomplete::filter;
use crate::commands::Cmd;
use crate::messages::{AnalysisMsg, TextContext};
use crate::model::{EditorModel, FocusState};

use super::dismiss;

/// Handle analysis messages
pub fn update_analysis(model: &mut EditorModel, msg: AnalysisMsg) -> Option<Cmd> {
    match msg {
        AnalysisMsg::TextChanged(context) => text_changed(model, context),
    }
}

fn text_changed(model: &mut EditorModel, context: TextContext) -> Option<Cmd> {
    let matches = filter(&model.dictionary, &context.word);
    model.current_word = context.word;

    if matches.is_empty() {
        return dismiss(model);
    }

    let metrics = &model.config.popup;
    let placement = metrics.place(
        context.caret_point,
        context.line_height,
        context.container_height,
        matches.len(),
        model.config.item_height,
    );
    let page_size = metrics.rows_fitting(placement.bounds.height, model.config.item_height);

    tracing::debug!(
        word = %model.current_word,
        matches = matches.len(),
        flipped = placement.flipped,
        "Suggesting"
    );

    let was = model.focus;
    model.popup.show(matches, placement, page_size);
    model.focus = FocusState::Suggesting;

    if was == FocusState::Navigating {
        Some(Cmd::batch(vec![Cmd::ShowPopup, Cmd::FocusText]))
    } else {
        Some(Cmd::ShowPopup)
    }
}
