//! Row layout for the popup list
//!
//! The host draws these rows; the core decides which entries are on screen,
//! where they go and whether an icon can be shown for them.

use serde::Serialize;

use crate::model::PopupState;

/// Text x offset when the host has no icons
pub const TEXT_X: i32 = 2;
/// Text x offset leaving room for a 16px icon
pub const TEXT_X_WITH_ICONS: i32 = 18;

/// One visible popup row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupRow {
    /// Index into the popup entries
    pub index: usize,
    pub text: String,
    /// Icon to draw, `None` when the category has no icon
    pub icon: Option<usize>,
    pub selected: bool,
    /// Row top relative to the popup's client area
    pub y: i32,
    pub text_x: i32,
}

/// Rows currently on screen
///
/// `icon_count` is the size of the host's icon list, `None` when it has none.
pub fn popup_rows(popup: &PopupState, item_height: i32, icon_count: Option<usize>) -> Vec<PopupRow> {
    let text_x = if icon_count.is_some() {
        TEXT_X_WITH_ICONS
    } else {
        TEXT_X
    };
    let rows = if popup.page_size == 0 {
        popup.entries.len()
    } else {
        popup.page_size
    };

    popup
        .entries
        .iter()
        .enumerate()
        .skip(popup.scroll_top)
        .take(rows)
        .enumerate()
        .map(|(row, (index, entry))| PopupRow {
            index,
            text: entry.text.clone(),
            icon: icon_count.and_then(|count| (entry.category < count).then_some(entry.category)),
            selected: popup.selected_index == Some(index),
            y: row as i32 * item_height,
            text_x,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::{AutoCompleteEntry, PopupPlacement};

    fn popup(entries: Vec<AutoCompleteEntry>, page_size: usize) -> PopupState {
        let mut popup = PopupState::default();
        popup.show(entries, PopupPlacement::default(), page_size);
        popup
    }

    #[test]
    fn test_rows_without_icons() {
        let popup = popup(vec![AutoCompleteEntry::new("alpha", 0)], 10);
        let rows = popup_rows(&popup, 16, None);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text_x, TEXT_X);
        assert_eq!(rows[0].icon, None);
    }

    #[test]
    fn test_stale_category_renders_without_icon() {
        let popup = popup(
            vec![AutoCompleteEntry::new("known", 1), AutoCompleteEntry::new("stale", 5)],
            10,
        );
        let rows = popup_rows(&popup, 16, Some(2));

        assert_eq!(rows[0].icon, Some(1));
        assert_eq!(rows[1].icon, None);
        assert_eq!(rows[1].text, "stale");
        assert_eq!(rows[1].text_x, TEXT_X_WITH_ICONS);
        assert_eq!(rows[1].y, 16);
    }

    #[test]
    fn test_rows_follow_scroll_and_selection() {
        let entries = (0..12)
            .map(|i| AutoCompleteEntry::new(format!("e{}", i), 0))
            .collect();
        let mut popup = popup(entries, 4);
        popup.select(6);

        let rows = popup_rows(&popup, 16, None);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].index, 3);
        assert_eq!(rows[0].y, 0);
        assert!(rows[3].selected);
        assert_eq!(rows[3].text, "e6");
    }
}
