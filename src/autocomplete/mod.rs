//! Autocomplete: dictionary filtering, popup placement and list layout

mod commit;
mod index;
mod list;
mod placement;

pub use commit::{plan_commit, CommitPlan};
pub use index::{entries_from_words, filter, AutoCompleteEntry, AutoCompleteIndex};
pub use list::{popup_rows, PopupRow, TEXT_X, TEXT_X_WITH_ICONS};
pub use placement::{PopupBounds, PopupMetrics, PopupPlacement};
