//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging focus and
//! popup state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=focus=debug,message=debug` - state diffs and dispatched messages
//! - `RUST_LOG=codebox::syntax=debug` - module-level filtering
//!
//! # Log Files
//!
//! With file logging on, logs are written to `~/.config/codebox/logs/codebox.log`
//! with daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EditorModel, FocusState};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, "codebox.log");
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of focus and popup state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub focus: FocusState,
    pub popup_visible: bool,
    pub entry_count: usize,
    pub selected_index: Option<usize>,
    pub flipped: bool,
}

impl StateSnapshot {
    pub fn from_model(model: &EditorModel) -> Self {
        Self {
            focus: model.focus,
            popup_visible: model.popup.visible,
            entry_count: model.popup.entries.len(),
            selected_index: model.popup.selected_index,
            flipped: model.popup.flipped,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.focus != other.focus {
            changes.push(format!(
                "focus: {} → {}",
                self.focus.name(),
                other.focus.name()
            ));
        }
        if self.popup_visible != other.popup_visible {
            let status = if other.popup_visible { "shown" } else { "hidden" };
            changes.push(format!("popup {}", status));
        }
        if self.entry_count != other.entry_count {
            changes.push(format!(
                "entries: {} → {}",
                self.entry_count, other.entry_count
            ));
        }
        if self.selected_index != other.selected_index {
            changes.push(format!(
                "selection: {:?} → {:?}",
                self.selected_index, other.selected_index
            ));
        }
        if self.flipped != other.flipped {
            changes.push(format!("flipped: {}", other.flipped));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_diff() {
        let before = StateSnapshot::from_model(&EditorModel::default());
        let mut after = before.clone();
        assert_eq!(before.diff(&after), None);

        after.focus = FocusState::Navigating;
        after.selected_index = Some(0);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("focus: Editing → Navigating; selection: None → Some(0)")
        );
    }
}
