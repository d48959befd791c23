//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The controller executes them against the text and popup surfaces.

/// Side effects produced by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Push the model's popup entries and bounds to the popup and show it
    ShowPopup,
    HidePopup,
    /// Move keyboard focus to the popup
    FocusPopup,
    /// Move keyboard focus back to the text surface
    FocusText,
    /// Select a popup entry
    SelectEntry(usize),
    /// Replace the caret line with the entry text
    Commit(String),
    /// Insert text at the caret
    InsertText(String),
    /// Tell the host to skip the key's native handling
    SuppressKey,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if the key that produced this command must not reach the host
    pub fn suppresses_key(&self) -> bool {
        match self {
            Cmd::SuppressKey => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::suppresses_key),
            _ => false,
        }
    }

    /// Flatten nested batches in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
