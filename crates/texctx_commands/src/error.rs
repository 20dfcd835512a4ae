//! Errors raised while building a command table.

/// Why a command table could not be built.
#[derive(Debug, thiserror::Error)]
pub enum CommandTableError {
    /// The JSON document did not describe a list of commands.
    #[error("malformed command table: {0}")]
    Json(#[from] serde_json::Error),

    /// A command with an empty name.
    #[error("command #{index} has an empty name")]
    EmptyName { index: usize },

    /// A name that cannot appear after `\` in a document.
    #[error("command #{index} has invalid name {name:?} (expected ASCII letters, optionally followed by `*`)")]
    InvalidName { index: usize, name: String },

    /// The same name listed twice.
    #[error("command {name:?} is listed more than once")]
    Duplicate { name: String },
}
