//! CLI error type.

use std::io;
use std::path::PathBuf;

use texctx_commands::CommandTableError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot load command table {}: {source}", path.display())]
    CommandTable {
        path: PathBuf,
        #[source]
        source: CommandTableError,
    },

    #[error("malformed range {0:?}: expected FROM or FROM:TO")]
    MalformedRange(String),

    #[error("range {from}:{to} is outside the document (length {len})")]
    OutOfBounds { from: usize, to: usize, len: usize },

    #[error("cannot encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
