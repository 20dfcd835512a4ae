//! Command handlers for the `texctx` CLI.
//!
//! Each handler renders its result to a `String` (a listing, or JSON with
//! `--json`) and leaves printing to `main`. Loading the document and the
//! command table is shared through [`Session`].

use std::borrow::Cow;
use std::io::{self, Read};
use std::path::Path;

use texctx_commands::CommandTable;
use texctx_ir::{SelectionRange, TextSource};
use tracing::debug;

use crate::error::CliError;

mod bounds;
mod major;
mod tokens;

pub use bounds::{bounds, parse_range};
pub use major::major;
pub use tokens::tokens;

/// A loaded document plus everything needed to query it.
pub struct Session {
    doc: String,
    table: Cow<'static, CommandTable>,
    json: bool,
}

impl Session {
    pub fn new(doc: String, table: Cow<'static, CommandTable>, json: bool) -> Self {
        Session { doc, table, json }
    }

    /// Read `file` (`-` for stdin) and the optional command table.
    pub fn load(file: &Path, commands: Option<&Path>, json: bool) -> Result<Self, CliError> {
        let doc = read_source(file)?;
        let table = load_table(commands)?;
        debug!(
            file = %file.display(),
            chars = doc.length(),
            commands = table.len(),
            "loaded document"
        );
        Ok(Session::new(doc, table, json))
    }

    /// Reject ranges that reach past the end of the document.
    fn check_range(&self, range: SelectionRange) -> Result<(), CliError> {
        let len = self.doc.length();
        if range.from.max(range.to) > len {
            return Err(CliError::OutOfBounds {
                from: range.from,
                to: range.to,
                len,
            });
        }
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let read = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_table(path: Option<&Path>) -> Result<Cow<'static, CommandTable>, CliError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(CommandTable::builtin()));
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = CommandTable::from_json(&json).map_err(|source| CliError::CommandTable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Cow::Owned(table))
}
