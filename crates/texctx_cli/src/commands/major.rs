//! `texctx major`: classify a single position.

use serde::Serialize;
use texctx_ir::{BoundTokenPair, MajorContextType, Position, SelectionRange};
use texctx_query::context_at;

use super::Session;
use crate::error::CliError;

#[derive(Serialize)]
struct MajorReport {
    position: Position,
    major: MajorContextType,
    active: Option<BoundTokenPair>,
}

pub fn major(session: &Session, at: Position) -> Result<String, CliError> {
    session.check_range(SelectionRange::cursor(at))?;
    let doc = session.doc.as_str();
    let (major, active) = context_at(doc, &session.table, at);

    if session.json {
        let report = MajorReport {
            position: at,
            major,
            active,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(match active {
        Some(pair) => format!(
            "{major} (opened by {:?} at {:?})\n",
            pair.opening_text(doc),
            pair.opening
        ),
        None => format!("{major}\n"),
    })
}
