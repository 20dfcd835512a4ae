//! `texctx tokens`: dump the boundary tokens of a document.

use std::borrow::Cow;
use std::fmt::Write;

use serde::Serialize;
use texctx_ir::ContextToken;
use texctx_lexer::tokenize;

use super::Session;
use crate::error::CliError;

#[derive(Serialize)]
struct TokenRow<'a> {
    #[serde(flatten)]
    token: ContextToken,
    pair: usize,
    text: Cow<'a, str>,
}

pub fn tokens(session: &Session) -> Result<String, CliError> {
    let stream = tokenize(session.doc.as_str(), &session.table);
    let rows: Vec<TokenRow<'_>> = stream
        .iter()
        .map(|(token, pair)| TokenRow {
            token: *token,
            pair: pair.index(),
            text: token.text(session.doc.as_str()),
        })
        .collect();

    if session.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(
            out,
            "{}..{} {:?} {:?} (pair {})",
            row.token.from, row.token.to, row.token.kind, row.text, row.pair
        );
    }
    let unterminated = stream.pairs().iter().filter(|p| p.is_incomplete()).count();
    let _ = writeln!(
        out,
        "{} tokens, {} pairs, {} unterminated",
        stream.len(),
        stream.pairs().len(),
        unterminated
    );
    Ok(out)
}
