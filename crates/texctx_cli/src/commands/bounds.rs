//! `texctx bounds`: the bound stack enclosing each range.

use std::borrow::Cow;
use std::fmt::Write;

use serde::Serialize;
use texctx_ir::{BoundToken, BoundTokenPair, SelectionRange};
use texctx_query::context_bounds_at_selection;

use super::Session;
use crate::error::CliError;

#[derive(Serialize)]
struct BoundRow<'a> {
    text: Cow<'a, str>,
    opening: BoundToken,
    closing: Option<BoundToken>,
}

#[derive(Serialize)]
struct RangeReport<'a> {
    range: SelectionRange,
    bounds: Vec<BoundRow<'a>>,
}

/// Parse `FROM` or `FROM:TO` into a range.
pub fn parse_range(arg: &str) -> Result<SelectionRange, CliError> {
    let malformed = || CliError::MalformedRange(arg.to_owned());
    let parse = |s: &str| s.trim().parse::<usize>().map_err(|_| malformed());
    match arg.split_once(':') {
        None => Ok(SelectionRange::cursor(parse(arg)?)),
        Some((from, to)) => Ok(SelectionRange::new(parse(from)?, parse(to)?)),
    }
}

pub fn bounds(session: &Session, ranges: &[SelectionRange]) -> Result<String, CliError> {
    for &range in ranges {
        session.check_range(range)?;
    }
    let doc = session.doc.as_str();
    let stacks = context_bounds_at_selection(doc, &session.table, ranges);
    let reports: Vec<RangeReport<'_>> = ranges
        .iter()
        .zip(stacks)
        .map(|(&range, stack)| RangeReport {
            range,
            bounds: stack.iter().map(|pair| row(doc, pair)).collect(),
        })
        .collect();

    if session.json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    let mut out = String::new();
    for report in &reports {
        let range = report.range;
        let _ = if range.is_collapsed() {
            writeln!(out, "{}", range.from)
        } else {
            writeln!(out, "{}:{}", range.from, range.to)
        };
        if report.bounds.is_empty() {
            let _ = writeln!(out, "  (no enclosing bounds)");
        }
        for (depth, bound) in report.bounds.iter().enumerate() {
            let closing = bound
                .closing
                .map_or_else(|| "unterminated".to_owned(), |c| format!("{c:?}"));
            let _ = writeln!(
                out,
                "  {depth}: {:?} {:?} -> {closing}",
                bound.text, bound.opening
            );
        }
    }
    Ok(out)
}

fn row<'a>(doc: &'a str, pair: &BoundTokenPair) -> BoundRow<'a> {
    BoundRow {
        text: pair.opening_text(doc),
        opening: pair.opening,
        closing: pair.closing,
    }
}
