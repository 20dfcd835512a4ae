//! Range resolver: the contexts enclosing whole selections.

use texctx_commands::CommandTable;
use texctx_ir::{BoundStack, Position, SelectionRange, TextSource, TokenStream};
use texctx_lexer::tokenize;
use tracing::debug;

use crate::bisect::resolve_positions;
use crate::replay::{pair_stacks_at, PairStack};

/// Tokenize `doc` and resolve the bound stack enclosing each range.
///
/// Returns one stack per range, outermost first, in the order the ranges
/// were given.
#[tracing::instrument(level = "debug", skip_all, fields(len = doc.length(), ranges = ranges.len()))]
pub fn context_bounds_at_selection<S: TextSource + ?Sized>(
    doc: &S,
    table: &CommandTable,
    ranges: &[SelectionRange],
) -> Vec<BoundStack> {
    let stream = tokenize(doc, table);
    context_bounds_in_stream(&stream, ranges)
}

/// Resolve the bound stack enclosing each range against a tokenized document.
///
/// Ranges may be given in any order and with either end first.
pub fn context_bounds_in_stream(stream: &TokenStream, ranges: &[SelectionRange]) -> Vec<BoundStack> {
    // (position, slot): slot 2k is the start of range k, 2k + 1 its end.
    let mut endpoints: Vec<(Position, usize)> = Vec::with_capacity(ranges.len() * 2);
    for (k, range) in ranges.iter().enumerate() {
        endpoints.push((range.from.min(range.to), 2 * k));
        endpoints.push((range.from.max(range.to), 2 * k + 1));
    }
    endpoints.sort_unstable();

    let positions: Vec<Position> = endpoints.iter().map(|&(p, _)| p).collect();
    let indices = resolve_positions(stream.tokens(), &positions);
    let snapshots = pair_stacks_at(stream, &indices);

    let mut by_slot = vec![PairStack::new(); endpoints.len()];
    for (&(_, slot), snapshot) in endpoints.iter().zip(snapshots) {
        by_slot[slot] = snapshot;
    }

    let stacks: Vec<BoundStack> = by_slot
        .chunks_exact(2)
        .map(|ends| {
            let shared = longest_common_prefix(&ends[0], &ends[1]);
            ends[0][..shared].iter().map(|&id| *stream.pair(id)).collect()
        })
        .collect();
    debug!(
        deepest = stacks.iter().map(Vec::len).max().unwrap_or(0),
        "resolved selection bounds"
    );
    stacks
}

/// Length of the longest common prefix of `a` and `b`.
pub(crate) fn longest_common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
