//! Stack reconstructor: replay a token stream up to resolved indices.

use smallvec::SmallVec;
use texctx_ir::{BoundStack, PairId, TokenStream};

/// Open pairs at a point, outermost first.
pub(crate) type PairStack = SmallVec<[PairId; 8]>;

/// The bound stack in force before each of the given token indices.
///
/// Pairs are returned as recorded in the stream, so a pair that closes
/// after the index still carries its closing token.
///
/// # Panics
///
/// Panics if `indices` is not sorted or exceeds the stream length, or if
/// the stream closes a pair that is not open.
pub fn bound_stacks_at(stream: &TokenStream, indices: &[usize]) -> Vec<BoundStack> {
    pair_stacks_at(stream, indices)
        .iter()
        .map(|stack| stack.iter().map(|&id| *stream.pair(id)).collect())
        .collect()
}

/// Replay `stream` once, snapshotting the open pairs at every index.
pub(crate) fn pair_stacks_at(stream: &TokenStream, indices: &[usize]) -> Vec<PairStack> {
    assert!(
        indices.windows(2).all(|w| w[0] <= w[1]),
        "token indices must be sorted: {indices:?}"
    );
    assert!(
        indices.last().map_or(true, |&last| last <= stream.len()),
        "token index out of range for a stream of {} tokens",
        stream.len()
    );

    let mut snapshots = Vec::with_capacity(indices.len());
    let mut pending = indices.iter().copied().peekable();
    let mut open = PairStack::new();

    for (index, (token, pair)) in stream.iter().enumerate() {
        while pending.next_if_eq(&index).is_some() {
            snapshots.push(open.clone());
        }
        if pending.peek().is_none() {
            break;
        }
        if token.is_opening() {
            open.push(pair);
            continue;
        }
        // Pairs above the closed one were abandoned by it.
        let Some(depth) = open.iter().rposition(|&id| id == pair) else {
            panic!(
                "closing token {}..{} has no open pair (open: {open:?})",
                token.from, token.to
            );
        };
        open.truncate(depth);
    }
    // Whatever remains sits at the end of the stream.
    for _ in pending {
        snapshots.push(open.clone());
    }
    snapshots
}
