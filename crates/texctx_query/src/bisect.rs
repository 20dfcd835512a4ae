//! Position resolver: map query positions onto token indices.
//!
//! The resolved index of a position is the number of tokens that lie
//! entirely before it, as decided by [`is_past`]. All positions are resolved
//! together by divide and conquer: the middle position is bisected against
//! the current token window, then each half of the positions recurses into
//! the part of the window on its own side of the found index.

use texctx_ir::{BoundKind, ContextToken, Position};

/// Whether `token` lies before `position`.
///
/// A position that interrupts a boundary token is outside the region that
/// token bounds. For an opening token this means the position must reach
/// the token's end to be inside; for a closing token any position after the
/// token's start is already past it.
#[inline]
pub fn is_past(token: &ContextToken, position: Position) -> bool {
    match token.kind {
        BoundKind::Opening => position >= token.to,
        BoundKind::Closing => position > token.from,
    }
}

/// Resolve every position to the index of the first token not past it.
///
/// # Panics
///
/// Panics if `positions` is not sorted in ascending order.
pub fn resolve_positions(tokens: &[ContextToken], positions: &[Position]) -> Vec<usize> {
    assert!(
        positions.windows(2).all(|w| w[0] <= w[1]),
        "query positions must be sorted: {positions:?}"
    );
    let mut indices = vec![0; positions.len()];
    resolve_into(tokens, 0, positions, &mut indices);
    indices
}

fn resolve_into(tokens: &[ContextToken], base: usize, positions: &[Position], out: &mut [usize]) {
    if positions.is_empty() {
        return;
    }
    let mid = positions.len() / 2;
    let found = tokens.partition_point(|t| is_past(t, positions[mid]));
    out[mid] = base + found;

    let (left, rest) = out.split_at_mut(mid);
    resolve_into(&tokens[..found], base, &positions[..mid], left);
    resolve_into(&tokens[found..], base + found, &positions[mid + 1..], &mut rest[1..]);
}
