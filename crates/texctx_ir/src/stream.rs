//! Flat boundary-token sequence with its matched pair table.

use crate::{BoundToken, BoundTokenPair, ContextToken, PairId, Position};

/// The lexer's output: tokens in increasing `from` order, plus one
/// [`BoundTokenPair`] per opening token.
///
/// Each token records the pair it belongs to (`owners[i]`). Replaying the
/// stream therefore never has to guess which open pair a closing token
/// terminates, even when nested pairs were abandoned without a closing
/// token of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<ContextToken>,
    /// Parallel to `tokens`: the pair each token opens or closes.
    owners: Vec<PairId>,
    pairs: Vec<BoundTokenPair>,
}

impl TokenStream {
    /// Create a new empty stream.
    #[inline]
    pub fn new() -> Self {
        TokenStream {
            tokens: Vec::new(),
            owners: Vec::new(),
            pairs: Vec::new(),
        }
    }

    /// Append an opening token and start a new, still unterminated pair.
    pub fn push_opening(&mut self, from: Position, to: Position) -> PairId {
        debug_assert!(from < to, "empty opening token {from}..{to}");
        self.debug_assert_ordered(from);
        let id = PairId::new(self.pairs.len());
        self.tokens.push(ContextToken::opening(from, to));
        self.owners.push(id);
        self.pairs.push(BoundTokenPair::open(BoundToken::new(from, to)));
        id
    }

    /// Append a closing token terminating `pair`.
    ///
    /// # Panics
    ///
    /// Panics if `pair` does not exist or is already closed: a closing token
    /// must always match exactly one open pair.
    pub fn push_closing(&mut self, pair: PairId, from: Position, to: Position) {
        debug_assert!(from < to, "empty closing token {from}..{to}");
        self.debug_assert_ordered(from);
        let Some(entry) = self.pairs.get_mut(pair.index()) else {
            panic!("closing token {from}..{to} refers to unknown pair {pair:?}");
        };
        assert!(
            entry.is_incomplete(),
            "closing token {from}..{to} for already closed pair {pair:?}",
        );
        entry.closing = Some(BoundToken::new(from, to));
        self.tokens.push(ContextToken::closing(from, to));
        self.owners.push(pair);
    }

    /// Retract `pair` as if it had never been opened, together with every
    /// token and pair recorded after its opening token.
    pub fn retract(&mut self, pair: PairId) {
        let Some(entry) = self.pairs.get(pair.index()) else {
            panic!("cannot retract unknown pair {pair:?}");
        };
        let opening_from = entry.opening.from;
        let first = self.tokens.partition_point(|t| t.from < opening_from);
        debug_assert_eq!(self.owners.get(first), Some(&pair));
        self.tokens.truncate(first);
        self.owners.truncate(first);
        self.pairs.truncate(pair.index());
    }

    #[inline]
    pub fn tokens(&self) -> &[ContextToken] {
        &self.tokens
    }

    #[inline]
    pub fn pairs(&self) -> &[BoundTokenPair] {
        &self.pairs
    }

    /// The pair with the given id.
    #[inline]
    pub fn pair(&self, id: PairId) -> &BoundTokenPair {
        &self.pairs[id.index()]
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(token, owning pair)` in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContextToken, PairId)> + '_ {
        self.tokens.iter().zip(self.owners.iter().copied())
    }

    #[inline]
    fn debug_assert_ordered(&self, from: Position) {
        debug_assert!(
            self.tokens.last().map_or(true, |last| last.to <= from),
            "token at {from} overlaps or precedes the previous token",
        );
    }
}
