//! Boundary tokens, bound pairs and the context classification.

use std::borrow::Cow;
use std::fmt;

use crate::TextSource;

/// Zero-based character offset into a document.
pub type Position = usize;

/// Whether a boundary token opens or closes a context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoundKind {
    Opening,
    Closing,
}

/// A delimiter occurrence in the document, e.g. `$`, `` ` `` or `\text{`.
///
/// The delimiter text is never stored; use [`ContextToken::text`] to read it
/// back from the document the token was produced from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContextToken {
    pub from: Position,
    pub to: Position,
    pub kind: BoundKind,
}

impl ContextToken {
    #[inline]
    pub const fn opening(from: Position, to: Position) -> Self {
        ContextToken {
            from,
            to,
            kind: BoundKind::Opening,
        }
    }

    #[inline]
    pub const fn closing(from: Position, to: Position) -> Self {
        ContextToken {
            from,
            to,
            kind: BoundKind::Closing,
        }
    }

    #[inline]
    pub const fn is_opening(&self) -> bool {
        matches!(self.kind, BoundKind::Opening)
    }

    /// The delimiter text as it appears in `doc`.
    pub fn text<'d, S: TextSource + ?Sized>(&self, doc: &'d S) -> Cow<'d, str> {
        doc.slice(self.from, self.to)
    }

    /// The span half of this token.
    #[inline]
    pub const fn span(&self) -> BoundToken {
        BoundToken::new(self.from, self.to)
    }
}

/// The span of one side of a [`BoundTokenPair`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundToken {
    pub from: Position,
    pub to: Position,
}

impl BoundToken {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        BoundToken { from, to }
    }

    pub fn text<'d, S: TextSource + ?Sized>(&self, doc: &'d S) -> Cow<'d, str> {
        doc.slice(self.from, self.to)
    }
}

impl fmt::Debug for BoundToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// An opening delimiter together with the delimiter that closes it.
///
/// `closing` is `None` for contexts that run to the end of the document, and
/// for nested contexts that were still open when an enclosing math context
/// terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundTokenPair {
    pub opening: BoundToken,
    pub closing: Option<BoundToken>,
}

impl BoundTokenPair {
    /// An unterminated pair.
    #[inline]
    pub const fn open(opening: BoundToken) -> Self {
        BoundTokenPair {
            opening,
            closing: None,
        }
    }

    #[inline]
    pub const fn closed(opening: BoundToken, closing: BoundToken) -> Self {
        BoundTokenPair {
            opening,
            closing: Some(closing),
        }
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.closing.is_some()
    }

    #[inline]
    pub const fn is_incomplete(&self) -> bool {
        self.closing.is_none()
    }

    /// Text of the opening delimiter, which identifies the kind of context.
    pub fn opening_text<'d, S: TextSource + ?Sized>(&self, doc: &'d S) -> Cow<'d, str> {
        self.opening.text(doc)
    }
}

/// The pairs enclosing a position, outermost first.
pub type BoundStack = Vec<BoundTokenPair>;

/// Index of a pair inside a [`TokenStream`](crate::TokenStream).
///
/// Bound stacks are compared by pair identity, so two distinct pairs with
/// equal spans never compare equal through their ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairId(usize);

impl PairId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        PairId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Coarse classification of a position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MajorContextType {
    #[default]
    Text,
    Math,
    Code,
}

impl fmt::Display for MajorContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MajorContextType::Text => "text",
            MajorContextType::Math => "math",
            MajorContextType::Code => "code",
        })
    }
}

/// A selection `[from, to]`; a cursor is a collapsed selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectionRange {
    pub from: Position,
    pub to: Position,
}

impl SelectionRange {
    /// Create a range, swapping the ends if they are given backwards.
    #[inline]
    pub fn new(from: Position, to: Position) -> Self {
        SelectionRange {
            from: from.min(to),
            to: from.max(to),
        }
    }

    #[inline]
    pub const fn cursor(at: Position) -> Self {
        SelectionRange { from: at, to: at }
    }

    #[inline]
    pub const fn is_collapsed(&self) -> bool {
        self.from == self.to
    }
}
