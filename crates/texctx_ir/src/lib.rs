//! texctx IR - shared data model for context resolution.
//!
//! This crate contains the plain data types every other `texctx_*` crate
//! speaks:
//! - [`TextSource`] for read-only access to a document snapshot
//! - [`ContextToken`] for the boundary tokens produced by the lexer
//! - [`BoundTokenPair`] for matched opening/closing delimiters
//! - [`TokenStream`] for the flat token sequence plus its pair table
//! - [`MajorContextType`] for the Text/Math/Code reduction of a bound stack
//!
//! Nothing here performs analysis; the lexer (`texctx_lexer`) builds a
//! [`TokenStream`] and the query layer (`texctx_query`) reads it.
//!
//! All positions are zero-based character offsets into the document.

mod source;
mod stream;
mod token;

pub use source::TextSource;
pub use stream::TokenStream;
pub use token::{
    BoundKind, BoundStack, BoundToken, BoundTokenPair, ContextToken, MajorContextType, PairId,
    Position, SelectionRange,
};
