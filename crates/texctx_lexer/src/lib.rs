//! Context tokenizer for prose containing math and code regions.
//!
//! Scans a document for the delimiters that switch between prose, math and
//! code (`$$`, `$`, ```` ``` ````, `` ` ``, `\name{`, `{`, `}`) and produces a
//! [`TokenStream`](texctx_ir::TokenStream): the boundary tokens in document
//! order plus the pair each of them belongs to.
//!
//! Matching is fused into the scan. Which characters are delimiters depends
//! on what is currently open, so the tokenizer keeps the open stack anyway
//! and attaches every closing token to its pair as soon as it is produced.
//!
//! # Usage
//!
//! ```
//! use texctx_commands::CommandTable;
//! use texctx_lexer::tokenize;
//!
//! let stream = tokenize("value $x^{2}$ here", CommandTable::builtin());
//! assert_eq!(stream.len(), 2);
//! assert!(stream.pairs()[0].is_complete());
//! ```

mod cursor;
mod delimiter;
mod source_buffer;
mod tokenizer;

pub use cursor::Cursor;
pub use delimiter::Delimiter;
pub use source_buffer::SourceBuffer;
pub use tokenizer::{tokenize, tokenize_buffer};
