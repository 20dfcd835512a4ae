//! Math command table.
//!
//! The lexer only needs two facts about LaTeX-style commands: whether
//! `\name{` opens an argument group, and whether that group switches back to
//! prose (`\text{...}`). Both come from a [`CommandTable`], which callers
//! build from their own data, load from JSON, or take from
//! [`CommandTable::builtin`].

mod builtin;
mod error;
mod table;

pub use error::CommandTableError;
pub use table::{CommandSpec, CommandTable};
