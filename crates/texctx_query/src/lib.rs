//! Context queries over a tokenized document.
//!
//! Given a [`TokenStream`](texctx_ir::TokenStream) and any number of query
//! positions, this crate answers "which contexts enclose this point" and
//! "which contexts enclose this whole selection" in one combined pass:
//!
//! 1. [`resolve_positions`] bisects all positions against the token sequence
//!    at once, shrinking the search window as it recurses.
//! 2. [`bound_stacks_at`] replays the tokens a single time, snapshotting the
//!    open pairs at every resolved index.
//! 3. [`context_bounds_in_stream`] keeps, per range, the longest common
//!    prefix of its two endpoint stacks.
//!
//! [`major_type`] then reduces a stack to Text, Math or Code.
//!
//! ```
//! use texctx_commands::CommandTable;
//! use texctx_ir::{MajorContextType, SelectionRange};
//! use texctx_query::{context_bounds_at_selection, major_type};
//!
//! let doc = "area $\\pi r^2$ here";
//! let table = CommandTable::builtin();
//! let stacks = context_bounds_at_selection(doc, table, &[SelectionRange::cursor(8)]);
//! assert_eq!(stacks[0].len(), 1);
//! assert_eq!(major_type(doc, table, &stacks[0]).0, MajorContextType::Math);
//! ```

mod bisect;
mod classify;
mod range;
mod replay;

pub use bisect::{is_past, resolve_positions};
pub use classify::{context_at, major_type};
pub use range::{context_bounds_at_selection, context_bounds_in_stream};
pub use replay::bound_stacks_at;
