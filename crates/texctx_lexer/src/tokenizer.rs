//! Hand-written context tokenizer with a fused bound matcher.
//!
//! The tokenizer walks the document one lexical unit at a time. The rules in
//! force at each step come from the innermost open delimiter (see [`Mode`]),
//! so only that delimiter's rules decide what may close it and the emitted
//! pairs are always properly nested. Each open delimiter records its mode
//! when pushed, so a step costs the same at any nesting depth.
//!
//! # Design
//!
//! Every step dispatches on the current character and consumes at least one
//! character. Openers are pushed onto a small inline stack and recorded in
//! the [`TokenStream`] immediately; closers attach to their pair as they are
//! produced, so no separate matching pass exists.
//!
//! Three irregularities are handled in place rather than reported:
//! - a newline inside prose-level `$...$` retracts the `$` entirely;
//! - a newline closes inline code, becoming the closing token itself;
//! - when a math region closes, nested commands and groups that are still
//!   open are abandoned and stay unterminated pairs.

use smallvec::SmallVec;
use texctx_commands::CommandTable;
use texctx_ir::{PairId, TextSource, TokenStream};
use tracing::trace;

use crate::delimiter::{Delimiter, Mode};
use crate::{Cursor, SourceBuffer};

/// Tokenize a document against a command table.
pub fn tokenize<S: TextSource + ?Sized>(doc: &S, table: &CommandTable) -> TokenStream {
    let buffer = SourceBuffer::from_source(doc);
    tokenize_buffer(&buffer, table)
}

/// Tokenize an already snapshotted document.
#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
pub fn tokenize_buffer(buffer: &SourceBuffer, table: &CommandTable) -> TokenStream {
    let stream = Tokenizer::new(buffer.cursor(), table).run();
    tracing::debug!(
        tokens = stream.len(),
        pairs = stream.pairs().len(),
        unterminated = stream.pairs().iter().filter(|p| p.is_incomplete()).count(),
        "tokenized"
    );
    stream
}

/// An open delimiter on the tokenizer stack.
#[derive(Copy, Clone, Debug)]
struct OpenBound {
    pair: PairId,
    delimiter: Delimiter,
    /// Scanning mode while this is the innermost open delimiter.
    mode: Mode,
}

struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    table: &'a CommandTable,
    stack: SmallVec<[OpenBound; 8]>,
    stream: TokenStream,
    /// Scratch buffer for command-name lookups.
    name: String,
}

impl<'a> Tokenizer<'a> {
    fn new(cursor: Cursor<'a>, table: &'a CommandTable) -> Self {
        Tokenizer {
            cursor,
            table,
            stack: SmallVec::new(),
            stream: TokenStream::new(),
            name: String::new(),
        }
    }

    fn run(mut self) -> TokenStream {
        while !self.cursor.is_eof() {
            match self.mode() {
                Mode::Text => self.text(),
                Mode::InlineMath => self.inline_math(),
                Mode::Math { boundary } => self.math(boundary),
                Mode::TextArgument => self.text_argument(),
                Mode::InlineCode => self.inline_code(),
                Mode::DisplayCode => self.display_code(),
            }
        }
        self.stream
    }

    /// The scanning mode in force at the cursor.
    #[inline]
    fn mode(&self) -> Mode {
        self.stack.last().map_or(Mode::Text, |top| top.mode)
    }

    /// The mode a newly pushed `delimiter` puts the tokenizer in.
    ///
    /// Commands and groups keep the mode of the region they open in, so
    /// each entry only looks at the one below it.
    fn mode_inside(&self, delimiter: Delimiter) -> Mode {
        let depth = self.stack.len();
        match delimiter {
            Delimiter::InlineCode => Mode::InlineCode,
            Delimiter::DisplayCode => Mode::DisplayCode,
            Delimiter::InlineMath if depth == 0 => Mode::InlineMath,
            Delimiter::InlineMath | Delimiter::DisplayMath => Mode::Math { boundary: depth },
            Delimiter::Command {
                switches_to_text: true,
            } => Mode::TextArgument,
            Delimiter::Command { .. } | Delimiter::Group => match self.mode() {
                // A prose-level `$` sits at the bottom of the stack.
                Mode::InlineMath => Mode::Math { boundary: 0 },
                parent => parent,
            },
        }
    }

    // ─── Modes ─────────────────────────────────────────────────────

    fn text(&mut self) {
        match self.cursor.current() {
            '\\' => self.escape(),
            '$' if self.cursor.starts_with("$$") => self.open(Delimiter::DisplayMath, 2),
            '$' => self.open(Delimiter::InlineMath, 1),
            '`' if self.cursor.starts_with("```") => self.open(Delimiter::DisplayCode, 3),
            '`' => self.open(Delimiter::InlineCode, 1),
            _ => self.cursor.advance(),
        }
    }

    fn inline_math(&mut self) {
        match self.cursor.current() {
            '\\' => self.escape(),
            '\n' => self.cancel_inline_math(),
            '$' => self.close_top(1),
            _ => self.cursor.advance(),
        }
    }

    fn math(&mut self, boundary: usize) {
        match self.cursor.current() {
            '\\' => {
                if let Some((len, switches_to_text)) = self.command_opener() {
                    self.open(Delimiter::Command { switches_to_text }, len);
                } else {
                    self.escape();
                }
                return;
            }
            '{' => {
                self.open(Delimiter::Group, 1);
                return;
            }
            '}' if self.top_closes_on_brace() => {
                self.close_top(1);
                return;
            }
            _ => {}
        }

        let closer = self.stack[boundary].delimiter.fixed_text().unwrap_or("$");
        if self.cursor.starts_with(closer) {
            self.close_boundary(boundary, closer.len());
        } else {
            self.cursor.advance();
        }
    }

    fn text_argument(&mut self) {
        match self.cursor.current() {
            '\\' => self.escape(),
            '$' => self.open(Delimiter::InlineMath, 1),
            '}' => self.close_top(1),
            _ => self.cursor.advance(),
        }
    }

    fn inline_code(&mut self) {
        match self.cursor.current() {
            '\\' => self.escape(),
            '`' | '\n' => self.close_top(1),
            _ => self.cursor.advance(),
        }
    }

    fn display_code(&mut self) {
        match self.cursor.current() {
            '\\' => self.escape(),
            '`' if self.cursor.starts_with("```") => self.close_top(3),
            _ => self.cursor.advance(),
        }
    }

    // ─── Lexical units ─────────────────────────────────────────────

    /// `\` plus any one character: never a delimiter.
    #[inline]
    fn escape(&mut self) {
        self.cursor.advance_n(2);
    }

    /// Match `\name{` (or `\name*{`) for a table command with arguments.
    ///
    /// Returns the opener length and whether the command switches to text.
    fn command_opener(&mut self) -> Option<(usize, bool)> {
        let letters = self.cursor.count_while(1, |c| c.is_ascii_alphabetic());
        if letters == 0 {
            return None;
        }
        self.name.clear();
        self.name.extend(self.cursor.lookahead(1, 1 + letters));

        let mut after = 1 + letters;
        if self.cursor.peek_at(after) == '*' && self.cursor.peek_at(after + 1) == '{' {
            self.name.push('*');
            if self.table.opens_argument(&self.name) {
                after += 1;
            } else {
                return None;
            }
        }
        if self.cursor.peek_at(after) != '{' || !self.table.opens_argument(&self.name) {
            return None;
        }
        Some((after + 1, self.table.switches_to_text(&self.name)))
    }

    // ─── Stack operations ──────────────────────────────────────────

    fn top_closes_on_brace(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|top| top.delimiter.closes_on_brace())
    }

    fn open(&mut self, delimiter: Delimiter, len: usize) {
        let from = self.cursor.pos();
        let pair = self.stream.push_opening(from, from + len);
        let mode = self.mode_inside(delimiter);
        trace!(?delimiter, ?mode, from, to = from + len, depth = self.stack.len(), "open");
        self.stack.push(OpenBound {
            pair,
            delimiter,
            mode,
        });
        self.cursor.advance_n(len);
    }

    /// Close the innermost open delimiter with a token of `len` characters.
    fn close_top(&mut self, len: usize) {
        let from = self.cursor.pos();
        let Some(open) = self.stack.pop() else {
            panic!("closing delimiter at {from} with no open bound");
        };
        self.stream.push_closing(open.pair, from, from + len);
        trace!(delimiter = ?open.delimiter, from, to = from + len, "close");
        self.cursor.advance_n(len);
    }

    /// Close the math boundary at `boundary`, abandoning anything above it.
    fn close_boundary(&mut self, boundary: usize, len: usize) {
        for abandoned in self.stack.drain(boundary + 1..) {
            trace!(
                delimiter = ?abandoned.delimiter,
                pair = abandoned.pair.index(),
                at = self.cursor.pos(),
                "abandon"
            );
        }
        self.close_top(len);
    }

    /// A newline inside prose-level `$`: the `$` never opened anything.
    fn cancel_inline_math(&mut self) {
        if let Some(open) = self.stack.pop() {
            trace!(pair = open.pair.index(), at = self.cursor.pos(), "cancel");
            self.stream.retract(open.pair);
        }
        self.cursor.advance();
    }
}
