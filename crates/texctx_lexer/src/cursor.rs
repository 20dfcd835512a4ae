//! Cursor over a sentinel-padded character buffer.
//!
//! Positions are character offsets. Advancing never moves past the source
//! length, so [`Cursor::current`] is always in bounds; lookahead up to the
//! padding width reads NUL sentinels instead of going out of bounds.

/// Copyable cursor; created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source_len..]` holds at least four NUL characters.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [char],
    pos: usize,
    source_len: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [char], source_len: usize) -> Self {
        debug_assert!(source_len < buf.len(), "sentinel must be within buffer bounds");
        debug_assert!(buf[source_len..].iter().all(|&c| c == '\0'), "padding must be NUL");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The character at the current position (`'\0'` at end of input).
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos]
    }

    /// The character `offset` positions ahead.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> char {
        self.buf[self.pos + offset]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` characters, stopping at the end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current character offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the input at the current position starts with `text`.
    ///
    /// Never matches past the end of input.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        let mut offset = 0;
        for expected in text.chars() {
            if self.pos + offset >= self.source_len || self.buf[self.pos + offset] != expected {
                return false;
            }
            offset += 1;
        }
        true
    }

    /// Count the characters from `offset` onward that satisfy `pred`.
    ///
    /// `pred('\0')` must be `false` so the count stops at the sentinel.
    #[inline]
    pub fn count_while(&self, offset: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = self.pos + offset;
        while pred(self.buf[end]) {
            end += 1;
        }
        end - self.pos - offset
    }

    /// The characters in `[pos + from, pos + to)`.
    #[inline]
    pub fn lookahead(&self, from: usize, to: usize) -> &'a [char] {
        &self.buf[self.pos + from..self.pos + to]
    }
}
