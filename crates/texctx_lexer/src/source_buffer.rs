//! Sentinel-terminated character buffer for the tokenizer.
//!
//! The document is snapshotted once into a `Vec<char>` so that character
//! offsets index directly. [`PADDING`] NUL characters follow the content,
//! which lets the cursor look a few characters ahead without bounds checks:
//! a NUL never starts or continues a delimiter.
//!
//! # Interior NULs
//!
//! A NUL inside the document is an ordinary character. End of input is
//! decided by comparing the position against the source length, never by
//! looking at the character.

use std::borrow::Cow;

use texctx_ir::TextSource;

use crate::Cursor;

/// Number of NUL characters appended after the content.
///
/// The longest lookahead the tokenizer performs past a run that stops at
/// the first sentinel is two characters (`*{` after a command name).
pub(crate) const PADDING: usize = 4;

/// Snapshot of a document as characters plus sentinel padding.
///
/// ```text
/// [chars..., '\0', '\0', '\0', '\0']
///  ^         ^
///  0         source_len
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<char>,
    source_len: usize,
}

impl SourceBuffer {
    /// Snapshot a string.
    pub fn new(source: &str) -> Self {
        let mut buf: Vec<char> = source.chars().collect();
        let source_len = buf.len();
        buf.resize(source_len + PADDING, '\0');
        SourceBuffer { buf, source_len }
    }

    /// Snapshot any text source.
    pub fn from_source<S: TextSource + ?Sized>(doc: &S) -> Self {
        SourceBuffer::new(&doc.slice(0, doc.length()))
    }

    /// Create a [`Cursor`] positioned at character 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the document in characters.
    pub fn len(&self) -> usize {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl TextSource for SourceBuffer {
    fn length(&self) -> usize {
        self.source_len
    }

    fn slice(&self, from: usize, to: usize) -> Cow<'_, str> {
        let to = to.min(self.source_len);
        let from = from.min(to);
        Cow::Owned(self.buf[from..to].iter().collect())
    }
}
