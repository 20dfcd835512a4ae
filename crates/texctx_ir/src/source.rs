//! Read-only access to a document snapshot.

use std::borrow::Cow;

/// A read-only document: a length and substring extraction, both measured
/// in characters.
///
/// The method is named `length` rather than `len` so it never collides with
/// the byte-based `str::len`.
pub trait TextSource {
    /// Number of characters in the document.
    fn length(&self) -> usize;

    /// Characters in `[from, to)`.
    ///
    /// Out-of-range bounds are clamped to the document, so asking for a
    /// delimiter that would run past the end yields a shorter string.
    fn slice(&self, from: usize, to: usize) -> Cow<'_, str>;

    /// Returns `true` if the document has no characters.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

/// Byte offset of the `pos`-th character, or `s.len()` past the end.
fn char_to_byte(s: &str, pos: usize) -> usize {
    s.char_indices().nth(pos).map_or(s.len(), |(byte, _)| byte)
}

impl TextSource for str {
    fn length(&self) -> usize {
        self.chars().count()
    }

    fn slice(&self, from: usize, to: usize) -> Cow<'_, str> {
        if from >= to {
            return Cow::Borrowed("");
        }
        let start = char_to_byte(self, from);
        let end = start + char_to_byte(&self[start..], to - from);
        Cow::Borrowed(&self[start..end])
    }
}

impl TextSource for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn slice(&self, from: usize, to: usize) -> Cow<'_, str> {
        self.as_str().slice(from, to)
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn slice(&self, from: usize, to: usize) -> Cow<'_, str> {
        (**self).slice(from, to)
    }
}
