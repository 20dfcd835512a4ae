//! Delimiter vocabulary and the scanning modes it induces.

use texctx_commands::CommandTable;

/// What an opening token opens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `$$`
    DisplayMath,
    /// `$`
    InlineMath,
    /// ```` ``` ````
    DisplayCode,
    /// `` ` ``
    InlineCode,
    /// `\name{` for a table command with at least one argument.
    Command { switches_to_text: bool },
    /// A bare `{` inside math.
    Group,
}

impl Delimiter {
    /// Identify an opening delimiter from its text.
    ///
    /// Returns `None` for text the tokenizer never emits as an opener.
    pub fn from_opener(text: &str, table: &CommandTable) -> Option<Delimiter> {
        match text {
            "$$" => Some(Delimiter::DisplayMath),
            "$" => Some(Delimiter::InlineMath),
            "```" => Some(Delimiter::DisplayCode),
            "`" => Some(Delimiter::InlineCode),
            "{" => Some(Delimiter::Group),
            _ if text.len() > 2 && text.starts_with('\\') && text.ends_with('{') => {
                Some(Delimiter::Command {
                    switches_to_text: table.is_text_opener(text),
                })
            }
            _ => None,
        }
    }

    /// Opening text for delimiters that close on the same glyph.
    ///
    /// Commands and groups close on `}` and have no fixed opener.
    #[inline]
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            Delimiter::DisplayMath => Some("$$"),
            Delimiter::InlineMath => Some("$"),
            Delimiter::DisplayCode => Some("```"),
            Delimiter::InlineCode => Some("`"),
            Delimiter::Command { .. } | Delimiter::Group => None,
        }
    }

    #[inline]
    pub fn is_math(self) -> bool {
        matches!(self, Delimiter::DisplayMath | Delimiter::InlineMath)
    }

    #[inline]
    pub fn is_code(self) -> bool {
        matches!(self, Delimiter::DisplayCode | Delimiter::InlineCode)
    }

    /// Whether `}` closes this delimiter.
    #[inline]
    pub(crate) fn closes_on_brace(self) -> bool {
        matches!(self, Delimiter::Command { .. } | Delimiter::Group)
    }
}

/// Scanning rules in force at the cursor, derived from the open stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Nothing open: look for math and code openers.
    Text,
    /// A `$` opened from prose: closes on `$`, cancelled by a newline.
    InlineMath,
    /// Inside math that allows nesting. `boundary` is the stack depth of the
    /// innermost `$$` or `$` that closes this region.
    Math { boundary: usize },
    /// Inside a text-switching command nested in math.
    TextArgument,
    InlineCode,
    DisplayCode,
}
