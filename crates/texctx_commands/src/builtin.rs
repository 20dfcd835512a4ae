//! Default command set.
//!
//! A MathJax-flavoured subset: every command here takes at least one brace
//! argument, plus a handful of argument-less commands so lookups of common
//! symbols resolve to an entry. `(name, argument_count, takes_text_argument)`.

pub(crate) const BUILTIN_COMMANDS: &[(&str, u32, bool)] = &[
    // Prose inside math
    ("text", 1, true),
    ("textrm", 1, true),
    ("textit", 1, true),
    ("textbf", 1, true),
    ("textsf", 1, true),
    ("texttt", 1, true),
    ("textup", 1, true),
    ("textnormal", 1, true),
    ("mbox", 1, true),
    ("hbox", 1, true),
    ("fbox", 1, true),
    // Fractions and binomials
    ("frac", 2, false),
    ("dfrac", 2, false),
    ("tfrac", 2, false),
    ("cfrac", 2, false),
    ("binom", 2, false),
    ("dbinom", 2, false),
    ("tbinom", 2, false),
    // Roots
    ("sqrt", 1, false),
    // Font switches
    ("mathrm", 1, false),
    ("mathit", 1, false),
    ("mathbf", 1, false),
    ("mathsf", 1, false),
    ("mathtt", 1, false),
    ("mathcal", 1, false),
    ("mathbb", 1, false),
    ("mathfrak", 1, false),
    ("mathscr", 1, false),
    ("boldsymbol", 1, false),
    ("bm", 1, false),
    ("operatorname", 1, false),
    ("operatorname*", 1, false),
    // Accents and decorations
    ("hat", 1, false),
    ("widehat", 1, false),
    ("tilde", 1, false),
    ("widetilde", 1, false),
    ("bar", 1, false),
    ("vec", 1, false),
    ("dot", 1, false),
    ("ddot", 1, false),
    ("overline", 1, false),
    ("underline", 1, false),
    ("overbrace", 1, false),
    ("underbrace", 1, false),
    ("overset", 2, false),
    ("underset", 2, false),
    ("stackrel", 2, false),
    ("cancel", 1, false),
    ("boxed", 1, false),
    // Environments and colour
    ("begin", 1, false),
    ("end", 1, false),
    ("color", 1, false),
    ("textcolor", 2, false),
    ("phantom", 1, false),
    // Argument-less
    ("alpha", 0, false),
    ("beta", 0, false),
    ("gamma", 0, false),
    ("pi", 0, false),
    ("infty", 0, false),
    ("sum", 0, false),
    ("int", 0, false),
    ("left", 0, false),
    ("right", 0, false),
    ("cdot", 0, false),
    ("quad", 0, false),
];
