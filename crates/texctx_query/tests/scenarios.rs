//! Pinned resolution scenarios.
//!
//! Offsets are written as the character length of a literal document
//! prefix, so each expectation reads as "the bound starts right after this
//! text".

use pretty_assertions::assert_eq;
use texctx_commands::CommandTable;
use texctx_ir::{BoundStack, BoundToken, BoundTokenPair, MajorContextType, SelectionRange};
use texctx_query::{context_at, context_bounds_at_selection};

/// Character offset just after `prefix`.
fn at(prefix: &str) -> usize {
    prefix.chars().count()
}

fn cursor(prefix: &str) -> SelectionRange {
    SelectionRange::cursor(at(prefix))
}

fn range(from: &str, to: &str) -> SelectionRange {
    SelectionRange::new(at(from), at(to))
}

/// A complete pair given by the four prefixes bounding its delimiters.
fn pair(open_from: &str, open_to: &str, close_from: &str, close_to: &str) -> BoundTokenPair {
    BoundTokenPair::closed(
        BoundToken::new(at(open_from), at(open_to)),
        BoundToken::new(at(close_from), at(close_to)),
    )
}

fn resolve(doc: &str, ranges: &[SelectionRange]) -> Vec<BoundStack> {
    context_bounds_at_selection(doc, CommandTable::builtin(), ranges)
}

// ─── Prose ─────────────────────────────────────────────────────

#[test]
fn no_bounds_in_plain_text() {
    let doc = "this is just a bunch of text";
    assert_eq!(
        resolve(doc, &[SelectionRange::cursor(3), SelectionRange::new(7, 10)]),
        vec![vec![], vec![]]
    );
}

// ─── Inline math ───────────────────────────────────────────────

#[test]
fn inline_math() {
    let doc = "simple math $1 + 1 = 2$, nicely formatted\n";
    let bound = pair(
        "simple math ",
        "simple math $",
        "simple math $1 + 1 = 2",
        "simple math $1 + 1 = 2$",
    );
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("simple math"),
                range("simple math $1 + ", "simple math $1 + 1 ="),
                cursor("simple math $1 + 1 = 2$, nicely"),
            ]
        ),
        vec![vec![], vec![bound], vec![]]
    );
}

#[test]
fn inline_math_delimiter_edges() {
    let doc = "simple math $1 + 1 = 2$, nicely formatted\n";
    let bound = pair(
        "simple math ",
        "simple math $",
        "simple math $1 + 1 = 2",
        "simple math $1 + 1 = 2$",
    );
    assert_eq!(
        resolve(
            doc,
            &[
                // before the opening `$`
                cursor("simple math "),
                // right after it
                cursor("simple math $"),
                // right before the closing `$`
                cursor("simple math $1 + 1 = 2"),
                // right after it
                cursor("simple math $1 + 1 = 2$"),
            ]
        ),
        vec![vec![], vec![bound], vec![bound], vec![]]
    );
}

#[test]
fn multiple_inline_math_blocks() {
    let doc = "math 1 $1 + 1 = 2$ followed by math 2 $1 - 1 = 0$";
    assert_eq!(
        resolve(
            doc,
            &[
                range("math 1 $1 + 1", "math 1 $1 + 1 ="),
                range(
                    "math 1 $1 + 1 = 2$ followed by math 2 $1 -",
                    "math 1 $1 + 1 = 2$ followed by math 2 $1 - 1 =",
                ),
            ]
        ),
        vec![
            vec![pair("math 1 ", "math 1 $", "math 1 $1 + 1 = 2", "math 1 $1 + 1 = 2$")],
            vec![pair(
                "math 1 $1 + 1 = 2$ followed by math 2 ",
                "math 1 $1 + 1 = 2$ followed by math 2 $",
                "math 1 $1 + 1 = 2$ followed by math 2 $1 - 1 = 0",
                "math 1 $1 + 1 = 2$ followed by math 2 $1 - 1 = 0$",
            )],
        ]
    );
}

#[test]
fn newline_cancels_inline_math() {
    let doc = "just talking $ here\n$\n\n";
    assert_eq!(
        resolve(
            doc,
            &[cursor("just talking $"), cursor("just talking $ here\n$\n")]
        ),
        vec![vec![], vec![]]
    );
}

#[test]
fn escaped_dollar_before_inline_math() {
    let doc = "little bit of \\$ munny and $some math$ afterwards";
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("little bit of \\$ munny"),
                cursor("little bit of \\$ munny and $some"),
            ]
        ),
        vec![
            vec![],
            vec![pair(
                "little bit of \\$ munny and ",
                "little bit of \\$ munny and $",
                "little bit of \\$ munny and $some math",
                "little bit of \\$ munny and $some math$",
            )],
        ]
    );
}

#[test]
fn escaped_dollar_inside_inline_math() {
    let doc = "little bit of $math with \\$ munny$ here";
    let bound = pair(
        "little bit of ",
        "little bit of $",
        "little bit of $math with \\$ munny",
        "little bit of $math with \\$ munny$",
    );
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("little bit of $math"),
                cursor("little bit of $math with \\$ mun"),
            ]
        ),
        vec![vec![bound], vec![bound]]
    );
}

// ─── Display math ──────────────────────────────────────────────

#[test]
fn display_math() {
    let doc = "display math:\n$$\n1 + 1 = 2\n$$\nnicely formatted";
    assert_eq!(
        resolve(
            doc,
            &[range("display math:\n$$\n1 + ", "display math:\n$$\n1 + 1 =")]
        ),
        vec![vec![pair(
            "display math:\n",
            "display math:\n$$",
            "display math:\n$$\n1 + 1 = 2\n",
            "display math:\n$$\n1 + 1 = 2\n$$",
        )]]
    );
}

#[test]
fn multiple_display_math_blocks() {
    let doc = "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$1 - 1 = 0$$";
    assert_eq!(
        resolve(
            doc,
            &[
                range("math 1:\n$$1 + 1", "math 1:\n$$1 + 1 ="),
                range(
                    "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$1 -",
                    "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$1 - 1 =",
                ),
            ]
        ),
        vec![
            vec![pair(
                "math 1:\n",
                "math 1:\n$$",
                "math 1:\n$$1 + 1 = 2",
                "math 1:\n$$1 + 1 = 2$$",
            )],
            vec![pair(
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$1 - 1 = 0",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2:\n$$1 - 1 = 0$$",
            )],
        ]
    );
}

#[test]
fn mixed_inline_and_display_math() {
    let doc = "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $1 - 1 = 0$";
    assert_eq!(
        resolve(
            doc,
            &[
                range("math 1:\n$$1 + 1", "math 1:\n$$1 + 1 ="),
                range(
                    "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $1 -",
                    "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $1 - 1 =",
                ),
            ]
        ),
        vec![
            vec![pair(
                "math 1:\n",
                "math 1:\n$$",
                "math 1:\n$$1 + 1 = 2",
                "math 1:\n$$1 + 1 = 2$$",
            )],
            vec![pair(
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 ",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $1 - 1 = 0",
                "math 1:\n$$1 + 1 = 2$$\nfollowed by math 2 $1 - 1 = 0$",
            )],
        ]
    );
}

#[test]
fn range_across_two_blocks_has_no_common_bound() {
    let doc = "math 1 $1 + 1 = 2$ followed by math 2 $1 - 1 = 0$";
    assert_eq!(
        resolve(
            doc,
            &[range(
                "math 1 $1 + 1",
                "math 1 $1 + 1 = 2$ followed by math 2 $1 -"
            )]
        ),
        vec![vec![]]
    );
}

// ─── Text inside display math ──────────────────────────────────

#[test]
fn text_inside_display_math() {
    let doc = "$$\na := \\text{text and stuff}\n$$";
    let bounds = [
        pair(
            "",
            "$$",
            "$$\na := \\text{text and stuff}\n",
            "$$\na := \\text{text and stuff}\n$$",
        ),
        pair(
            "$$\na := ",
            "$$\na := \\text{",
            "$$\na := \\text{text and stuff",
            "$$\na := \\text{text and stuff}",
        ),
    ];
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("$$\na :="),
                cursor("$$\na := \\text{text"),
                cursor("$$\na := \\text{text and stuff}\n"),
            ]
        ),
        vec![bounds[..1].to_vec(), bounds[..2].to_vec(), bounds[..1].to_vec()]
    );
}

#[test]
fn nested_math_inside_text_inside_display_math() {
    let doc = "$$\na := \\text{text and $b = e$ and stuff}\n$$";
    let bounds = [
        pair(
            "",
            "$$",
            "$$\na := \\text{text and $b = e$ and stuff}\n",
            "$$\na := \\text{text and $b = e$ and stuff}\n$$",
        ),
        pair(
            "$$\na := ",
            "$$\na := \\text{",
            "$$\na := \\text{text and $b = e$ and stuff",
            "$$\na := \\text{text and $b = e$ and stuff}",
        ),
        pair(
            "$$\na := \\text{text and ",
            "$$\na := \\text{text and $",
            "$$\na := \\text{text and $b = e",
            "$$\na := \\text{text and $b = e$",
        ),
    ];
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("$$\na :="),
                cursor("$$\na := \\text{text"),
                cursor("$$\na := \\text{text and $b ="),
                cursor("$$\na := \\text{text and $b = e$ and"),
                cursor("$$\na := \\text{text and $b = e$ and stuff}\n"),
            ]
        ),
        vec![
            bounds[..1].to_vec(),
            bounds[..2].to_vec(),
            bounds[..3].to_vec(),
            bounds[..2].to_vec(),
            bounds[..1].to_vec(),
        ]
    );
}

#[test]
fn deeply_nested_math_and_text() {
    let doc = "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff}\n$$";
    let bounds = [
        pair(
            "",
            "$$",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff}\n",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff}\n$$",
        ),
        pair(
            "$$\na := ",
            "$$\na := \\text{",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff}",
        ),
        pair(
            "$$\na := \\text{text and ",
            "$$\na := \\text{text and $",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$",
        ),
        pair(
            "$$\na := \\text{text and $b = ",
            "$$\na := \\text{text and $b = \\text{",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever}",
        ),
        pair(
            "$$\na := \\text{text and $b = \\text{more stuff and ",
            "$$\na := \\text{text and $b = \\text{more stuff and $",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d",
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$",
        ),
    ];
    let ranges = [
        cursor("$$\na :="),
        cursor("$$\na := \\text{text"),
        cursor("$$\na := \\text{text and $b ="),
        cursor("$$\na := \\text{text and $b = \\text{more "),
        cursor("$$\na := \\text{text and $b = \\text{more stuff and $c +"),
        cursor("$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and"),
        cursor("$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} +"),
        cursor("$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and"),
        cursor(
            "$$\na := \\text{text and $b = \\text{more stuff and $c + d$ and whatever} + e$ and stuff}\n",
        ),
    ];
    let depths = [1, 2, 3, 4, 5, 4, 3, 2, 1];
    let expected: Vec<BoundStack> = depths.iter().map(|&d| bounds[..d].to_vec()).collect();
    assert_eq!(resolve(doc, &ranges), expected);

    let majors: Vec<MajorContextType> = ranges
        .iter()
        .map(|r| context_at(doc, CommandTable::builtin(), r.from).0)
        .collect();
    assert_eq!(
        majors,
        vec![
            MajorContextType::Math,
            MajorContextType::Text,
            MajorContextType::Math,
            MajorContextType::Text,
            MajorContextType::Math,
            MajorContextType::Text,
            MajorContextType::Math,
            MajorContextType::Text,
            MajorContextType::Math,
        ]
    );
}

// ─── Code ──────────────────────────────────────────────────────

#[test]
fn inline_code() {
    let doc = "code `abc`, nicely formatted\n";
    assert_eq!(
        resolve(
            doc,
            &[
                cursor("code "),
                range("code `a", "code `abc"),
                cursor("code `abc`, nicely"),
            ]
        ),
        vec![
            vec![],
            vec![pair("code ", "code `", "code `abc", "code `abc`")],
            vec![],
        ]
    );
}

#[test]
fn display_code() {
    let doc = "display code:\n```\nabc\n```\nnicely formatted";
    assert_eq!(
        resolve(
            doc,
            &[range("display code:\n```\na", "display code:\n```\nab")]
        ),
        vec![vec![pair(
            "display code:\n",
            "display code:\n```",
            "display code:\n```\nabc\n",
            "display code:\n```\nabc\n```",
        )]]
    );
}

#[test]
fn inline_code_closed_by_newline() {
    let doc = "run `ls\nthen $x$";
    let code = pair("run ", "run `", "run `ls", "run `ls\n");
    assert_eq!(
        resolve(doc, &[cursor("run `l"), cursor("run `ls\nth")]),
        vec![vec![code], vec![]]
    );
    assert_eq!(
        context_at(doc, CommandTable::builtin(), at("run `ls\nthen $")).0,
        MajorContextType::Math
    );
}

// ─── Irregular documents ───────────────────────────────────────

#[test]
fn unterminated_display_math() {
    let doc = "intro $$ a + b";
    let bound = BoundTokenPair::open(BoundToken::new(at("intro "), at("intro $$")));
    assert_eq!(
        resolve(doc, &[cursor("intro $$ a"), SelectionRange::cursor(at(doc))]),
        vec![vec![bound], vec![bound]]
    );
}

#[test]
fn abandoned_command_argument() {
    let doc = "$$\\frac{a$$ after";
    let display = pair("", "$$", "$$\\frac{a", "$$\\frac{a$$");
    let frac = BoundTokenPair::open(BoundToken::new(at("$$"), at("$$\\frac{")));
    assert_eq!(
        resolve(doc, &[cursor("$$\\frac{"), cursor("$$\\frac{a$$ af")]),
        vec![vec![display, frac], vec![]]
    );
}

#[test]
fn offsets_count_characters() {
    let doc = "ünïcödé $α + β$ text";
    assert_eq!(
        resolve(doc, &[cursor("ünïcödé $α")]),
        vec![vec![pair("ünïcödé ", "ünïcödé $", "ünïcödé $α + β", "ünïcödé $α + β$")]]
    );
}

#[test]
fn string_and_str_sources_agree() {
    let text = String::from("see $x$ and `y`");
    let ranges = [SelectionRange::cursor(5), SelectionRange::cursor(13)];
    assert_eq!(
        context_bounds_at_selection(&text, CommandTable::builtin(), &ranges),
        resolve(text.as_str(), &ranges)
    );
}
