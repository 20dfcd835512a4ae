//! Major-type classifier.

use texctx_commands::CommandTable;
use texctx_ir::{BoundTokenPair, MajorContextType, Position, SelectionRange, TextSource};
use texctx_lexer::Delimiter;

use crate::context_bounds_at_selection;

/// Reduce a bound stack to Text, Math or Code.
///
/// Folds the stack outermost first. Math and code delimiters switch out of
/// text, a text-switching command switches out of math, and every other
/// pair leaves the classification alone. Returns the classification with
/// the pair that last changed it, or `None` if the stack never left text.
pub fn major_type<S: TextSource + ?Sized>(
    doc: &S,
    table: &CommandTable,
    stack: &[BoundTokenPair],
) -> (MajorContextType, Option<BoundTokenPair>) {
    let mut major = MajorContextType::Text;
    let mut active = None;
    for pair in stack {
        let Some(delimiter) = Delimiter::from_opener(&pair.opening_text(doc), table) else {
            continue;
        };
        let next = match (major, delimiter) {
            (
                MajorContextType::Math,
                Delimiter::Command {
                    switches_to_text: true,
                },
            ) => MajorContextType::Text,
            (MajorContextType::Text, d) if d.is_math() => MajorContextType::Math,
            (MajorContextType::Text, d) if d.is_code() => MajorContextType::Code,
            _ => continue,
        };
        major = next;
        active = Some(*pair);
    }
    (major, active)
}

/// Classify the context at a single cursor position.
pub fn context_at<S: TextSource + ?Sized>(
    doc: &S,
    table: &CommandTable,
    position: Position,
) -> (MajorContextType, Option<BoundTokenPair>) {
    let stacks = context_bounds_at_selection(doc, table, &[SelectionRange::cursor(position)]);
    let stack = stacks.first().map_or(&[][..], Vec::as_slice);
    major_type(doc, table, stack)
}
