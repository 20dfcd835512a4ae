//! Command descriptors and the lookup table built from them.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::builtin::BUILTIN_COMMANDS;
use crate::CommandTableError;

/// One math command, e.g. `frac` with two arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Name without the leading backslash.
    #[serde(alias = "command")]
    pub name: String,
    /// Number of brace arguments; absent means none.
    #[serde(default)]
    pub argument_count: Option<u32>,
    /// Whether the first argument is typeset as prose (`\text{...}`).
    #[serde(default)]
    pub takes_text_argument: bool,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, argument_count: Option<u32>, takes_text_argument: bool) -> Self {
        CommandSpec {
            name: name.into(),
            argument_count,
            takes_text_argument,
        }
    }

    /// Whether `\name{` opens an argument group.
    #[inline]
    pub fn opens_argument(&self) -> bool {
        self.argument_count.unwrap_or(0) > 0
    }
}

/// Ordered, name-indexed set of [`CommandSpec`]s.
///
/// Read-only once built; one table can serve any number of concurrent
/// tokenizer runs.
#[derive(Clone, Debug, Default)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
    by_name: FxHashMap<String, usize>,
}

impl CommandTable {
    /// Build a table, validating every name.
    pub fn new(specs: impl IntoIterator<Item = CommandSpec>) -> Result<Self, CommandTableError> {
        let mut table = CommandTable::default();
        for (index, spec) in specs.into_iter().enumerate() {
            validate_name(index, &spec.name)?;
            if table.by_name.contains_key(&spec.name) {
                return Err(CommandTableError::Duplicate { name: spec.name });
            }
            table.by_name.insert(spec.name.clone(), table.commands.len());
            table.commands.push(spec);
        }
        tracing::debug!(
            commands = table.commands.len(),
            with_arguments = table.commands.iter().filter(|c| c.opens_argument()).count(),
            "built command table"
        );
        Ok(table)
    }

    /// A table with no commands: only bare `{` groups are recognised.
    pub fn empty() -> Self {
        CommandTable::default()
    }

    /// Load a table from a JSON array of command objects.
    ///
    /// ```text
    /// [{ "name": "frac", "argument_count": 2 },
    ///  { "name": "text", "argument_count": 1, "takes_text_argument": true }]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CommandTableError> {
        let specs: Vec<CommandSpec> = serde_json::from_str(json)?;
        CommandTable::new(specs)
    }

    /// The default MathJax-flavoured table, built once per process.
    pub fn builtin() -> &'static CommandTable {
        static BUILTIN: OnceLock<CommandTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut table = CommandTable::default();
            for &(name, argument_count, takes_text_argument) in BUILTIN_COMMANDS {
                debug_assert!(validate_name(0, name).is_ok(), "invalid builtin {name}");
                table.by_name.insert(name.to_owned(), table.commands.len());
                table.commands.push(CommandSpec::new(
                    name,
                    (argument_count > 0).then_some(argument_count),
                    takes_text_argument,
                ));
            }
            table
        })
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.by_name.get(name).map(|&index| &self.commands[index])
    }

    /// Whether `\name{` opens an argument group.
    #[inline]
    pub fn opens_argument(&self, name: &str) -> bool {
        self.get(name).is_some_and(CommandSpec::opens_argument)
    }

    /// Whether `\name{` switches from math back to text.
    #[inline]
    pub fn switches_to_text(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|spec| spec.opens_argument() && spec.takes_text_argument)
    }

    /// Whether an opening delimiter such as `\text{` belongs to a
    /// text-switching command.
    pub fn is_text_opener(&self, opener: &str) -> bool {
        opener_name(opener).is_some_and(|name| self.switches_to_text(name))
    }

    /// Commands in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> + '_ {
        self.commands.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// The command name inside an opener: `\text{` -> `text`.
fn opener_name(opener: &str) -> Option<&str> {
    opener.strip_prefix('\\')?.strip_suffix('{')
}

fn validate_name(index: usize, name: &str) -> Result<(), CommandTableError> {
    if name.is_empty() {
        return Err(CommandTableError::EmptyName { index });
    }
    let letters = name.strip_suffix('*').unwrap_or(name);
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CommandTableError::InvalidName {
            index,
            name: name.to_owned(),
        });
    }
    Ok(())
}
