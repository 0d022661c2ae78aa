//! Edit scripts: the alignment as an ordered list of commands
//!
//! An [`EditScript`] turns the left sequence into the right one when its
//! commands are applied in order:
//! - `Keep(x)`: `x` is in both, copy it through
//! - `Delete(x)`: `x` is only in the left sequence, skip it
//! - `Insert(x)`: `x` is only in the right sequence, emit it
//!
//! Consumers implement [`CommandVisitor`]; each command dispatches to exactly
//! one visitor method through a single `match`.
//!
//! # Example
//! ```
//! use editwise::diff::{edit_script, EditCommand, ScriptApplier};
//!
//! let script = edit_script(&['a', 'b', 'c'], &['a', 'x', 'c']);
//! assert_eq!(script.commands(), &[
//!     EditCommand::Keep('a'),
//!     EditCommand::Delete('b'),
//!     EditCommand::Insert('x'),
//!     EditCommand::Keep('c'),
//! ]);
//!
//! let mut applier = ScriptApplier::new();
//! script.visit(&mut applier);
//! assert_eq!(applier.into_inner(), vec!['a', 'x', 'c']);
//! ```

use crate::algorithms::detailed::{backtrace, Step};
use serde::{Deserialize, Serialize};

/// Kind of an [`EditCommand`], without its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Insert,
    Delete,
    Keep,
}

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditCommand<T> {
    /// Element present only in the right sequence
    Insert(T),
    /// Element present only in the left sequence
    Delete(T),
    /// Element present in both
    Keep(T),
}

impl<T> EditCommand<T> {
    /// Dispatch to the visitor method for this command's kind.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: CommandVisitor<T> + ?Sized,
    {
        match self {
            EditCommand::Insert(el) => visitor.visit_insert(el),
            EditCommand::Delete(el) => visitor.visit_delete(el),
            EditCommand::Keep(el) => visitor.visit_keep(el),
        }
    }

    pub fn element(&self) -> &T {
        match self {
            EditCommand::Insert(el) | EditCommand::Delete(el) | EditCommand::Keep(el) => el,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            EditCommand::Insert(_) => CommandKind::Insert,
            EditCommand::Delete(_) => CommandKind::Delete,
            EditCommand::Keep(_) => CommandKind::Keep,
        }
    }
}

/// Consumer of edit commands, one method per command kind.
pub trait CommandVisitor<T> {
    fn visit_insert(&mut self, element: &T);
    fn visit_delete(&mut self, element: &T);
    fn visit_keep(&mut self, element: &T);
}

/// Ordered edit commands; insertion order is application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript<T> {
    commands: Vec<EditCommand<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<T> EditScript<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: EditCommand<T>) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[EditCommand<T>] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditCommand<T>> {
        self.commands.iter()
    }

    /// Number of Insert and Delete commands.
    pub fn modifications(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| !matches!(c, EditCommand::Keep(_)))
            .count()
    }

    /// Number of Keep commands.
    ///
    /// This is the common subsequence the Levenshtein path happens to
    /// preserve, not necessarily the longest one: substitutions are preferred
    /// on ties, so `ab` -> `ba` keeps nothing.
    pub fn keep_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, EditCommand::Keep(_)))
            .count()
    }

    /// Feed every command to `visitor`, in order.
    pub fn visit<V>(&self, visitor: &mut V)
    where
        V: CommandVisitor<T> + ?Sized,
    {
        for command in &self.commands {
            command.accept(visitor);
        }
    }
}

impl<T> FromIterator<EditCommand<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = EditCommand<T>>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditCommand<T>;
    type IntoIter = std::vec::IntoIter<EditCommand<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditCommand<T>;
    type IntoIter = std::slice::Iter<'a, EditCommand<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Edit script turning `a` into `b` along the optimal Levenshtein
/// alignment.
///
/// Uses the same backtrace and tie-breaks as
/// [`levenshtein_detailed`](crate::algorithms::levenshtein_detailed); a
/// substitution becomes `Delete(old)` followed by `Insert(new)`.
pub fn edit_script<T: PartialEq + Clone>(a: &[T], b: &[T]) -> EditScript<T> {
    let mut reversed: Vec<EditCommand<T>> = Vec::with_capacity(a.len().max(b.len()));
    backtrace(a, b, |step, i, j| match step {
        Step::Keep => reversed.push(EditCommand::Keep(a[i - 1].clone())),
        Step::Substitute => {
            reversed.push(EditCommand::Insert(b[j - 1].clone()));
            reversed.push(EditCommand::Delete(a[i - 1].clone()));
        }
        Step::Delete => reversed.push(EditCommand::Delete(a[i - 1].clone())),
        Step::Insert => reversed.push(EditCommand::Insert(b[j - 1].clone())),
    });
    reversed.into_iter().rev().collect()
}

/// Edit script between two strings, element type `char`.
pub fn edit_script_text(a: &str, b: &str) -> EditScript<char> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    edit_script(&a_chars, &b_chars)
}

/// Rebuilds the right sequence: keeps and inserts are emitted, deletes
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptApplier<T> {
    output: Vec<T>,
}

impl<T> Default for ScriptApplier<T> {
    fn default() -> Self {
        Self { output: Vec::new() }
    }
}

impl<T> ScriptApplier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &[T] {
        &self.output
    }

    pub fn into_inner(self) -> Vec<T> {
        self.output
    }
}

impl<T: Clone> CommandVisitor<T> for ScriptApplier<T> {
    fn visit_insert(&mut self, element: &T) {
        self.output.push(element.clone());
    }

    fn visit_delete(&mut self, _element: &T) {}

    fn visit_keep(&mut self, element: &T) {
        self.output.push(element.clone());
    }
}

/// Tallies commands by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCounter {
    pub inserts: usize,
    pub deletes: usize,
    pub keeps: usize,
}

impl<T> CommandVisitor<T> for CommandCounter {
    fn visit_insert(&mut self, _element: &T) {
        self.inserts += 1;
    }

    fn visit_delete(&mut self, _element: &T) {
        self.deletes += 1;
    }

    fn visit_keep(&mut self, _element: &T) {
        self.keeps += 1;
    }
}
