use std::fmt;
use std::ops::Deref;

use super::CommandSequence;
use crate::parse::Token;

/// A token seen from its position inside a [`CommandSequence`].
///
/// Neighbours are index lookups, so `previous()` of the first token and
/// `next()` of the last are `None`. Equality is identity: same sequence,
/// same position.
#[derive(Clone, Copy)]
pub struct Linked<'a> {
    sequence: &'a CommandSequence,
    index: usize,
}

impl<'a> Linked<'a> {
    pub(crate) fn new(sequence: &'a CommandSequence, index: usize) -> Self {
        Self { sequence, index }
    }

    /// Position within the sequence's commands.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn token(&self) -> &'a Token {
        &self.sequence.commands()[self.index]
    }

    pub fn previous(&self) -> Option<Linked<'a>> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.sequence.get(i))
    }

    pub fn next(&self) -> Option<Linked<'a>> {
        self.sequence.get(self.index + 1)
    }
}

impl Deref for Linked<'_> {
    type Target = Token;

    fn deref(&self) -> &Token {
        self.token()
    }
}

impl PartialEq for Linked<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sequence, other.sequence) && self.index == other.index
    }
}

impl Eq for Linked<'_> {}

impl fmt::Debug for Linked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linked")
            .field("index", &self.index)
            .field("token", self.token())
            .finish()
    }
}
