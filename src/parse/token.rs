use serde::Serialize;

use super::split::Splitter;

/// One command-line argument decomposed into a command and an optional value.
///
/// `-p=123` becomes command `-p` and value `123`; `-p` alone has no value.
/// A token is immutable once built. Its neighbours are only reachable through
/// a [`CommandSequence`](crate::engine::CommandSequence), see
/// [`Linked`](crate::engine::Linked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    raw: String,
    command: String,
    value: Option<String>,
}

impl Token {
    /// Split `raw` on the default `=` separator.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_splitter(raw, &Splitter::default())
    }

    /// Split `raw` on the first occurrence of `splitter`.
    pub fn with_splitter(raw: impl Into<String>, splitter: &Splitter) -> Self {
        let raw = raw.into();
        let (command, value) = splitter.split(&raw);
        let command = command.to_string();
        let value = value.map(String::from);
        Self {
            raw,
            command,
            value,
        }
    }

    /// The argument exactly as it was given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text before the separator, or the whole argument.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Text after the separator.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}
