//! Split criterion locating the command/value boundary inside one argument.

use regex::Regex;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "=";

/// The literal string or regex that separates an argument's command from its value.
///
/// Only the first occurrence counts. The separator itself is discarded from
/// both halves, whatever its length.
#[derive(Debug, Clone)]
pub enum Splitter {
    /// Case-sensitive substring search.
    Literal(String),
    /// First regex match. Case-insensitivity comes from the regex (`(?i)`).
    Pattern(Regex),
}

impl Splitter {
    /// Byte range of the first separator occurrence in `raw`, if any.
    fn locate(&self, raw: &str) -> Option<(usize, usize)> {
        match self {
            Splitter::Literal(sep) => raw.find(sep.as_str()).map(|i| (i, i + sep.len())),
            Splitter::Pattern(re) => re.find(raw).map(|m| (m.start(), m.end())),
        }
    }

    /// Split `raw` into `(command, value)`.
    ///
    /// Without an occurrence the whole string is the command and there is no value.
    pub fn split<'a>(&self, raw: &'a str) -> (&'a str, Option<&'a str>) {
        match self.locate(raw) {
            Some((start, end)) => (&raw[..start], Some(&raw[end..])),
            None => (raw, None),
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter::Literal(DEFAULT_SEPARATOR.to_string())
    }
}

impl From<&str> for Splitter {
    fn from(sep: &str) -> Self {
        Splitter::Literal(sep.to_string())
    }
}

impl From<String> for Splitter {
    fn from(sep: String) -> Self {
        Splitter::Literal(sep)
    }
}

impl From<char> for Splitter {
    fn from(sep: char) -> Self {
        Splitter::Literal(sep.to_string())
    }
}

impl From<Regex> for Splitter {
    fn from(re: Regex) -> Self {
        Splitter::Pattern(re)
    }
}
