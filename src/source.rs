//! Argument sources: where the raw invocation list comes from.
//!
//! A source supplies the full ordered list: element 0 is the executable path,
//! element 1 the invoked script or file, elements 2.. the user arguments.

use crate::parse::tokenize;

/// Supplies the raw invocation list, or `None` when the environment has none.
pub trait ArgumentSource {
    fn argv(&self) -> Option<Vec<String>>;
}

impl ArgumentSource for Vec<String> {
    fn argv(&self) -> Option<Vec<String>> {
        Some(self.clone())
    }
}

impl ArgumentSource for [&str] {
    fn argv(&self) -> Option<Vec<String>> {
        Some(self.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> ArgumentSource for [&str; N] {
    fn argv(&self) -> Option<Vec<String>> {
        self.as_slice().argv()
    }
}

impl<S: ArgumentSource + ?Sized> ArgumentSource for &S {
    fn argv(&self) -> Option<Vec<String>> {
        (**self).argv()
    }
}

/// A whole invocation line, split into words with shell quoting rules.
#[derive(Debug, Clone)]
pub struct CommandLine(pub String);

impl CommandLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }
}

impl ArgumentSource for CommandLine {
    fn argv(&self) -> Option<Vec<String>> {
        Some(tokenize(&self.0))
    }
}

/// The arguments of the running process.
///
/// Non-UTF-8 arguments are converted lossily.
#[derive(Debug, Clone, Copy)]
pub struct ProcessArgs {
    native: bool,
}

impl ProcessArgs {
    /// Arguments of a compiled binary: argv carries no separate script element,
    /// so the executable path doubles as the file path.
    pub fn native() -> Self {
        Self { native: true }
    }

    /// Arguments already laid out as interpreter, script, arguments.
    pub fn interpreted() -> Self {
        Self { native: false }
    }
}

impl ArgumentSource for ProcessArgs {
    fn argv(&self) -> Option<Vec<String>> {
        let mut argv: Vec<String> = std::env::args_os()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        if argv.is_empty() {
            return None;
        }
        if self.native {
            let exec = argv[0].clone();
            argv.insert(1, exec);
        }
        Some(argv)
    }
}
