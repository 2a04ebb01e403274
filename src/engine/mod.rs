pub mod linked;
pub mod names;

pub use linked::Linked;
pub use names::{FuzzyMatcher, Names};

use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parse::{Splitter, Token};
use crate::source::{ArgumentSource, ProcessArgs};

/// Prefixes accepted by [`CommandSequence::fuzzy`] unless configured otherwise.
pub const DEFAULT_PREFIXES: [&str; 2] = ["-", "--"];

/// The user arguments of one invocation, as an ordered sequence of tokens.
///
/// Built once from an [`ArgumentSource`] and read-only afterwards. Every query
/// walks all tokens left to right, calls back for each match, and returns the
/// sequence so queries chain:
///
/// ```
/// use argline::CommandSequence;
///
/// let argv = ["node", "app.js", "-w", "--Port=8080"];
/// let seq = CommandSequence::new(argv).unwrap();
/// let mut port = None;
/// let mut watch = false;
/// seq.fuzzy(["p", "port"], |t| port = t.value().map(String::from))
///     .option("-w", |_| watch = true);
/// assert_eq!(port.as_deref(), Some("8080"));
/// assert!(watch);
/// ```
#[derive(Debug, Clone)]
pub struct CommandSequence {
    exec_path: String,
    file_path: String,
    args: Vec<String>,
    commands: Vec<Token>,
    prefixes: Names,
}

impl CommandSequence {
    /// Build from `source`, splitting arguments on `=`.
    pub fn new(source: impl ArgumentSource) -> Result<Self> {
        Self::build(source, &Splitter::default(), Names::from(DEFAULT_PREFIXES))
    }

    /// Build with the configured split criterion and default fuzzy prefixes.
    pub fn with_config(source: impl ArgumentSource, config: &Config) -> Result<Self> {
        let splitter = config.splitter()?;
        Self::build(source, &splitter, Names::from(config.fuzzy.prefixes.as_slice()))
    }

    /// Build from an explicit split criterion.
    pub fn with_splitter(source: impl ArgumentSource, splitter: &Splitter) -> Result<Self> {
        Self::build(source, splitter, Names::from(DEFAULT_PREFIXES))
    }

    /// Build from the running binary's own arguments.
    pub fn from_env() -> Result<Self> {
        Self::new(ProcessArgs::native())
    }

    fn build(source: impl ArgumentSource, splitter: &Splitter, prefixes: Names) -> Result<Self> {
        let argv = source.argv().ok_or_else(|| {
            Error::SourceUnavailable("it seems not to be running in command-line mode".into())
        })?;

        let mut argv = argv.into_iter();
        let exec_path = argv.next().unwrap_or_default();
        let file_path = argv.next().unwrap_or_default();
        let args: Vec<String> = argv.collect();
        let commands: Vec<Token> = args
            .iter()
            .map(|arg| Token::with_splitter(arg.as_str(), splitter))
            .collect();

        log::debug!(
            "{} argument(s) after {exec_path} {file_path}: {args:?}",
            args.len()
        );

        Ok(Self {
            exec_path,
            file_path,
            args,
            commands,
            prefixes,
        })
    }

    /// Element 0 of the argument source.
    pub fn exec_path(&self) -> &str {
        &self.exec_path
    }

    /// Element 1 of the argument source.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The raw user arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// One token per user argument, in order.
    pub fn commands(&self) -> &[Token] {
        &self.commands
    }

    /// Prefixes used by [`CommandSequence::fuzzy`].
    pub fn prefixes(&self) -> &Names {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Linked<'_>> {
        (index < self.commands.len()).then(|| Linked::new(self, index))
    }

    pub fn first(&self) -> Option<Linked<'_>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Linked<'_>> {
        self.commands.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Linked<'_>> {
        (0..self.commands.len()).map(move |i| Linked::new(self, i))
    }

    /// Call `callback` for every token satisfying `predicate`, in argument order.
    pub fn valid<P, F>(&self, mut predicate: P, mut callback: F) -> &Self
    where
        P: FnMut(&Linked<'_>) -> bool,
        F: FnMut(Linked<'_>),
    {
        let mut hits = 0usize;
        for token in self.iter() {
            if predicate(&token) {
                hits += 1;
                callback(token);
            }
        }
        log::trace!("{hits} of {} token(s) matched", self.commands.len());
        self
    }

    /// Like [`CommandSequence::valid`], but the first callback error stops
    /// iteration and is returned.
    pub fn try_valid<P, F, E>(
        &self,
        mut predicate: P,
        mut callback: F,
    ) -> std::result::Result<&Self, E>
    where
        P: FnMut(&Linked<'_>) -> bool,
        F: FnMut(Linked<'_>) -> std::result::Result<(), E>,
    {
        for token in self.iter() {
            if predicate(&token) {
                callback(token)?;
            }
        }
        Ok(self)
    }

    /// Match tokens whose command equals one of `names` exactly.
    pub fn option<F>(&self, names: impl Into<Names>, callback: F) -> &Self
    where
        F: FnMut(Linked<'_>),
    {
        let names = names.into();
        log::trace!("option {names:?}");
        self.valid(|t| names.contains(t.command()), callback)
    }

    /// Match tokens whose command satisfies `pattern`.
    pub fn matches<F>(&self, pattern: &Regex, callback: F) -> &Self
    where
        F: FnMut(Linked<'_>),
    {
        log::trace!("match /{pattern}/");
        self.valid(|t| pattern.is_match(t.command()), callback)
    }

    /// Fuzzy match against this sequence's default prefixes (`-` and `--` unless configured).
    pub fn fuzzy<F>(&self, names: impl Into<Names>, callback: F) -> &Self
    where
        F: FnMut(Linked<'_>),
    {
        let prefixes = self.prefixes.clone();
        self.fuzzy_with(names, prefixes, callback)
    }

    /// Match tokens whose command is one of `prefixes` followed by one of
    /// `names`, ignoring the case of the name but not of the prefix.
    pub fn fuzzy_with<F>(
        &self,
        names: impl Into<Names>,
        prefixes: impl Into<Names>,
        callback: F,
    ) -> &Self
    where
        F: FnMut(Linked<'_>),
    {
        let (names, prefixes) = (names.into(), prefixes.into());
        log::trace!("fuzzy {names:?} with prefixes {prefixes:?}");
        let matcher = FuzzyMatcher::new(&names, &prefixes);
        self.valid(|t| matcher.is_match(t.command()), callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(line: &str) -> CommandSequence {
        CommandSequence::new(crate::source::CommandLine::new(line)).unwrap()
    }

    #[test]
    fn paths_and_args_partition() {
        let s = seq("node currentFile -w -p=123");
        assert_eq!(s.exec_path(), "node");
        assert_eq!(s.file_path(), "currentFile");
        assert_eq!(s.args(), ["-w", "-p=123"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn no_user_arguments() {
        let s = seq("node currentFile");
        assert!(s.args().is_empty());
        assert!(s.commands().is_empty());
        assert!(s.first().is_none());
        assert!(s.last().is_none());
    }

    #[test]
    fn short_argv_leaves_paths_empty() {
        let s = CommandSequence::new(["node"]).unwrap();
        assert_eq!(s.exec_path(), "node");
        assert_eq!(s.file_path(), "");
        assert!(s.is_empty());
    }

    #[test]
    fn missing_source_is_an_error() {
        struct Nowhere;
        impl ArgumentSource for Nowhere {
            fn argv(&self) -> Option<Vec<String>> {
                None
            }
        }
        assert!(matches!(
            CommandSequence::new(Nowhere),
            Err(Error::SourceUnavailable(_))
        ));
    }

    #[test]
    fn tokens_follow_args() {
        let s = seq("node f -w -p=123 -f=tt");
        let commands: Vec<&str> = s.commands().iter().map(Token::command).collect();
        assert_eq!(commands, ["-w", "-p", "-f"]);
        for (token, arg) in s.commands().iter().zip(s.args()) {
            assert_eq!(token.raw(), arg);
        }
    }

    #[test]
    fn links() {
        let s = seq("node f -w -p=123 -f=tt");
        assert_eq!(s.get(0).unwrap().next(), s.get(1));
        assert_eq!(s.get(1).unwrap().next(), s.get(2));
        assert_eq!(s.get(2).unwrap().next(), None);

        assert_eq!(s.get(0).unwrap().previous(), None);
        assert_eq!(s.get(1).unwrap().previous(), s.get(0));
        assert_eq!(s.get(2).unwrap().previous(), s.get(1));
        assert!(s.get(3).is_none());
    }

    #[test]
    fn single_token_has_no_neighbours() {
        let s = seq("node f -w");
        let only = s.first().unwrap();
        assert_eq!(s.last(), Some(only));
        assert!(only.previous().is_none());
        assert!(only.next().is_none());
    }

    #[test]
    fn linked_identity_is_per_sequence() {
        let a = seq("node f -w");
        let b = a.clone();
        assert_ne!(a.first(), b.first());
        assert_eq!(a.first().unwrap().token(), b.first().unwrap().token());
    }

    #[test]
    fn valid_counts() {
        let s = seq("node f -w -p=123");
        let mut all = 0;
        s.valid(|_| true, |_| all += 1);
        assert_eq!(all, 2);

        let mut none = 0;
        s.valid(|_| false, |_| none += 1);
        assert_eq!(none, 0);
    }

    #[test]
    fn valid_callback_sees_neighbours() {
        let s = seq("node f -w -p=123");
        let mut seen = false;
        s.valid(
            |t| t.command() == "-p",
            |t| {
                assert_eq!(t.value(), Some("123"));
                assert_eq!(t.previous().map(|p| p.token().command()), Some("-w"));
                assert!(t.next().is_none());
                seen = true;
            },
        );
        assert!(seen);
    }

    #[test]
    fn valid_visits_in_argument_order() {
        let s = seq("node f c a b");
        let mut order = Vec::new();
        s.valid(|_| true, |t| order.push(t.index()));
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn try_valid_propagates_first_error() {
        let s = seq("node f -a -b -c");
        let mut visited = Vec::new();
        let result = s.try_valid(
            |_| true,
            |t| {
                visited.push(t.command().to_string());
                if t.command() == "-b" {
                    Err(format!("bad {}", t.raw()))
                } else {
                    Ok(())
                }
            },
        );
        assert_eq!(result.unwrap_err(), "bad -b");
        assert_eq!(visited, ["-a", "-b"]);
    }

    #[test]
    fn try_valid_ok_returns_self() {
        let s = seq("node f -a");
        let r: std::result::Result<&CommandSequence, ()> = s.try_valid(|_| true, |_| Ok(()));
        assert!(std::ptr::eq(r.unwrap(), &s));
    }

    #[test]
    fn custom_splitter() {
        let s = CommandSequence::with_splitter(["node", "f", "-p:8080"], &Splitter::from(":"))
            .unwrap();
        assert_eq!(s.commands()[0].command(), "-p");
        assert_eq!(s.commands()[0].value(), Some("8080"));
    }

    #[test]
    fn with_config_uses_configured_prefixes() {
        let mut config = Config::default_config();
        config.fuzzy.prefixes = vec!["/".into()];
        let s = CommandSequence::with_config(["cmd", "cmd", "/V", "-v"], &config).unwrap();
        let mut hits = Vec::new();
        s.fuzzy("v", |t| hits.push(t.raw().to_string()));
        assert_eq!(hits, ["/V"]);
    }

    #[test]
    fn with_config_rejects_bad_pattern() {
        let mut config = Config::default_config();
        config.split.pattern = "[".into();
        assert!(matches!(
            CommandSequence::with_config(["a", "b"], &config),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn from_env_reads_process() {
        let s = CommandSequence::from_env().unwrap();
        assert!(!s.exec_path().is_empty());
        assert_eq!(s.exec_path(), s.file_path());
    }

    #[test]
    fn sequence_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandSequence>();
    }
}
