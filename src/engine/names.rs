//! Name sets and the matchers the exact and fuzzy queries are built from.

/// One option name or several. Built from a single string or any list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names(Vec<String>);

impl Names {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<&String> for Names {
    fn from(name: &String) -> Self {
        Self(vec![name.clone()])
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Self::from(names.as_slice())
    }
}

impl<const N: usize> From<&[&str; N]> for Names {
    fn from(names: &[&str; N]) -> Self {
        Self::from(names.as_slice())
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Self::from(names.as_slice())
    }
}

impl From<&[String]> for Names {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl FromIterator<String> for Names {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Case- and prefix-tolerant option matcher.
///
/// A command matches when, for some accepted prefix and name, the lower-cased
/// command equals `prefix + lowercase(name)` and the original command starts
/// with that prefix verbatim. Prefixes are never case-normalized.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    names: Vec<String>,
    prefixes: Vec<String>,
}

impl FuzzyMatcher {
    pub fn new(names: &Names, prefixes: &Names) -> Self {
        Self {
            names: names.iter().map(str::to_lowercase).collect(),
            prefixes: prefixes.iter().map(String::from).collect(),
        }
    }

    /// `lowered` with `prefix` removed equals the already lower-cased `name`.
    pub fn name_matches(lowered: &str, prefix: &str, name: &str) -> bool {
        lowered.strip_prefix(prefix) == Some(name)
    }

    /// `command` literally begins with `prefix`.
    pub fn prefix_matches(command: &str, prefix: &str) -> bool {
        command.starts_with(prefix)
    }

    pub fn is_match(&self, command: &str) -> bool {
        let lowered = command.to_lowercase();
        self.prefixes.iter().any(|prefix| {
            Self::prefix_matches(command, prefix)
                && self
                    .names
                    .iter()
                    .any(|name| Self::name_matches(&lowered, prefix, name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(names: impl Into<Names>, prefixes: impl Into<Names>) -> FuzzyMatcher {
        FuzzyMatcher::new(&names.into(), &prefixes.into())
    }

    #[test]
    fn names_from_single_and_many() {
        assert_eq!(Names::from("-p").len(), 1);
        assert_eq!(Names::from(["-p", "--port"]).len(), 2);
        assert_eq!(Names::from(vec!["a".to_string()]).len(), 1);
        assert!(Names::from(&["-p", "--port"]).contains("--port"));
        assert!(!Names::from("-p").contains("-P"));
    }

    #[test]
    fn name_check_ignores_case_only_after_lowering() {
        assert!(FuzzyMatcher::name_matches("--port", "--", "port"));
        assert!(!FuzzyMatcher::name_matches("--port", "-", "port"));
        assert!(!FuzzyMatcher::name_matches("--port", "--", "p"));
    }

    #[test]
    fn prefix_check_is_verbatim() {
        assert!(FuzzyMatcher::prefix_matches("--Port", "--"));
        assert!(!FuzzyMatcher::prefix_matches("/Port", "/p"));
        assert!(FuzzyMatcher::prefix_matches("/pPort", "/p"));
    }

    #[test]
    fn case_insensitive_name() {
        let m = matcher(["p", "port"], ["-", "--"]);
        assert!(m.is_match("-p"));
        assert!(m.is_match("-P"));
        assert!(m.is_match("--Port"));
        assert!(m.is_match("--PORT"));
        assert!(!m.is_match("---port"));
        assert!(!m.is_match("port"));
    }

    #[test]
    fn upper_case_names_are_lowered() {
        assert!(matcher("PORT", "--").is_match("--port"));
    }

    #[test]
    fn lettered_prefix_is_not_case_normalized() {
        let m = matcher("ort", "/p");
        assert!(m.is_match("/pORT"));
        assert!(!m.is_match("/PORT"));

        // a lower-cased command never starts with an upper-case prefix
        let m = matcher("name", "X");
        assert!(!m.is_match("Xname"));
        assert!(!m.is_match("xname"));
    }

    #[test]
    fn empty_prefixes_never_match() {
        let m = matcher("p", Names::default());
        assert!(!m.is_match("-p"));
        assert!(!m.is_match("p"));
    }

    #[test]
    fn non_matching_prefixes() {
        let m = matcher(["p", "port"], [":", ""]);
        assert!(!m.is_match("-p"));
        assert!(!m.is_match("--Port"));
        assert!(m.is_match("P"));
    }
}
