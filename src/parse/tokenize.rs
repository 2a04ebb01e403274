/// Split a whole invocation line into argument words using shlex (POSIX word splitting).
///
/// `node app.js --name='a b'` yields `["node", "app.js", "--name=a b"]`.
pub fn tokenize(line: &str) -> Vec<String> {
    shlex::split(line).unwrap_or_else(|| {
        // Fallback: simple whitespace splitting if shlex can't parse
        log::debug!("unbalanced quoting, falling back to whitespace split: {line}");
        line.split_whitespace().map(String::from).collect()
    })
}
