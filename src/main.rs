//! argline: print how the current invocation's arguments tokenize.
//!
//! Writes one JSON object per argument to stdout:
//! `{"index":0,"raw":"-p=1","command":"-p","value":"1","previous":null,"next":1}`
//!
//! Flags (any case, `-` or `--`, regardless of configured prefixes):
//!   - `--config=PATH` / `--config PATH`: merge PATH over the defaults instead of the user config
//!   - `--dump-config`: print the effective configuration as TOML and exit

use argline::config::Config;
use argline::engine::{DEFAULT_PREFIXES, Linked};
use argline::{CommandSequence, Error, ProcessArgs, logging};

fn exit_with(err: Error) -> ! {
    eprintln!("argline: {err}");
    std::process::exit(1);
}

/// Path given with `--config=PATH` or `--config PATH`. A bare `--config` is an error.
fn config_path(flags: &CommandSequence) -> Result<Option<String>, Error> {
    let mut found = None;
    flags.fuzzy_with("config", DEFAULT_PREFIXES, |t| {
        let path = t
            .value()
            .map(String::from)
            .or_else(|| t.next().map(|n| n.token().raw().to_string()));
        found = Some(path);
    });
    match found {
        None => Ok(None),
        Some(Some(path)) => Ok(Some(path)),
        Some(None) => Err(Error::Config("--config needs a path".into())),
    }
}

fn wants_dump_config(flags: &CommandSequence) -> bool {
    let mut dump = false;
    flags.fuzzy_with("dump-config", DEFAULT_PREFIXES, |_| dump = true);
    dump
}

/// One output line per token.
fn token_line(token: Linked<'_>) -> serde_json::Value {
    serde_json::json!({
        "index": token.index(),
        "raw": token.raw(),
        "command": token.command(),
        "value": token.value(),
        "previous": token.previous().map(|p| p.index()),
        "next": token.next().map(|n| n.index()),
    })
}

fn main() {
    // Flags are read with the default splitter and prefixes so config cannot hide them.
    let flags = CommandSequence::from_env().unwrap_or_else(|e| exit_with(e));

    let config = match config_path(&flags).unwrap_or_else(|e| exit_with(e)) {
        Some(path) => {
            Config::load_from(std::path::Path::new(&path)).unwrap_or_else(|e| exit_with(e))
        }
        None => Config::load(),
    };
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("argline: {e}");
    }

    if wants_dump_config(&flags) {
        match config.to_toml() {
            Ok(text) => print!("{text}"),
            Err(e) => exit_with(e),
        }
        return;
    }

    let seq = CommandSequence::with_config(ProcessArgs::native(), &config)
        .unwrap_or_else(|e| exit_with(e));
    for token in seq.iter() {
        println!("{}", token_line(token));
    }
}
