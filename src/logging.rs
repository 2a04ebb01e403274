use std::str::FromStr;

use simplelog::{
    ColorChoice, CombinedLogger, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

/// Parse a level name; anything unrecognized falls back to `warn`.
pub fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

/// Expand `~` and `$VARS` in the configured log file path.
fn log_file_path(file: &str) -> Result<std::path::PathBuf> {
    let expanded = shellexpand::full(file).map_err(|e| Error::Logging(e.to_string()))?;
    Ok(std::path::PathBuf::from(expanded.into_owned()))
}

/// Install the global logger: stderr always, plus an appending log file when configured.
///
/// Fails if a logger is already installed or the log file cannot be opened.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let level = level_filter(&settings.level);
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if !settings.file.is_empty() {
        let path = log_file_path(&settings.file)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::Logging(format!("{}: {e}", dir.display())))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
        loggers.push(WriteLogger::new(level, simplelog::Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(|e| Error::Logging(e.to_string()))
}
