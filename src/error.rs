use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no argument source available: {0}")]
    SourceUnavailable(String),

    #[error("invalid split pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
