pub mod split;
pub mod token;
pub mod tokenize;

pub use split::{DEFAULT_SEPARATOR, Splitter};
pub use token::Token;
pub use tokenize::tokenize;
