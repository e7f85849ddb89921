//! Configuration errors raised while building a validator.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate character in custom list: {:?}", as_char(.0))]
    DuplicateCharacter(u8),
    #[error("Unknown character set selector: {0}")]
    UnknownPreset(String),
    #[error("Unknown filter mode selector: {0}")]
    UnknownFilterMode(String),
}

fn as_char(c: &u8) -> char {
    char::from(*c)
}
