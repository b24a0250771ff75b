use thiserror::Error;

use crate::TermInt;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("terminal error: {source}")]
    Terminal {
        #[from]
        source: crossterm::ErrorKind,
    },
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("terminal is {actual:?} (columns, rows) but the game needs at least {needed:?}")]
    TerminalTooSmall {
        needed: (TermInt, TermInt),
        actual: (TermInt, TermInt),
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("could not set up logging: {0}")]
    Logging(String),
}

pub type Result<T = ()> = std::result::Result<T, SnakeError>;
