use std::error;
use std::fmt;

use trazo_path::ReplayError;

/// Errors which can occur when parsing or replaying path data.
///
/// All of them are fatal to the path being parsed: no drawing operations
/// are produced for a path that raises one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParserError {
    /// A byte that is not a path-data command letter where one was
    /// expected.
    Command { position: usize },
    /// A numeric token that is missing, truncated or malformed.
    Number { position: usize },
    /// An arc flag that is not a single `0` or `1` digit.
    Flag { position: usize },
    /// The token stream was lexed successfully but cannot be replayed.
    Replay(ReplayError),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserError::Command { position } => {
                write!(f, "expected a command letter at byte {}", position)
            }
            ParserError::Number { position } => {
                write!(f, "expected a number at byte {}", position)
            }
            ParserError::Flag { position } => {
                write!(f, "expected a 0/1 arc flag at byte {}", position)
            }
            ParserError::Replay(ref err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for ParserError {}

impl From<ReplayError> for ParserError {
    fn from(err: ReplayError) -> ParserError {
        ParserError::Replay(err)
    }
}
