// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::syntax::ClauseId;

/// Raw error cases.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum RawError {
    // Lexer
    #[error("Invalid UTF8 string {0}")]
    InvalidUtf8String(std::string::FromUtf8Error),
    #[error("Invalid integer {0}")]
    InvalidInteger(std::num::ParseIntError),
    #[error("Unexpected char or end of input: {0:?} instead of {1:?}")]
    UnexpectedChar(Option<char>, Vec<char>),
    #[error("Missing '0' terminator")]
    MissingTerminator,
    // Parser & Model
    #[error("Unknown command {0}")]
    UnknownCommand(String),
    #[error("Restored clause {0} was never weakened")]
    RestoredUnweakenedClause(ClauseId),
}

/// Record a position in the input stream.
#[derive(Clone, Eq, PartialEq, thiserror::Error)]
#[error("{}{}:{}", match &.path_name { Some(p) => format!("{}:", p), None => String::new() }, .line + 1, .column + 1)]
pub struct Position {
    /// Optional path name for the input stream.
    pub path_name: Option<String>,
    /// Line number in the input stream.
    pub line: usize,
    /// Column number in the line.
    pub column: usize,
}

/// An error together with a position where the error occurred.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("{position}: {error}")]
pub struct Error {
    pub position: Position,
    pub error: RawError,
}

/// Result type based on `RawError`.
pub type RawResult<T> = std::result::Result<T, RawError>;

/// Result type based on `Error`.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = match &self.path_name {
            Some(p) => format!("{}:", p),
            None => String::new(),
        };
        write!(f, "{}{}:{}", file, self.line + 1, self.column + 1)
    }
}

impl From<Error> for RawError {
    fn from(value: Error) -> Self {
        value.error
    }
}
