//! Error types for the tic-tac-toe solver

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove { row: i64, col: i64, reason: String },

    #[error("utility is only defined for terminal boards, got:\n{board}")]
    NotTerminal { board: String },

    #[error("wrong board length: expected exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("inconsistent winning lines in '{board}': {reason}")]
    ConflictingWinners { board: String, reason: String },

    #[error("corrupted game record: {reason}")]
    CorruptedRecord { reason: String },

    #[error("game already over")]
    GameOver,

    #[error("invalid search strategy '{input}'. Expected one of: {expected}")]
    ParseSearchStrategy { input: String, expected: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_move(row: i64, col: i64, reason: impl Into<String>) -> Self {
        Error::InvalidMove {
            row,
            col,
            reason: reason.into(),
        }
    }

    /// Whether this is an `InvalidMove` error
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }

    /// Whether this is a `NotTerminal` error
    pub fn is_not_terminal(&self) -> bool {
        matches!(self, Error::NotTerminal { .. })
    }
}
