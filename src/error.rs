//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Mark;

/// Why a move was refused by a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The session already reached a win or a draw
    GameOver,
    /// Row or column outside 0-2
    OutOfRange,
    /// The target cell already holds a mark
    Occupied(Mark),
    /// An automated turn was requested while a human player is active
    NotAutomatedTurn,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::GameOver => write!(f, "game already over"),
            IllegalMoveReason::OutOfRange => write!(f, "position is off the board"),
            IllegalMoveReason::Occupied(mark) => {
                write!(f, "cell is already occupied by {}", mark.to_char())
            }
            IllegalMoveReason::NotAutomatedTurn => {
                write!(f, "active player is not the automated player")
            }
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {column}) is out of range (row and column must be 0-2)")]
    OutOfRange { row: usize, column: usize },

    #[error("illegal move at ({row}, {column}): {reason}")]
    IllegalMove {
        row: usize,
        column: usize,
        reason: IllegalMoveReason,
    },

    #[error("no automated move to play: {reason}")]
    NoAutomatedTurn { reason: IllegalMoveReason },

    #[error("player name must not be empty (player {index})")]
    InvalidPlayerName { index: usize },

    #[error("automated player index {index} is invalid (expected 0 or 1)")]
    InvalidAutomatedPlayer { index: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Whether this error rejected a move (as opposed to a setup or I/O failure)
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Error::IllegalMove { .. } | Error::NoAutomatedTurn { .. }
        )
    }
}
