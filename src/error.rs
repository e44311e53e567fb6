//! # Error Types
//!
//! Every failure the engine can report is a plain value. None of them leave the
//! game in a half-applied state, so callers can show the message and let the
//! player try again.

use crate::board::Player;

/// Reasons a move was rejected.
///
/// A rejected move never mutates the game: the board, the side to move and the
/// history are exactly as they were before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The coordinate lies outside the `size × size` grid.
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// The target intersection already holds a stone.
    #[error("({row}, {col}) is already occupied by {occupant}")]
    CellOccupied {
        row: usize,
        col: usize,
        occupant: Player,
    },

    /// The caller claimed a color that is not on move.
    #[error("it is {expected}'s turn, not {claimed}'s")]
    NotYourTurn { expected: Player, claimed: Player },

    /// The game has already been won or drawn.
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Rejected game parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Failure to read a move typed as `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected format: row,col")]
    BadFormat,

    #[error("'{0}' is not a valid coordinate")]
    BadCoordinate(String),
}
