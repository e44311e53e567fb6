//! # Gomoku Turn Engine
//!
//! A two-player placement game on a square grid: players alternate putting
//! stones on empty intersections and the first to line up `win_length` stones
//! (five by default) horizontally, vertically or diagonally wins. A full board
//! with no line is a draw.
//!
//! The crate is the rules core only. Front ends (the bundled `play` binary, a
//! GUI, a network handler or a test) translate their input into
//! [`attempt_move`] calls and draw from [`current_status`].
//!
//! ## Modules
//! - [`board`]: the grid, bounds checks and the no-overwrite rule
//! - [`win`]: bounded four-axis line detection around the last stone
//! - [`engine`]: turn order, atomic moves and terminal states
//! - [`config`]: board size and win length
//! - [`notation`]: `row,col` move parsing
//! - [`render`]: terminal drawing of a status snapshot
//!
//! ## Example
//! ```
//! use gomoku::{new_game, attempt_move, GameStatus, MoveError, Player};
//!
//! let mut game = new_game(15, 5).unwrap();
//! assert_eq!(attempt_move(&mut game, 7, 7, Player::Black), Ok(GameStatus::InProgress));
//! assert!(matches!(
//!     attempt_move(&mut game, 7, 8, Player::Black),
//!     Err(MoveError::NotYourTurn { .. })
//! ));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod notation;
pub mod render;
pub mod win;

pub use crate::{
    board::{Board, Cell, Player},
    config::GameConfig,
    engine::{GameState, GameStatus, Placement, StatusView, TurnOrWinner},
    error::{ConfigError, MoveError, ParseMoveError},
    notation::GomokuMove,
    win::{Axis, WinLine},
};

/// Starts a game on a `board_size × board_size` grid where `win_length` in a row
/// wins.
///
/// # Errors
/// [`ConfigError::InvalidConfiguration`] when `board_size < 5`,
/// `win_length < 3` or `win_length > board_size`.
pub fn new_game(board_size: usize, win_length: usize) -> Result<GameState, ConfigError> {
    GameState::new(GameConfig::new(board_size, win_length)?)
}

/// Places a stone for `player`. See [`GameState::attempt_move`].
pub fn attempt_move(
    state: &mut GameState,
    row: usize,
    col: usize,
    player: Player,
) -> Result<GameStatus, MoveError> {
    state.attempt_move(row, col, player)
}

/// Read-only snapshot of the game. See [`GameState::current_status`].
pub fn current_status(state: &GameState) -> StatusView {
    state.current_status()
}
