//! # Game Engine - Turn Sequencing and Terminal States
//!
//! [`GameState`] is the single source of truth for one game. Every placement goes
//! through [`GameState::attempt_move`], which validates the request, places the
//! stone, checks for a win anchored at the new stone and then either ends the game
//! or hands the turn to the other player.
//!
//! ```text
//!            attempt_move (no win, board not full)
//!              ┌───────────────┐
//!              ▼               │
//!   ┌──────────────────────────┴─┐   five or more    ┌───────────┐
//!   │ InProgress(current_turn)   │──────────────────►│ Won(p)    │
//!   └──────────────┬─────────────┘                   └───────────┘
//!                  │ board full, no line              ┌───────────┐
//!                  └─────────────────────────────────►│ Draw      │
//!                                                     └───────────┘
//! ```
//!
//! Moves are atomic: a rejected move leaves board, turn, status and history
//! exactly as they were.

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::win::{find_win, WinLine};
use tracing::{debug, info, trace};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Still being played.
    InProgress,
    /// Someone completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 1-indexed.
    pub move_number: usize,
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// Whose move it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrWinner {
    ToMove(Player),
    Winner(Player),
    Draw,
}

/// Read-only projection handed to front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub turn_or_winner: TurnOrWinner,
    pub board_snapshot: Board,
    pub last_move: Option<Placement>,
    pub winning_line: Option<WinLine>,
}

/// State of a single game.
///
/// Each session owns its own value; nothing is shared between games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_turn: Player,
    status: GameStatus,
    history: Vec<Placement>,
    winning_line: Option<WinLine>,
}

impl GameState {
    /// Starts a game: empty board, Black to move.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        GameState {
            config,
            board: Board::new(config.board_size),
            current_turn: Player::Black,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Places a stone for `player` at `(row, col)`.
    ///
    /// Checks, in order: the game is not over, `player` is on move, the cell is
    /// on the board and empty. On success the new status is returned; on failure
    /// nothing has changed and the caller may retry straight away.
    pub fn attempt_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<GameStatus, MoveError> {
        if let Err(err) = self.validate_turn(player) {
            trace!(%err, row, col, %player, "move rejected");
            return Err(err);
        }
        if let Err(err) = self.board.set(row, col, player) {
            trace!(%err, row, col, %player, "move rejected");
            return Err(err);
        }

        let move_number = self.history.len() + 1;
        self.history.push(Placement {
            move_number,
            player,
            row,
            col,
        });
        debug!(move_number, row, col, %player, "stone placed");

        if let Some(line) = find_win(&self.board, row, col, self.config.win_length) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!(%player, axis = ?line.axis, moves = move_number, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = move_number, "game drawn");
        } else {
            self.current_turn = player.opponent();
        }

        Ok(self.status)
    }

    fn validate_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.current_turn {
            return Err(MoveError::NotYourTurn {
                expected: self.current_turn,
                claimed: player,
            });
        }
        Ok(())
    }

    /// Snapshot for rendering. Does not touch the game.
    pub fn current_status(&self) -> StatusView {
        let turn_or_winner = match self.status {
            GameStatus::InProgress => TurnOrWinner::ToMove(self.current_turn),
            GameStatus::Won(p) => TurnOrWinner::Winner(p),
            GameStatus::Draw => TurnOrWinner::Draw,
        };
        StatusView {
            turn_or_winner,
            board_snapshot: self.board.clone(),
            last_move: self.last_move().copied(),
            winning_line: self.winning_line,
        }
    }

    /// Clears the board and starts over with the same configuration.
    pub fn reset(&mut self) {
        info!(
            board_size = self.config.board_size,
            win_length = self.config.win_length,
            "new game"
        );
        *self = Self::fresh(self.config);
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move. After the game ends this is the side that made the
    /// final move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }

    /// The line that ended the game, if it was won.
    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winning_line.as_ref()
    }

    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&Placement> {
        self.history.last()
    }

    /// Every empty cell while the game is running; nothing once it is over.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        if self.status.is_game_over() {
            Vec::new()
        } else {
            self.board.empty_cells().collect()
        }
    }

    /// Numbered move list followed by the result.
    pub fn format_history(&self) -> String {
        if self.history.is_empty() {
            return String::from("No moves made yet.\n");
        }

        let mut output = format!(
            "=== Gomoku {}x{}, {} in a row ===\n\n",
            self.config.board_size, self.config.board_size, self.config.win_length
        );
        for entry in &self.history {
            output.push_str(&format!(
                "{}. {} - ({},{})\n",
                entry.move_number, entry.player, entry.row, entry.col
            ));
        }

        match self.status {
            GameStatus::Won(winner) => {
                output.push_str(&format!("\nResult: {} wins!\n", winner));
            }
            GameStatus::Draw => {
                output.push_str("\nResult: Draw\n");
            }
            GameStatus::InProgress => {
                output.push_str(&format!(
                    "\n(Game in progress - {} to move)\n",
                    self.current_turn
                ));
            }
        }

        output
    }
}
