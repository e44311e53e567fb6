//! # Board State
//!
//! The grid of intersections. The board only knows which cells are occupied and
//! by which color; whose turn it is and whether anybody has won are the engine's
//! business.

use crate::error::MoveError;
use std::fmt;

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other color.
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single character used in plain-text board dumps.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of one intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The stone's color, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// Square `size × size` grid indexed by `(row, col)`.
///
/// Cells go from `Empty` to `Occupied` exactly once; [`Board::set`] is the only
/// way to write and it refuses to overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    size: usize,
    occupied: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Self {
        Board {
            cells: vec![vec![Cell::Empty; size]; size],
            size,
            occupied: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stones on the board.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// True if `(row, col)` lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Reads one cell.
    ///
    /// # Errors
    /// [`MoveError::OutOfBounds`] if either index is `>= size`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Places a stone.
    ///
    /// # Errors
    /// [`MoveError::OutOfBounds`] for a coordinate off the grid and
    /// [`MoveError::CellOccupied`] if the cell already holds a stone. The board is
    /// untouched in both cases.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        self.check_bounds(row, col)?;
        if let Cell::Occupied(occupant) = self.cells[row][col] {
            return Err(MoveError::CellOccupied { row, col, occupant });
        }
        self.cells[row][col] = Cell::Occupied(player);
        self.occupied += 1;
        Ok(())
    }

    /// True once every intersection holds a stone.
    pub fn is_full(&self) -> bool {
        self.occupied == self.size * self.size
    }

    /// Rows from top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Every empty coordinate in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |r| (0..self.size).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c].is_empty())
    }

    /// Unchecked read for callers that already validated the coordinate.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(p) => p.symbol(),
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(15);
        assert_eq!(board.size(), 15);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert!(board.rows().all(|row| row.iter().all(|c| c.is_empty())));
        assert_eq!(board.empty_cells().count(), 225);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(5);
        assert_eq!(
            board.get(5, 0),
            Err(MoveError::OutOfBounds { row: 5, col: 0, size: 5 })
        );
        assert_eq!(
            board.get(0, 7),
            Err(MoveError::OutOfBounds { row: 0, col: 7, size: 5 })
        );
        assert_eq!(board.get(4, 4), Ok(Cell::Empty));
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new(5);
        board.set(2, 3, Player::White).unwrap();
        assert_eq!(board.get(2, 3), Ok(Cell::Occupied(Player::White)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_set_refuses_overwrite() {
        let mut board = Board::new(5);
        board.set(1, 1, Player::Black).unwrap();
        let before = board.clone();

        assert_eq!(
            board.set(1, 1, Player::White),
            Err(MoveError::CellOccupied {
                row: 1,
                col: 1,
                occupant: Player::Black
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_out_of_bounds_leaves_board_alone() {
        let mut board = Board::new(5);
        let before = board.clone();
        assert!(matches!(
            board.set(9, 9, Player::Black),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(5);
        let mut player = Player::Black;
        for r in 0..5 {
            for c in 0..5 {
                assert!(!board.is_full());
                board.set(r, c, player).unwrap();
                player = player.opponent();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(5);
        board.set(0, 0, Player::Black).unwrap();
        board.set(4, 4, Player::White).unwrap();
        assert_eq!(
            board.to_string(),
            "X....\n.....\n.....\n.....\n....O\n"
        );
    }
}
