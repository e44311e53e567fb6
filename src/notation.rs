//! Text notation for moves: `row,col`, zero-based.

use crate::error::ParseMoveError;
use std::fmt;
use std::str::FromStr;

/// A target intersection as typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GomokuMove(pub usize, pub usize);

impl GomokuMove {
    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for GomokuMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl FromStr for GomokuMove {
    type Err = ParseMoveError;

    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use gomoku::notation::GomokuMove;
    /// let mv = GomokuMove::from_str(" 7, 11 ").unwrap();
    /// assert_eq!(mv, GomokuMove(7, 11));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err(ParseMoveError::BadFormat);
        }
        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| ParseMoveError::BadCoordinate(part.to_string()))
        };
        Ok(GomokuMove(parse(parts[0])?, parse(parts[1])?))
    }
}
