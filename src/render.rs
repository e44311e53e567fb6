//! Terminal drawing of a [`StatusView`].

use crate::board::{Cell, Player};
use crate::engine::{StatusView, TurnOrWinner};
use colored::{ColoredString, Colorize};

/// Glyph and color for one intersection.
///
/// Highlighted cells are the last move and the stones of a winning line.
pub fn cell_style(cell: Cell, highlighted: bool) -> ColoredString {
    let glyph = match cell {
        Cell::Occupied(Player::Black) => "X".red(),
        Cell::Occupied(Player::White) => "O".blue(),
        Cell::Empty => "·".bright_black(),
    };
    if highlighted && !cell.is_empty() {
        glyph.yellow().bold()
    } else {
        glyph
    }
}

fn plain_glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Occupied(Player::Black) => "X",
        Cell::Occupied(Player::White) => "O",
        Cell::Empty => ".",
    }
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(view: &StatusView) -> String {
    match view.turn_or_winner {
        TurnOrWinner::ToMove(p) => format!("{} ({}) to move", p, p.symbol()),
        TurnOrWinner::Winner(p) => format!("{} wins!", p),
        TurnOrWinner::Draw => String::from("Draw - the board is full"),
    }
}

/// Draws the board with row and column indices, followed by the status line.
pub fn render(view: &StatusView, color: bool) -> String {
    let board = &view.board_snapshot;
    let width = board.size().saturating_sub(1).to_string().len();
    let is_highlighted = |r: usize, c: usize| {
        view.winning_line.map_or(false, |line| line.contains(r, c))
            || view.last_move.map_or(false, |m| m.row == r && m.col == c)
    };

    let pad = " ".repeat(width);
    let mut out = pad.clone();
    for c in 0..board.size() {
        out.push_str(&format!(" {:>width$}", c, width = width));
    }
    out.push('\n');

    for (r, row) in board.rows().enumerate() {
        out.push_str(&format!("{:>width$}", r, width = width));
        for (c, &cell) in row.iter().enumerate() {
            let glyph = if color {
                cell_style(cell, is_highlighted(r, c)).to_string()
            } else {
                plain_glyph(cell).to_string()
            };
            // Escape codes would throw off `{:>width$}`, so pad by hand.
            out.push_str(&pad[1..]);
            out.push(' ');
            out.push_str(&glyph);
        }
        out.push('\n');
    }

    out.push_str(&status_line(view));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::GameState;

    #[test]
    fn test_plain_render() {
        let mut state = GameState::new(GameConfig::new(5, 3).unwrap()).unwrap();
        state.attempt_move(0, 0, Player::Black).unwrap();
        state.attempt_move(4, 4, Player::White).unwrap();

        let text = render(&state.current_status(), false);
        let expected = "  0 1 2 3 4\n\
                        0 X . . . .\n\
                        1 . . . . .\n\
                        2 . . . . .\n\
                        3 . . . . .\n\
                        4 . . . . O\n\
                        Black (X) to move\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_wide_board_pads_indices() {
        let state = GameState::new(GameConfig::default()).unwrap();
        let text = render(&state.current_status(), false);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("    0  1"));
        assert!(lines.nth(13).unwrap().starts_with("13  ."));
    }

    #[test]
    fn test_status_lines() {
        let mut state = GameState::new(GameConfig::new(5, 3).unwrap()).unwrap();
        for (r, c, p) in [
            (0, 0, Player::Black),
            (4, 0, Player::White),
            (0, 1, Player::Black),
            (4, 1, Player::White),
            (0, 2, Player::Black),
        ] {
            state.attempt_move(r, c, p).unwrap();
        }
        assert_eq!(status_line(&state.current_status()), "Black wins!");
    }
}
