//! # Win Detection
//!
//! Checks whether the stone just placed completes a line. Only lines through the
//! anchor can be new, so instead of rescanning the board we walk outward from the
//! anchor along each of the four axes, at most `win_length - 1` steps each way.

use crate::board::{Board, Cell, Player};
use tracing::instrument;

/// The four directions a line can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step `(d_row, d_col)` in the axis' positive direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// A run of same-colored stones through the anchor.
///
/// `start` is the far end in the axis' negative direction, `end` the far end in
/// the positive one. Both ends are clipped to the bounded walk, so an overline
/// much longer than the threshold is reported only as far as the walk reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub player: Player,
    pub axis: Axis,
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub length: usize,
}

impl WinLine {
    /// Coordinates of every stone in the run, `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.axis.delta();
        let (r0, c0) = self.start;
        (0..self.length).map(move |i| {
            let i = i as isize;
            (
                (r0 as isize + dr * i) as usize,
                (c0 as isize + dc * i) as usize,
            )
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

/// Result of walking one axis from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisRun {
    start: (usize, usize),
    end: (usize, usize),
    length: usize,
}

/// Moves one step from `(row, col)`, or `None` when that would leave the board.
fn step(size: usize, (row, col): (usize, usize), (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < size && c < size).then_some((r, c))
}

/// Walks from the anchor in one direction, at most `limit` steps, while the
/// stones belong to `player`. Returns the last matching cell and the step count.
fn walk(
    board: &Board,
    anchor: (usize, usize),
    delta: (isize, isize),
    player: Player,
    limit: usize,
) -> ((usize, usize), usize) {
    let mut last = anchor;
    let mut steps = 0;
    while steps < limit {
        match step(board.size(), last, delta) {
            Some((r, c)) if board.cell(r, c) == Cell::Occupied(player) => {
                last = (r, c);
                steps += 1;
            }
            _ => break,
        }
    }
    (last, steps)
}

/// Counts the contiguous run of `player` stones through `anchor` along `axis`,
/// anchor included, looking at most `limit` cells each way.
fn scan_axis(board: &Board, anchor: (usize, usize), axis: Axis, player: Player, limit: usize) -> AxisRun {
    let (dr, dc) = axis.delta();
    let (end, forward) = walk(board, anchor, (dr, dc), player, limit);
    let (start, backward) = walk(board, anchor, (-dr, -dc), player, limit);
    AxisRun {
        start,
        end,
        length: forward + backward + 1,
    }
}

/// Looks for a line of at least `win_length` stones through `(row, col)`.
///
/// The color is taken from the anchor cell; an empty or off-board anchor never
/// wins. Axes are tried in [`Axis::ALL`] order and the first winning one is
/// returned.
#[instrument(level = "trace", skip(board))]
pub fn find_win(board: &Board, row: usize, col: usize, win_length: usize) -> Option<WinLine> {
    let player = board.get(row, col).ok()?.player()?;
    let limit = win_length.saturating_sub(1);

    Axis::ALL.into_iter().find_map(|axis| {
        let run = scan_axis(board, (row, col), axis, player, limit);
        (run.length >= win_length).then_some(WinLine {
            player,
            axis,
            start: run.start,
            end: run.end,
            length: run.length,
        })
    })
}
