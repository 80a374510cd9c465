//! Win and draw detection.
//!
//! Pure functions over a board; no side effects.

use crate::Board;
use tui_tictactoe_types::Player;

/// The eight winnable lines: rows, then columns, then the two diagonals.
const LINES: [[(u8, u8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Find a completed line and its owner.
///
/// A board reached through legal play holds at most one winner; the scan
/// order only decides which line is reported for hand-built boards.
pub fn winning_line(board: &Board) -> Option<(Player, [(u8, u8); 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Some(mark)) = board.get(a.0, a.1) {
            if board.get(b.0, b.1) == Some(Some(mark)) && board.get(c.0, c.1) == Some(Some(mark)) {
                return Some((mark, line));
            }
        }
    }
    None
}

/// The player holding three in a row, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// True iff the board is full and nobody has won.
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
