//! Board cursor for keyboard play.
//!
//! The highlighted cell where the next mark lands. Movement wraps around
//! the board edges, so every cell is at most two presses away.

use tui_tictactoe_types::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: u8,
    col: u8,
}

impl Cursor {
    /// Start at the center cell.
    pub fn new() -> Self {
        Self { row: 1, col: 1 }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn pos(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    pub fn up(&mut self) {
        self.row = if self.row == 0 {
            BOARD_SIZE - 1
        } else {
            self.row - 1
        };
    }

    pub fn down(&mut self) {
        self.row = (self.row + 1) % BOARD_SIZE;
    }

    pub fn left(&mut self) {
        self.col = if self.col == 0 {
            BOARD_SIZE - 1
        } else {
            self.col - 1
        };
    }

    pub fn right(&mut self) {
        self.col = (self.col + 1) % BOARD_SIZE;
    }

    /// Jump to a cell. Out-of-range targets are ignored.
    pub fn set(&mut self, row: u8, col: u8) {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.row = row;
            self.col = col;
        }
    }

    /// Back to the center for a fresh round.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
