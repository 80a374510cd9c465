//! Game state module - the round and score lifecycle
//!
//! Ties the board and rules together: move legality, turn alternation,
//! outcome computation, and the session score. All mutation goes through
//! `apply_move` and `new_round`, so a caller can never leave the state
//! half-updated.

use crate::{rules, Board};
use tui_tictactoe_types::{IllegalMove, Player, RoundOutcome, Score, BOARD_SIZE};

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Player,
    outcome: RoundOutcome,
    score: Score,
    /// 1-based round counter (increments on each new round).
    round: u32,
}

impl GameState {
    /// Create a fresh session: empty board, X to move, score at zero.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            outcome: RoundOutcome::InProgress,
            score: Score::default(),
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Start a new round: fresh board, X to move. The score carries over.
    ///
    /// Legal from any state, terminal or not.
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.current = Player::X;
        self.outcome = RoundOutcome::InProgress;
        self.round += 1;
    }

    /// Apply the current player's mark at (row, col).
    ///
    /// On success returns the outcome computed over the new board. A win
    /// increments the winner's score and freezes the board; a draw freezes
    /// the board; otherwise the turn passes to the opponent. A rejected
    /// move changes nothing.
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<RoundOutcome, IllegalMove> {
        if self.outcome.is_terminal() {
            return Err(IllegalMove::RoundOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(IllegalMove::OutOfBounds { row, col });
        }
        if !self.board.is_empty_cell(row, col) {
            return Err(IllegalMove::CellOccupied { row, col });
        }

        self.board.set(row, col, Some(self.current));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.score.record_win(winner);
            self.outcome = RoundOutcome::Win(winner);
        } else if rules::check_draw(&self.board) {
            self.score.record_draw();
            self.outcome = RoundOutcome::Draw;
        } else {
            self.current = self.current.opponent();
        }

        Ok(self.outcome)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_opens_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_player(), Player::X);

        state.apply_move(0, 0).unwrap();
        assert_eq!(state.current_player(), Player::O);

        state.apply_move(1, 1).unwrap();
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_win_keeps_winner_as_current_player() {
        let mut state = GameState::new();
        state.apply_move(0, 0).unwrap();
        state.apply_move(1, 0).unwrap();
        state.apply_move(0, 1).unwrap();
        state.apply_move(1, 1).unwrap();
        let outcome = state.apply_move(0, 2).unwrap();

        assert_eq!(outcome, RoundOutcome::Win(Player::X));
        // The turn does not pass after a terminal move.
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected_without_mutation() {
        let mut state = GameState::new();
        let before = *state.board();

        let err = state.apply_move(3, 0).unwrap_err();
        assert_eq!(err, IllegalMove::OutOfBounds { row: 3, col: 0 });
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_cell_move_is_rejected_without_mutation() {
        let mut state = GameState::new();
        state.apply_move(1, 1).unwrap();
        let before = *state.board();

        let err = state.apply_move(1, 1).unwrap_err();
        assert_eq!(err, IllegalMove::CellOccupied { row: 1, col: 1 });
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_new_round_resets_board_and_turn_but_not_score() {
        let mut state = GameState::new();
        state.apply_move(0, 0).unwrap();
        state.apply_move(1, 0).unwrap();
        state.apply_move(0, 1).unwrap();
        state.apply_move(1, 1).unwrap();
        state.apply_move(0, 2).unwrap();
        assert_eq!(state.score().wins_x, 1);
        assert_eq!(state.round(), 1);

        state.new_round();
        assert_eq!(state.outcome(), RoundOutcome::InProgress);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.round(), 2);
        assert_eq!(state.score().wins_x, 1);
        assert!(state.board().cells().iter().all(|cell| cell.is_none()));
    }
}
