//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_tictactoe_types::{GameAction, PromptAnswer, BOARD_SIZE};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }

        // Placement
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::PlaceMark),
        KeyCode::Char(ch @ '1'..='9') => {
            // Digits address cells in reading order, 1 = top-left.
            let idx = ch as u8 - b'1';
            Some(GameAction::SelectCell {
                row: idx / BOARD_SIZE,
                col: idx % BOARD_SIZE,
            })
        }

        // Round control
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::NewRound),

        _ => None,
    }
}

/// Map keyboard input to a replay-prompt answer.
///
/// Only consulted once the round has reached a terminal outcome.
pub fn handle_prompt_key(key: KeyEvent) -> Option<PromptAnswer> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(PromptAnswer::PlayAgain),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(PromptAnswer::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
