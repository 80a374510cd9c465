//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share the keyboard: move the cursor and place marks in turn.
//! The loop blocks on terminal events and processes each one to completion
//! (move, outcome, score, redraw) before reading the next. After a win or a
//! draw, the replay prompt decides between a new round and quitting.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, handle_prompt_key, should_quit, Cursor};
use tui_tictactoe::term::{GameView, TerminalRenderer, Viewport};
use tui_tictactoe::types::{GameAction, PromptAnswer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let mut cursor = Cursor::new();
    let view = GameView::default();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Some(cursor.pos()), Viewport::new(w, h));
        term.draw(&fb)?;

        // Block until the next event; there are no timers to service.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if game.outcome().is_terminal() {
                    match handle_prompt_key(key) {
                        Some(PromptAnswer::PlayAgain) => {
                            game.new_round();
                            cursor.reset();
                        }
                        Some(PromptAnswer::Quit) => return Ok(()),
                        None => {}
                    }
                    // 'r' still works as an alternative to 'y'.
                    if let Some(GameAction::NewRound) = handle_key_event(key) {
                        game.new_round();
                        cursor.reset();
                    }
                    continue;
                }

                handle_game_key(&mut game, &mut cursor, key);
            }
            Event::Resize(..) => {
                term.invalidate();
            }
            _ => {}
        }
    }
}

fn handle_game_key(game: &mut GameState, cursor: &mut Cursor, key: KeyEvent) {
    let Some(action) = handle_key_event(key) else {
        return;
    };

    match action {
        GameAction::CursorUp => cursor.up(),
        GameAction::CursorDown => cursor.down(),
        GameAction::CursorLeft => cursor.left(),
        GameAction::CursorRight => cursor.right(),
        GameAction::PlaceMark => {
            // Rejected moves are ignored; the board simply does not change.
            let _ = game.apply_move(cursor.row(), cursor.col());
        }
        GameAction::SelectCell { row, col } => {
            cursor.set(row, col);
            let _ = game.apply_move(row, col);
        }
        GameAction::NewRound => {
            game.new_round();
            cursor.reset();
        }
    }
}
