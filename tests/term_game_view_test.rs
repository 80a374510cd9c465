use tui_tictactoe::core::GameState;
use tui_tictactoe::term::{GameView, Rgb, Viewport};
use tui_tictactoe::types::RoundOutcome;

fn frame_text(fb: &tui_tictactoe::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

/// Plays X to a top-row win.
fn won_state() -> GameState {
    let mut state = GameState::new();
    state.apply_move(0, 0).unwrap();
    state.apply_move(1, 1).unwrap();
    state.apply_move(0, 1).unwrap();
    state.apply_move(2, 2).unwrap();
    state.apply_move(0, 2).unwrap();
    assert!(state.outcome().is_terminal());
    state
}

#[test]
fn term_view_renders_grid_corners_and_junctions() {
    let state = GameState::new();
    let view = GameView::default();

    // With cell_w=7 and cell_h=3 the frame is 25x13.
    assert_eq!(view.frame_width(), 25);
    assert_eq!(view.frame_height(), 13);

    let fb = view.render(&state, None, Viewport::new(25, 13));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(24, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 12).unwrap().ch, '└');
    assert_eq!(fb.get(24, 12).unwrap().ch, '┘');

    // Inner crossings.
    assert_eq!(fb.get(8, 4).unwrap().ch, '┼');
    assert_eq!(fb.get(16, 8).unwrap().ch, '┼');

    // Edge junctions.
    assert_eq!(fb.get(8, 0).unwrap().ch, '┬');
    assert_eq!(fb.get(0, 4).unwrap().ch, '├');
    assert_eq!(fb.get(24, 8).unwrap().ch, '┤');
    assert_eq!(fb.get(16, 12).unwrap().ch, '┴');
}

#[test]
fn term_view_renders_marks_at_cell_centers() {
    let mut state = GameState::new();
    state.apply_move(0, 0).unwrap(); // X
    state.apply_move(1, 1).unwrap(); // O

    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(25, 13));

    assert_eq!(fb.get(4, 2).unwrap().ch, 'X');
    assert_eq!(fb.get(12, 6).unwrap().ch, 'O');
}

#[test]
fn term_view_renders_digit_hints_in_empty_cells() {
    let state = GameState::new();
    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(25, 13));

    assert_eq!(fb.get(4, 2).unwrap().ch, '1');
    assert_eq!(fb.get(12, 6).unwrap().ch, '5');
    assert_eq!(fb.get(20, 10).unwrap().ch, '9');
    assert!(fb.get(4, 2).unwrap().style.dim);
}

#[test]
fn term_view_highlights_cursor_cell() {
    let state = GameState::new();
    let view = GameView::default();

    let plain = view.render(&state, None, Viewport::new(25, 13));
    let with_cursor = view.render(&state, Some((0, 0)), Viewport::new(25, 13));

    let normal_bg = plain.get(4, 2).unwrap().style.bg;
    let cursor_bg = with_cursor.get(4, 2).unwrap().style.bg;
    assert_ne!(normal_bg, cursor_bg);

    // Other cells keep the normal background.
    assert_eq!(with_cursor.get(12, 6).unwrap().style.bg, normal_bg);
}

#[test]
fn term_view_suppresses_cursor_when_round_is_over() {
    let state = won_state();
    let view = GameView::default();

    let plain = view.render(&state, None, Viewport::new(25, 13));
    let with_cursor = view.render(&state, Some((1, 0)), Viewport::new(25, 13));

    // The cell under the (ignored) cursor keeps its normal background.
    let normal_bg = plain.get(4, 6).unwrap().style.bg;
    assert_eq!(with_cursor.get(4, 6).unwrap().style.bg, normal_bg);
}

#[test]
fn term_view_highlights_winning_line() {
    let state = won_state();
    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(25, 13));

    let win_color = Rgb::new(100, 220, 120);
    // Top row cells (0,0) (0,1) (0,2) hold the winning X marks.
    assert_eq!(fb.get(4, 2).unwrap().ch, 'X');
    assert_eq!(fb.get(4, 2).unwrap().style.fg, win_color);
    assert_eq!(fb.get(12, 2).unwrap().style.fg, win_color);
    assert_eq!(fb.get(20, 2).unwrap().style.fg, win_color);

    // O's marks are not part of the line.
    assert_eq!(fb.get(12, 6).unwrap().ch, 'O');
    assert_ne!(fb.get(12, 6).unwrap().style.fg, win_color);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut state = GameState::new();
    state.apply_move(2, 0).unwrap();

    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(60, 13));
    let all = frame_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("DRAWS 0"));
    assert!(all.contains("ROUND"));
    assert!(all.contains("TURN"));
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewports() {
    let state = GameState::new();
    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(25, 13));

    assert!(!frame_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_replay_prompt_after_a_win() {
    let state = won_state();
    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(40, 20));
    let all = frame_text(&fb);

    assert!(all.contains("PLAYER X WINS!"));
    assert!(all.contains("PLAY AGAIN? (Y/N)"));
}

#[test]
fn term_view_shows_draw_announcement() {
    let mut state = GameState::new();
    for &(row, col) in &[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        state.apply_move(row, col).unwrap();
    }
    assert_eq!(state.outcome(), RoundOutcome::Draw);

    let view = GameView::default();
    let fb = view.render(&state, None, Viewport::new(40, 20));
    let all = frame_text(&fb);

    assert!(all.contains("IT'S A DRAW!"));
    assert!(all.contains("PLAY AGAIN? (Y/N)"));
}

#[test]
fn term_view_hides_prompt_while_in_progress() {
    let mut state = GameState::new();
    state.apply_move(0, 0).unwrap();

    let view = GameView::default();
    let fb = view.render(&state, Some((1, 1)), Viewport::new(40, 20));

    assert!(!frame_text(&fb).contains("PLAY AGAIN"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let state = won_state();
    let view = GameView::default();

    // Everything off-screen is clipped, nothing panics.
    for (w, h) in [(0, 0), (1, 1), (10, 3), (24, 12)] {
        let fb = view.render(&state, Some((0, 0)), Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
