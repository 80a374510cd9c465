//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_tictactoe_core::{rules, GameState};
use tui_tictactoe_types::{Player, RoundOutcome, BOARD_SIZE};

use crate::fb::{FrameBuffer, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the score panel, and the end-of-round prompt.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps cells roughly square with typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Width of the board frame including borders and separators.
    pub fn frame_width(&self) -> u16 {
        (BOARD_SIZE as u16) * self.cell_w + (BOARD_SIZE as u16) + 1
    }

    /// Height of the board frame including borders and separators.
    pub fn frame_height(&self) -> u16 {
        (BOARD_SIZE as u16) * self.cell_h + (BOARD_SIZE as u16) + 1
    }

    /// Render the current game state into a framebuffer.
    ///
    /// The cursor highlight is suppressed while the round is over; the
    /// replay prompt replaces it.
    pub fn render(
        &self,
        state: &GameState,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = self.frame_width();
        let frame_h = self.frame_height();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_grid(&mut fb, start_x, start_y);

        let win = rules::winning_line(state.board());
        let cursor = if state.outcome().is_terminal() {
            None
        } else {
            cursor
        };

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let on_winning_line = win
                    .map(|(_, line)| line.contains(&(row, col)))
                    .unwrap_or(false);
                let under_cursor = cursor == Some((row, col));
                let mark = state.board().get(row, col).unwrap_or(None);
                self.draw_cell(
                    &mut fb,
                    start_x,
                    start_y,
                    row,
                    col,
                    mark,
                    under_cursor,
                    on_winning_line,
                );
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        if state.outcome().is_terminal() {
            self.draw_prompt(&mut fb, state.outcome(), start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    /// Outer border plus the inner separators, with proper junctions.
    fn draw_grid(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let size = BOARD_SIZE as u16;
        let frame_w = self.frame_width();
        let frame_h = self.frame_height();

        // Horizontal lines (k = 0 top border, k = size bottom border).
        for k in 0..=size {
            let y = start_y + k * (self.cell_h + 1);
            for dx in 0..frame_w {
                fb.put_char(start_x + dx, y, '─', style);
            }
        }

        // Vertical lines.
        for k in 0..=size {
            let x = start_x + k * (self.cell_w + 1);
            for dy in 0..frame_h {
                fb.put_char(x, start_y + dy, '│', style);
            }
        }

        // Junctions overwrite the line crossings.
        for ky in 0..=size {
            for kx in 0..=size {
                let ch = match (ky, kx) {
                    (0, 0) => '┌',
                    (0, k) if k == size => '┐',
                    (0, _) => '┬',
                    (k, 0) if k == size => '└',
                    (k, kx2) if k == size && kx2 == size => '┘',
                    (k, _) if k == size => '┴',
                    (_, 0) => '├',
                    (_, k) if k == size => '┤',
                    _ => '┼',
                };
                fb.put_char(
                    start_x + kx * (self.cell_w + 1),
                    start_y + ky * (self.cell_h + 1),
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u8,
        col: u8,
        mark: Option<Player>,
        under_cursor: bool,
        on_winning_line: bool,
    ) {
        let px = start_x + 1 + (col as u16) * (self.cell_w + 1);
        let py = start_y + 1 + (row as u16) * (self.cell_h + 1);

        let bg = if under_cursor {
            Rgb::new(60, 60, 90)
        } else {
            Rgb::new(30, 30, 40)
        };
        fb.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            ' ',
            Style {
                fg: bg,
                bg,
                bold: false,
                dim: false,
            },
        );

        let cx = px + self.cell_w / 2;
        let cy = py + self.cell_h / 2;

        match mark {
            Some(player) => {
                let fg = if on_winning_line {
                    Rgb::new(100, 220, 120)
                } else {
                    mark_color(player)
                };
                fb.put_char(
                    cx,
                    cy,
                    player.as_char(),
                    Style {
                        fg,
                        bg,
                        bold: true,
                        dim: false,
                    },
                );
            }
            None => {
                // Dim digit hint matching the 1-9 placement keys.
                let digit = (b'1' + row * BOARD_SIZE + col) as char;
                fb.put_char(
                    cx,
                    cy,
                    digit,
                    Style {
                        fg: Rgb::new(90, 90, 100),
                        bg,
                        bold: false,
                        dim: true,
                    },
                );
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let score = state.score();
        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("X {}", score.wins_x), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("O {}", score.wins_o), value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("DRAWS {}", score.draws), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROUND", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.round()), value);
        y = y.saturating_add(2);

        if state.outcome() == RoundOutcome::InProgress {
            fb.put_str(panel_x, y, "TURN", label);
            y = y.saturating_add(1);
            let player = state.current_player();
            fb.put_char(
                panel_x,
                y,
                player.as_char(),
                Style {
                    fg: mark_color(player),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                },
            );
        }
    }

    /// Win/draw announcement plus the replay question, beneath the board.
    fn draw_prompt(
        &self,
        fb: &mut FrameBuffer,
        outcome: RoundOutcome,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let announce = match outcome {
            RoundOutcome::Win(player) => format!("PLAYER {} WINS!", player),
            RoundOutcome::Draw => "IT'S A DRAW!".to_string(),
            RoundOutcome::InProgress => return,
        };
        let question = "PLAY AGAIN? (Y/N)";

        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let mid_y = start_y.saturating_add(frame_h).saturating_add(1);
        let centered = |text: &str| {
            let text_w = text.chars().count() as u16;
            start_x.saturating_add(frame_w.saturating_sub(text_w) / 2)
        };

        fb.put_str(centered(&announce), mid_y, &announce, style);
        fb.put_str(
            centered(question),
            mid_y.saturating_add(1),
            question,
            Style {
                bold: false,
                ..style
            },
        );
    }
}

fn mark_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(220, 80, 80),
        Player::O => Rgb::new(80, 120, 220),
    }
}
