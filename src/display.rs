/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use snake_game::entities::{Difficulty, GameState, GameStatus, Position};

// ── Layout ────────────────────────────────────────────────────────────────────
//
// Row 0 is the HUD, row 1 the top border, then one row per grid row, the
// bottom border and a hint line.  Every cell is two columns wide so the
// field looks square.

const CELL_COLS: u16 = 2;
const FIELD_TOP: u16 = 2;
const FIELD_LEFT: u16 = 1;

/// Terminal size needed to show the whole field.
pub fn required_size(state: &GameState) -> (u16, u16) {
    let cols = state.width as u16 * CELL_COLS + 2;
    let rows = state.height as u16 + 4;
    (cols, rows)
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_BEST: Color = Color::Yellow;
const C_HEAD: Color = Color::Green;
const C_BODY: Color = Color::DarkGreen;
const C_APPLE: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_hud(out, state)?;

    if state.status == GameStatus::Running {
        draw_apple(out, state)?;
        draw_snake(out, state)?;
        draw_controls_hint(out, state)?;
    } else {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, required_size(state).1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Difficulty selection screen.  `selected` is highlighted.
pub fn render_menu<W: Write>(
    out: &mut W,
    selected: Difficulty,
    high_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "S N A K E";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Green))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs_str = format!("High Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(C_HUD_BEST))?;
        out.queue(Print(&hs_str))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select Difficulty Level:"))?;

    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        let marker = if *difficulty == selected { '>' } else { ' ' };
        let color = match difficulty {
            Difficulty::Easy => Color::Green,
            Difficulty::Medium => Color::Yellow,
            Difficulty::Hard => Color::Red,
        };
        out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(format!("{} ", marker)))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!("[{}] ", i + 1)))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(difficulty.label()))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ : Choose   ENTER : Start   Q : Exit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let inner = (state.width as u16 * CELL_COLS) as usize;
    let bottom = FIELD_TOP + state.height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in FIELD_TOP..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_LEFT + inner as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    // High score — right
    let best = format!("High Score: {}", state.high_score);
    let right_edge = required_size(state).0;
    let rx = right_edge.saturating_sub(best.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Screen cell for a grid position, or `None` outside the field.
fn cell_origin(state: &GameState, pos: Position) -> Option<(u16, u16)> {
    if !state.in_bounds(pos) {
        return None;
    }
    Some((
        FIELD_LEFT + pos.x as u16 * CELL_COLS,
        FIELD_TOP + pos.y as u16,
    ))
}

fn draw_apple<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    if let Some((col, row)) = cell_origin(state, state.apple) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_APPLE))?;
        out.queue(Print("●"))?;
    }
    Ok(())
}

fn draw_snake<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Tail first so the head is painted last and always visible
    for (i, segment) in state.snake.iter().enumerate().rev() {
        let Some((col, row)) = cell_origin(state, *segment) else {
            continue;
        };
        out.queue(cursor::MoveTo(col, row))?;
        if i == 0 {
            out.queue(style::SetForegroundColor(C_HEAD))?;
        } else {
            out.queue(style::SetForegroundColor(C_BODY))?;
        }
        out.queue(Print("██"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, FIELD_TOP + state.height as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!(
        "← ↑ → ↓ : Steer   Q : Quit   [{}]",
        state.difficulty.label()
    )))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Score: {}", state.score);
    let best_line = format!("High Score: {}", state.high_score);

    let lines: &[(&str, Color)] = &[
        ("Game Over", Color::Red),
        ("", Color::Reset),
        (&score_line, Color::White),
        (&best_line, Color::White),
        ("", Color::Reset),
        ("[R] Play Again    [Q] Exit", C_HINT),
    ];

    let (cols, _) = required_size(state);
    let cx = cols / 2;
    let mid = FIELD_TOP + state.height as u16 / 2;
    let start_row = mid.saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
