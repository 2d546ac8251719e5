/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, scaling the logical canvas onto the
/// terminal cell grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Beam, Bomb, BombColor, Explosion, GameState, GameStatus, Look, Player};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_BEAM: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Sprite tables ─────────────────────────────────────────────────────────────

/// Per-direction player sprites, keyed by the sign pair of the facing vector.
/// Built once; lookup replaces any per-variant dispatch.
const FACING_GLYPHS: [((i32, i32), &str); 8] = [
    ((0, -1), "↑"),
    ((1, -1), "↗"),
    ((1, 0), "→"),
    ((1, 1), "↘"),
    ((0, 1), "↓"),
    ((-1, 1), "↙"),
    ((-1, 0), "←"),
    ((-1, -1), "↖"),
];

/// The 4-frame explosion animation cycle, indexed by `life % 4`.
const EXPLOSION_FRAMES: [&str; 4] = ["✶", "✹", "✸", "✺"];

fn facing_glyph(dire: (i32, i32)) -> &'static str {
    let key = (dire.0.signum(), dire.1.signum());
    FACING_GLYPHS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("→")
}

fn bomb_color(color: BombColor) -> Color {
    match color {
        BombColor::Red => Color::Red,
        BombColor::Green => Color::Green,
        BombColor::Blue => Color::Blue,
        BombColor::Yellow => Color::Yellow,
        BombColor::Magenta => Color::Magenta,
        BombColor::Cyan => Color::Cyan,
    }
}

/// Bigger bombs get a heavier circle glyph so the random radius stays visible
/// at cell resolution.
fn bomb_glyph(bomb: &Bomb) -> &'static str {
    match bomb.radius {
        r if r < 12 => "•",
        r if r < 22 => "●",
        _ => "◉",
    }
}

fn beam_glyph(beam: &Beam) -> &'static str {
    match (beam.vx.signum(), beam.vy.signum()) {
        (_, 0) => "═",
        (0, _) => "║",
        (x, y) if x == y => "╲",
        _ => "╱",
    }
}

// ── Logical → cell mapping ────────────────────────────────────────────────────

/// Playfield cell area: row 0 is the HUD, row 1 the top border, the last two
/// rows the bottom border and the controls hint; columns 0 and `term_w - 1`
/// are the side walls.
fn to_cell(x: i32, y: i32, state: &GameState, term_w: u16, term_h: u16) -> (u16, u16) {
    let inner_w = i32::from(term_w.saturating_sub(2)).max(1);
    let inner_h = i32::from(term_h.saturating_sub(4)).max(1);
    let x = x.clamp(0, state.config.width);
    let y = y.clamp(0, state.config.height);
    let col = 1 + x * (inner_w - 1) / state.config.width.max(1);
    let row = 2 + y * (inner_h - 1) / state.config.height.max(1);
    (col as u16, row as u16)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term_w, term_h)?;
    draw_hud(out, state, term_w)?;

    for bomb in state.bombs.iter().flatten() {
        draw_bomb(out, bomb, state, term_w, term_h)?;
    }
    if let Some(beam) = &state.beam {
        draw_beam(out, beam, state, term_w, term_h)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, explosion, state, term_w, term_h)?;
    }
    draw_player(out, &state.player, state, term_w, term_h)?;
    draw_controls_hint(out, term_h)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, term_w, term_h)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let w = term_w as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, term_h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(term_w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, term_w: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Frame: {:>6}", state.frame)))?;

    let remaining = state.bombs.iter().flatten().count();
    let bombs_text = format!("Bombs: {}", remaining);
    let rx = term_w.saturating_sub(bombs_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&bombs_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    player: &Player,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let glyph = match player.look {
        Look::Normal => facing_glyph(player.dire),
        Look::Cheer => "★",
        Look::Defeated => "✗",
    };
    let (cx, cy) = player.rect.center();
    let (col, row) = to_cell(cx, cy, state, term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_bomb<W: Write>(
    out: &mut W,
    bomb: &Bomb,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (cx, cy) = bomb.rect.center();
    let (col, row) = to_cell(cx, cy, state, term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(bomb_color(bomb.color)))?;
    out.queue(Print(bomb_glyph(bomb)))?;
    Ok(())
}

fn draw_beam<W: Write>(
    out: &mut W,
    beam: &Beam,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (cx, cy) = beam.rect.center();
    let (col, row) = to_cell(cx, cy, state, term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BEAM))?;
    out.queue(Print(beam_glyph(beam)))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &Explosion,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (cx, cy) = explosion.rect.center();
    let (col, row) = to_cell(cx, cy, state, term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_EXPLOSION))?;
    out.queue(Print(EXPLOSION_FRAMES[explosion.frame_index()]))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, term_h: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ ↓ → / W A S D : Move   SPACE : Beam   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];

    let cx = term_w / 2;
    let start_row = (term_h / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
