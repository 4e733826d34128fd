/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only translates
/// state into terminal commands, scaling the pixel playfield onto whatever
/// terminal cells are available.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use fighter_fury::entities::Owner;
use fighter_fury::geometry::Rect;
use fighter_fury::settings::{Orientation, Rgb};
use fighter_fury::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::DarkGreen;
const C_BUTTON: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps playfield pixels onto the terminal cells inside the border.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    origin_col: u16,
    origin_row: u16,
    cols: u16,
    rows: u16,
    world: Rect,
}

impl Viewport {
    /// Row 0 is the HUD, rows 1 and `height - 2` are the border, the last row
    /// holds the controls hint.
    pub fn new(width: u16, height: u16, world: Rect) -> Self {
        Viewport {
            origin_col: 1,
            origin_row: 2,
            cols: width.saturating_sub(2).max(1),
            rows: height.saturating_sub(4).max(1),
            world,
        }
    }

    fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let col = (x - self.world.x) as i64 * self.cols as i64 / self.world.width.max(1) as i64;
        let row = (y - self.world.y) as i64 * self.rows as i64 / self.world.height.max(1) as i64;
        (
            self.origin_col as i32 + col as i32,
            self.origin_row as i32 + row as i32,
        )
    }

    /// Centre of the terminal cell, in playfield pixels.
    pub fn to_world(&self, col: u16, row: u16) -> (i32, i32) {
        let c = col.saturating_sub(self.origin_col) as i64;
        let r = row.saturating_sub(self.origin_row) as i64;
        let w = self.world.width as i64;
        let h = self.world.height as i64;
        let x = (2 * c + 1) * w / (2 * self.cols as i64);
        let y = (2 * r + 1) * h / (2 * self.rows as i64);
        (self.world.x + x as i32, self.world.y + y as i32)
    }

    /// Inclusive cell span covered by `rect`, clipped to the play area.
    /// Every non-empty rect covers at least one cell.
    fn span(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let (c0, r0) = self.to_cell(rect.left(), rect.top());
        let (c1, r1) = self.to_cell(rect.right() - 1, rect.bottom() - 1);
        let min_col = self.origin_col as i32;
        let max_col = (self.origin_col + self.cols) as i32 - 1;
        let min_row = self.origin_row as i32;
        let max_row = (self.origin_row + self.rows) as i32 - 1;
        if c1 < min_col || c0 > max_col || r1 < min_row || r0 > max_row {
            return None;
        }
        Some((
            c0.max(min_col) as u16,
            r0.max(min_row) as u16,
            c1.min(max_col) as u16,
            r1.min(max_row) as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height, state.playfield());

    out.queue(style::SetBackgroundColor(rgb(state.settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    for enemy in &state.fleet.enemies {
        fill(out, &view, &enemy.rect(), C_ENEMY, '▼')?;
    }
    for projectile in state.projectiles() {
        draw_projectile(out, &view, state.settings.orientation, projectile)?;
    }
    fill(out, &view, &state.player.rect(), C_PLAYER, '█')?;

    draw_controls_hint(out, height)?;

    if state.play_button_visible() {
        draw_play_button(out, &view, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    let stats = &state.stats;

    // Score and high score: left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Hi:{:>7}",
        stats.score, stats.high_score
    )))?;

    // Level: centre
    let level_str = format!("[ LEVEL {} ]", stats.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Lives: right
    let lives_text = format!("Lives: {}", "♥".repeat(stats.lives_left as usize));
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = view.span(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph)
        .take((c1 - c0 + 1) as usize)
        .collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: &Viewport,
    orientation: Orientation,
    projectile: &fighter_fury::entities::Projectile,
) -> std::io::Result<()> {
    let glyph = match (projectile.owner, orientation) {
        (Owner::Player, Orientation::Vertical) => '║',
        (Owner::Player, Orientation::Horizontal) => '═',
        (Owner::Enemy, Orientation::Vertical) => '↓',
        (Owner::Enemy, Orientation::Horizontal) => '←',
    };
    fill(out, view, &projectile.rect(), rgb(projectile.color), glyph)
}

// ── Play button (title screen) ────────────────────────────────────────────────

fn draw_play_button<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    let button = state.play_button();
    let Some((c0, r0, c1, r1)) = view.span(&button) else {
        return Ok(());
    };
    let inner = (c1 - c0 + 1) as usize;
    out.queue(style::SetBackgroundColor(C_BUTTON))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(" ".repeat(inner)))?;
    }

    let label = "Play";
    let mid_row = r0 + (r1 - r0) / 2;
    let col = c0 + (inner as u16).saturating_sub(label.len() as u16) / 2;
    out.queue(cursor::MoveTo(col, mid_row))?;
    out.queue(Print(label))?;
    out.queue(style::SetBackgroundColor(rgb(state.settings.bg_color)))?;

    if state.stats.high_score > 0 {
        let best = format!("Best Score: {}", state.stats.high_score);
        let col = c0 + (inner as u16).saturating_sub(best.chars().count() as u16) / 2;
        out.queue(cursor::MoveTo(col, r1 + 1))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&best))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → ↑ ↓ / WASD : Move   SPACE : Shoot   P / click : Play   Q : Quit",
    ))?;
    Ok(())
}
