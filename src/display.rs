/// Rendering layer. All terminal drawing lives here.
///
/// `Screen` owns the writer and the arena-to-terminal mapping; it is
/// built once at startup and handed to the loop by reference.  No game
/// logic is performed; this module only translates state into terminal
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};

use crate::entities::{GameState, Positioned, ARENA_HEIGHT, ARENA_WIDTH};
use crate::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Cyan;
const C_BOSS: Color = Color::Magenta;
const C_BULLET_PLAYER: Color = Color::Green;
const C_BULLET_BOSS: Color = Color::Red;
const C_POWER_UP: Color = Color::Yellow;
const C_HUD_PLAYER: Color = Color::Green;
const C_HUD_BOSS: Color = Color::Red;

/// Rows reserved above the arena for the health labels.
const HUD_ROWS: u16 = 1;

// ── Arena → terminal mapping ──────────────────────────────────────────────────

/// A block of terminal cells, half-open on the right and bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

/// Scales the fixed arena onto whatever terminal size is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    fn arena_rows(&self) -> u16 {
        self.rows.saturating_sub(HUD_ROWS)
    }

    fn scale(value: i32, cells: u16, extent: i32) -> i64 {
        (value as i64 * cells as i64).div_euclid(extent as i64)
    }

    fn scale_up(value: i32, cells: u16, extent: i32) -> i64 {
        let num = value as i64 * cells as i64;
        let den = extent as i64;
        num.div_euclid(den) + i64::from(num.rem_euclid(den) != 0)
    }

    /// Terminal cells covered by an arena rectangle.  A non-empty rect
    /// always covers at least one cell; `None` when nothing is on screen.
    pub fn map_rect(&self, rect: &Rect) -> Option<CellRect> {
        let (cols, rows) = (self.cols, self.arena_rows());
        if rect.is_empty() || cols == 0 || rows == 0 {
            return None;
        }

        let x0 = Self::scale(rect.x, cols, ARENA_WIDTH);
        let x1 = Self::scale_up(rect.right(), cols, ARENA_WIDTH).max(x0 + 1);
        let y0 = Self::scale(rect.y, rows, ARENA_HEIGHT);
        let y1 = Self::scale_up(rect.bottom(), rows, ARENA_HEIGHT).max(y0 + 1);

        let x0 = x0.clamp(0, cols as i64);
        let x1 = x1.clamp(0, cols as i64);
        let y0 = y0.clamp(0, rows as i64);
        let y1 = y1.clamp(0, rows as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some(CellRect {
            col: x0 as u16,
            row: y0 as u16 + HUD_ROWS,
            cols: (x1 - x0) as u16,
            rows: (y1 - y0) as u16,
        })
    }
}

// ── Screen ────────────────────────────────────────────────────────────────────

pub struct Screen<W: Write> {
    out: W,
    viewport: Viewport,
    keyboard_enhanced: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Screen {
            out,
            viewport: Viewport::new(cols, rows),
            keyboard_enhanced: false,
        }
    }

    /// Switch to the alternate screen and hide the cursor.  Also asks the
    /// terminal for key-release events; terminals without the kitty
    /// protocol ignore this and fall back to the hold window.
    pub fn enter(&mut self) -> std::io::Result<()> {
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.out.execute(cursor::Hide)?;
        self.keyboard_enhanced = self
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(())
    }

    /// Undo `enter`.  Safe to call after a partial or failed `enter`; every
    /// step is attempted regardless of earlier failures.
    pub fn leave(&mut self) {
        if std::mem::take(&mut self.keyboard_enhanced) {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(cols, rows);
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one complete frame.
    pub fn render(&mut self, state: &GameState) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_starfield()?;
        self.fill(&state.player.rect(), C_PLAYER, "█")?;
        self.fill(&state.boss.rect(), C_BOSS, "█")?;

        for bullet in &state.player.bullets {
            self.fill(&bullet.rect(), C_BULLET_PLAYER, "■")?;
        }
        for bullet in &state.boss.bullets {
            self.fill(&bullet.rect(), C_BULLET_BOSS, "■")?;
        }
        for power_up in &state.boss.power_ups {
            self.fill(&power_up.rect(), C_POWER_UP, "◆")?;
        }

        self.draw_hud(state)?;
        self.finish()
    }

    /// Centred end-of-match banner drawn over the last frame.
    pub fn render_end_message(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        let width = text.chars().count() as u16 + 4;
        let border = "═".repeat(width as usize - 2);
        let lines = [
            format!("╔{}╗", border),
            format!("║ {} ║", text),
            format!("╚{}╝", border),
        ];

        let cx = self.viewport.cols / 2;
        let start_row = (self.viewport.rows / 2).saturating_sub(lines.len() as u16 / 2);
        let col = cx.saturating_sub(width / 2);

        self.out.queue(style::SetForegroundColor(color))?;
        for (i, line) in lines.iter().enumerate() {
            self.out.queue(cursor::MoveTo(col, start_row + i as u16))?;
            self.out.queue(Print(line))?;
        }
        self.finish()
    }

    // ── Background ────────────────────────────────────────────────────────────

    fn draw_starfield(&mut self) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_STAR))?;
        for row in HUD_ROWS..self.viewport.rows {
            for col in 0..self.viewport.cols {
                if is_star(col, row) {
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(Print("."))?;
                }
            }
        }
        Ok(())
    }

    // ── Entities ──────────────────────────────────────────────────────────────

    fn fill(&mut self, rect: &Rect, color: Color, glyph: &str) -> std::io::Result<()> {
        let Some(cells) = self.viewport.map_rect(rect) else {
            return Ok(());
        };
        let line = glyph.repeat(cells.cols as usize);
        self.out.queue(style::SetForegroundColor(color))?;
        for row in cells.row..cells.row + cells.rows {
            self.out.queue(cursor::MoveTo(cells.col, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    // ── HUD (row 0) ───────────────────────────────────────────────────────────

    fn draw_hud(&mut self, state: &GameState) -> std::io::Result<()> {
        // Player, left
        let health = format!("Health: {}", state.player.health);
        let bullets = format!("Max Bullets: {}", state.player.max_bullets);
        self.out.queue(style::SetForegroundColor(C_HUD_PLAYER))?;
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(Print(&health))?;
        self.out
            .queue(cursor::MoveTo(4 + health.chars().count() as u16, 0))?;
        self.out.queue(Print(&bullets))?;

        // Boss, right
        let boss = format!("Health: {}", state.boss.health);
        let rx = self
            .viewport
            .cols
            .saturating_sub(boss.chars().count() as u16 + 1);
        self.out.queue(style::SetForegroundColor(C_HUD_BOSS))?;
        self.out.queue(cursor::MoveTo(rx, 0))?;
        self.out.queue(Print(&boss))?;
        Ok(())
    }

    /// Park cursor in a harmless spot and flush.
    fn finish(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

/// Fixed, sparse star pattern so the background does not flicker.
fn is_star(col: u16, row: u16) -> bool {
    let h = (col as u32)
        .wrapping_mul(73_856_093)
        ^ (row as u32).wrapping_mul(19_349_663);
    h % 47 == 0
}
