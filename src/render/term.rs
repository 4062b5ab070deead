//! Terminal drawing surface.
//!
//! Maps the editor's pixel-style canvas coordinates onto terminal cells
//! (fixed cell metrics, one glyph per cell) and writes the result with
//! crossterm. Draw calls rasterize into an in-memory cell grid; `present`
//! pushes the grid to the terminal in one queued batch.

use std::io::Write;

use anyhow::{Result, bail};
use crossterm::{cursor, queue, style, terminal};

use crate::types::Color;

use super::{DrawSurface, SurfaceProvider};

/// Approximate pixel metrics of one terminal cell. Canvas x/y divide by
/// these to land on a column/row, so DSL coordinates keep their meaning
/// when previewed in a cell grid.
pub const CELL_W: i32 = 8;
pub const CELL_H: i32 = 16;

/// Alpha values below this render dimmed — the closest a cell terminal
/// gets to translucency.
const DIM_ALPHA: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TermCell {
    ch: char,
    color: Color,
}

const BLANK: TermCell = TermCell {
    ch: ' ',
    color: Color::WHITE,
};

/// A cell-grid surface positioned at a fixed origin on the terminal screen.
pub struct TermSurface {
    origin_col: u16,
    origin_row: u16,
    width: u16,
    height: u16,
    grid: Vec<Vec<TermCell>>,
}

impl TermSurface {
    fn new(origin_col: u16, origin_row: u16, width: u16, height: u16) -> Self {
        TermSurface {
            origin_col,
            origin_row,
            width,
            height,
            grid: vec![vec![BLANK; width as usize]; height as usize],
        }
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.grid[row as usize][col as usize] = TermCell { ch, color };
    }

    /// Write the current grid to the terminal at the surface origin.
    pub fn present(&self, stdout: &mut impl Write) -> Result<()> {
        for (row, cells) in self.grid.iter().enumerate() {
            queue!(
                stdout,
                cursor::MoveTo(self.origin_col, self.origin_row + row as u16)
            )?;
            for cell in cells {
                let fg = style::Color::Rgb {
                    r: cell.color.r(),
                    g: cell.color.g(),
                    b: cell.color.b(),
                };
                queue!(stdout, style::SetForegroundColor(fg))?;
                if cell.color.a() < DIM_ALPHA {
                    queue!(stdout, style::SetAttribute(style::Attribute::Dim))?;
                }
                queue!(stdout, style::Print(cell.ch))?;
                if cell.color.a() < DIM_ALPHA {
                    queue!(stdout, style::SetAttribute(style::Attribute::Reset))?;
                }
            }
        }
        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl DrawSurface for TermSurface {
    fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(BLANK);
        }
    }

    fn draw_text(&mut self, content: &str, x: i32, y: i32, color: Color) {
        let row = y.div_euclid(CELL_H);
        let start_col = x.div_euclid(CELL_W);
        for (i, ch) in content.chars().enumerate() {
            // Control characters have no glyph in a cell grid.
            if ch.is_control() {
                continue;
            }
            self.put(start_col + i as i32, row, ch, color);
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let col0 = x.div_euclid(CELL_W);
        let row0 = y.div_euclid(CELL_H);
        // i32::div_ceil is unstable on this toolchain; for a positive divisor,
        // div_euclid plus a carry when rem_euclid is nonzero is equivalent.
        let wi = w as i32;
        let hi = h as i32;
        let cols = (wi.div_euclid(CELL_W) + (wi.rem_euclid(CELL_W) != 0) as i32).max(1);
        let rows = (hi.div_euclid(CELL_H) + (hi.rem_euclid(CELL_H) != 0) as i32).max(1);
        for row in row0..row0 + rows {
            for col in col0..col0 + cols {
                self.put(col, row, '█', color);
            }
        }
    }
}

/// Acquires [`TermSurface`]s on the process terminal.
///
/// `rows_reserved` terminal rows at the top stay free for host chrome
/// (menu/status lines); the surface occupies the rest.
pub struct TerminalProvider {
    pub rows_reserved: u16,
}

impl SurfaceProvider for TerminalProvider {
    type Surface = TermSurface;

    fn acquire(&self, target: &str) -> Result<TermSurface> {
        if target != "terminal" {
            bail!("unknown surface '{target}' (this provider only serves 'terminal')");
        }
        let (term_w, term_h) = terminal::size()?;
        if term_h <= self.rows_reserved {
            bail!(
                "Terminal too small: {term_h} rows, need more than {}",
                self.rows_reserved
            );
        }
        Ok(TermSurface::new(
            0,
            self.rows_reserved,
            term_w,
            term_h - self.rows_reserved,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TermSurface {
        TermSurface::new(0, 0, 20, 5)
    }

    #[test]
    fn text_lands_on_the_scaled_cell() {
        let mut s = surface();
        s.draw_text("AB", 16, 32, Color::WHITE);
        assert_eq!(s.grid[2][2].ch, 'A');
        assert_eq!(s.grid[2][3].ch, 'B');
    }

    #[test]
    fn negative_coordinates_clip_silently() {
        let mut s = surface();
        s.draw_text("off", -100, -100, Color::WHITE);
        assert!(s.grid.iter().flatten().all(|c| c.ch == ' '));
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut s = surface();
        s.draw_rect(0, 0, 160, 80, Color(0xFF0000FF));
        s.clear();
        assert!(s.grid.iter().flatten().all(|c| *c == BLANK));
    }

    #[test]
    fn provider_rejects_unknown_targets() {
        let provider = TerminalProvider { rows_reserved: 1 };
        assert!(provider.acquire("canvas-42").is_err());
    }
}
