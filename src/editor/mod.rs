//! Interactive terminal editor — the host adapter shipped with the crate.
//!
//! Owns the terminal, forwards key events as core mutations, and keeps the
//! two derived views live: the canvas preview (through the rendering bridge)
//! and the generated DSL source (through the code generator). Every edit
//! runs one synchronous mutate → snapshot → generate/replay cycle, so the
//! picture and the code can never drift apart.

mod input;
pub mod state;

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, event, execute, queue, style, terminal};

use crate::api::EditorCore;
use crate::render::RenderBridge;
use crate::render::term::{TermSurface, TerminalProvider};
use crate::types::Color;

use input::Action;
use state::{EditorState, Mode};

/// Rows reserved above the canvas for the menu/status bar.
const CHROME_ROWS: u16 = 1;

/// Cursor marker drawn on top of the scene, opaque green.
const CURSOR_COLOR: Color = Color(0x00FF00FF);

pub struct Studio {
    state: EditorState,
    bridge: RenderBridge<TermSurface>,
}

impl Studio {
    /// Open a session and acquire the terminal surface up front, so an
    /// unusable terminal fails here instead of on the first draw.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let mut state = EditorState::open(path)?;
        let provider = TerminalProvider {
            rows_reserved: CHROME_ROWS,
        };
        let bridge = RenderBridge::acquire(&provider, "terminal")?;

        let (cols, rows) = bridge.surface().size();
        state.canvas_cols = cols;
        state.canvas_rows = rows;
        state.cursor_col = state.cursor_col.min(cols.saturating_sub(1));
        state.cursor_row = state.cursor_row.min(rows.saturating_sub(1));

        Ok(Studio { state, bridge })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.main_loop(&mut stdout);

        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        result
    }

    fn main_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        self.full_redraw(stdout)?;

        loop {
            let event = event::read()?;
            let action = input::handle_event(&mut self.state, event);

            match action {
                Action::Continue => {}
                Action::Redraw => self.full_redraw(stdout)?,
                Action::Quit => {
                    if self.state.dirty {
                        self.state.status_message =
                            Some("Unsaved changes! q again to quit, Ctrl-s to save".into());
                        self.full_redraw(stdout)?;
                        if let event::Event::Key(k) = event::read()? {
                            if k.code == event::KeyCode::Char('q') {
                                break;
                            }
                            if k.code == event::KeyCode::Char('s')
                                && k.modifiers.contains(event::KeyModifiers::CONTROL)
                            {
                                if let Err(e) = self.state.save() {
                                    self.state.status_message = Some(format!("Save failed: {e}"));
                                }
                            }
                        }
                        self.state.status_message = None;
                        self.full_redraw(stdout)?;
                    } else {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn full_redraw(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
        self.render_chrome(stdout)?;

        match self.state.mode {
            Mode::CodeView => self.render_code_view(stdout)?,
            _ => self.render_canvas(stdout)?,
        }

        stdout.flush()?;
        Ok(())
    }

    /// Replay the scene through the bridge, overlay the placement cursor,
    /// and push the surface to the terminal.
    fn render_canvas(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        use crate::render::DrawSurface;

        self.bridge.replay(&self.state.core.snapshot());

        let (cx, cy) = self.state.cursor_canvas();
        self.bridge.surface_mut().draw_text("+", cx, cy, CURSOR_COLOR);

        self.bridge.surface().present(stdout)
    }

    fn render_code_view(&self, stdout: &mut io::Stdout) -> Result<()> {
        let code = self.state.core.generate_code();
        for (i, line) in code.lines().enumerate() {
            queue!(
                stdout,
                cursor::MoveTo(0, CHROME_ROWS + i as u16),
                style::Print(line),
            )?;
        }
        Ok(())
    }

    fn render_chrome(&self, stdout: &mut io::Stdout) -> Result<()> {
        let left = match &self.state.mode {
            Mode::InsertText { buf } => format!(" Text: {buf}▏"),
            Mode::CodeView => " Generated code — Esc to return".to_string(),
            Mode::Normal => {
                " TURBO STUDIO  arrows:move  t:text  g:code  ^s:save  q:quit".to_string()
            }
        };

        let file = self.state.file_path.as_deref().unwrap_or("[scratch]");
        let dirty = if self.state.dirty { "*" } else { "" };
        let right = match &self.state.status_message {
            Some(msg) => format!("{msg}  {file}{dirty}"),
            None => format!("{file}{dirty}"),
        };

        let (term_w, _) = terminal::size()?;
        let pad = (term_w as usize)
            .saturating_sub(left.chars().count() + right.chars().count() + 1);

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            style::SetAttribute(style::Attribute::Reverse),
            style::Print(format!("{left}{}{right} ", " ".repeat(pad))),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        Ok(())
    }
}
