use anyhow::{Context, Result};

use crate::api::{Editor, EditorCore};
use crate::document::SceneDocument;
use crate::render::term::{CELL_H, CELL_W};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Moving the placement cursor around the canvas.
    Normal,
    /// Typing the content of a new text element.
    InsertText { buf: String },
    /// Full-screen view of the generated DSL source.
    CodeView,
}

pub struct EditorState {
    pub core: Editor,
    pub file_path: Option<String>,
    /// Placement cursor in canvas cells (converted to pixels on placement).
    pub cursor_col: u16,
    pub cursor_row: u16,
    /// Canvas extent in cells; the cursor never moves past it. Hosts set
    /// this from the acquired surface size.
    pub canvas_cols: u16,
    pub canvas_rows: u16,
    pub mode: Mode,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl EditorState {
    /// Open a scene file, or start an empty session when no path is given
    /// or the file does not exist yet.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let document = match path {
            Some(p) if std::path::Path::new(p).exists() => {
                let json =
                    std::fs::read_to_string(p).with_context(|| format!("Failed to read {p}"))?;
                serde_json::from_str(&json).with_context(|| format!("Failed to parse {p}"))?
            }
            _ => SceneDocument::new(),
        };

        Ok(EditorState {
            core: Editor::with_document(document),
            file_path: path.map(str::to_string),
            cursor_col: 4,
            cursor_row: 2,
            canvas_cols: 80,
            canvas_rows: 24,
            mode: Mode::Normal,
            dirty: false,
            status_message: None,
        })
    }

    pub fn save(&mut self) -> Result<()> {
        let Some(path) = &self.file_path else {
            self.status_message = Some("No file path for this session".into());
            return Ok(());
        };
        let json = serde_json::to_string_pretty(self.core.document())?;
        std::fs::write(path, &json).with_context(|| format!("Failed to write {path}"))?;
        self.dirty = false;
        self.status_message = Some("Saved".into());
        Ok(())
    }

    /// Canvas pixel position of the placement cursor.
    pub fn cursor_canvas(&self) -> (i32, i32) {
        (
            self.cursor_col as i32 * CELL_W,
            self.cursor_row as i32 * CELL_H,
        )
    }

    /// Commit the insert buffer as a new element at the cursor.
    pub fn place_text(&mut self, content: &str) {
        let (x, y) = self.cursor_canvas();
        self.core.add_text(content, x, y);
        self.dirty = true;
        self.status_message = Some(format!("Placed at ({x}, {y})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_uses_cell_scaled_coordinates() {
        let mut state = EditorState::open(None).unwrap();
        state.cursor_col = 3;
        state.cursor_row = 2;
        state.place_text("hi");

        let el = &state.core.document().elements()[0];
        assert_eq!(el.position.x, 3 * CELL_W);
        assert_eq!(el.position.y, 2 * CELL_H);
        assert!(state.dirty);
    }

    #[test]
    fn open_without_path_starts_empty() {
        let state = EditorState::open(None).unwrap();
        assert!(state.core.document().is_empty());
        assert!(!state.dirty);
    }
}
