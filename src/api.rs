//! Host-facing editor core.
//!
//! The core exposes exactly three operations to its host, independent of
//! transport: mutate (`add_text`), project state (`document_state`), and
//! compile (`generate_code`). They live behind the [`EditorCore`] trait so a
//! host can swap the in-process core for a test double at construction time
//! instead of patching a live instance.

use anyhow::Result;
use serde::Serialize;

use crate::codegen;
use crate::document::{SceneDocument, Snapshot};
use crate::types::TextElement;

/// One entry of the host-facing state projection: the element fields
/// flattened the way host UI layers consume them.
#[derive(Debug, Clone, Serialize)]
pub struct ElementState {
    pub content: String,
    pub x: i32,
    pub y: i32,
    pub color: u32,
    pub font_size: u32,
}

impl From<&TextElement> for ElementState {
    fn from(el: &TextElement) -> Self {
        ElementState {
            content: el.content.clone(),
            x: el.position.x,
            y: el.position.y,
            color: el.color.0,
            font_size: el.font_size,
        }
    }
}

/// The capability set a host drives the editor through.
pub trait EditorCore {
    /// Append a text element at the given canvas position.
    fn add_text(&mut self, content: &str, x: i32, y: i32);

    /// JSON list of `{content, x, y, color, font_size}` entries, paint order.
    fn document_state(&self) -> Result<String>;

    /// Current DSL source for the whole scene.
    fn generate_code(&self) -> String;

    /// Point-in-time copy of the scene, for driving the rendering bridge.
    fn snapshot(&self) -> Snapshot;
}

/// The real in-process core: owns the scene document, feeds the code
/// generator and rendering bridge from the same snapshots.
#[derive(Debug, Default)]
pub struct Editor {
    document: SceneDocument,
}

impl Editor {
    pub fn new() -> Self {
        Editor::default()
    }

    /// Build a core around an existing document (e.g. one a host loaded
    /// from its own storage).
    pub fn with_document(document: SceneDocument) -> Self {
        Editor { document }
    }

    pub fn document(&self) -> &SceneDocument {
        &self.document
    }
}

impl EditorCore for Editor {
    fn add_text(&mut self, content: &str, x: i32, y: i32) {
        self.document.add_text(content, x, y);
    }

    fn document_state(&self) -> Result<String> {
        let entries: Vec<ElementState> =
            self.document.elements().iter().map(Into::into).collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    fn generate_code(&self) -> String {
        codegen::generate(&self.document.snapshot())
    }

    fn snapshot(&self) -> Snapshot {
        self.document.snapshot()
    }
}
