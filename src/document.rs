//! Scene Document — the canonical, ordered element sequence.
//!
//! The document is the single source of truth for the scene. Insertion order
//! is significant: it is both the paint order (later elements draw on top)
//! and the order statements appear in generated code. The only mutator is
//! `add_text`, which strictly appends; downstream consumers read through
//! point-in-time [`Snapshot`]s and never hold a live reference.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_COLOR, DEFAULT_FONT_SIZE, Position, TextElement};

/// Ordered scene model. Created empty at editor start, mutated only through
/// its own operations, dropped when the session ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDocument {
    elements: Vec<TextElement>,
}

impl SceneDocument {
    pub fn new() -> Self {
        SceneDocument::default()
    }

    /// Append a text element with the default color and font size.
    ///
    /// Any content (including empty) and any coordinates are accepted as
    /// given; clipping is the rendering surface's concern. Returns the new
    /// element's index, which is also its paint-order position.
    pub fn add_text(&mut self, content: &str, x: i32, y: i32) -> usize {
        self.elements.push(TextElement {
            content: content.to_string(),
            position: Position::new(x, y),
            color: DEFAULT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
        });
        self.elements.len() - 1
    }

    /// Take an immutable, point-in-time copy of the element sequence.
    ///
    /// The copy is made in one step while the document is borrowed, so a
    /// snapshot always reflects a whole number of mutations, never a
    /// half-appended element.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elements: self.elements.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }
}

/// An immutable view of the document at a point in time, handed to the code
/// generator and the rendering bridge so both always observe the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    elements: Vec<TextElement>,
}

impl Snapshot {
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a TextElement;
    type IntoIter = std::slice::Iter<'a, TextElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn add_text_appends_in_call_order() {
        let mut doc = SceneDocument::new();
        assert_eq!(doc.add_text("a", 0, 0), 0);
        assert_eq!(doc.add_text("b", 10, -5), 1);
        assert_eq!(doc.add_text("", 2, 3), 2);

        let snap = doc.snapshot();
        assert_eq!(snap.len(), 3);
        let contents: Vec<_> = snap.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, ["a", "b", ""]);
    }

    #[test]
    fn add_text_applies_defaults() {
        let mut doc = SceneDocument::new();
        doc.add_text("x", 1, 2);
        let snap = doc.snapshot();
        let el = &snap.elements()[0];
        assert_eq!(el.color, Color::WHITE);
        assert_eq!(el.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(el.position, Position::new(1, 2));
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut doc = SceneDocument::new();
        doc.add_text("first", 0, 0);
        let snap = doc.snapshot();
        doc.add_text("second", 0, 0);
        assert_eq!(snap.len(), 1);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut doc = SceneDocument::new();
        doc.add_text("hello", -3, 7);
        let json = serde_json::to_string(&doc).unwrap();
        let back: SceneDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.elements(), doc.elements());
    }
}
