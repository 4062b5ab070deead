//! Code generation — the deterministic scene-to-source compiler.
//!
//! Turns a document [`Snapshot`] into Turbo DSL source: a `turbo::go!` block
//! with one `text!` statement per element, in paint order. The generator is a
//! pure function over the snapshot — identical snapshot contents always
//! produce byte-identical output, regardless of when the snapshot was taken.
//!
//! Template correctness is this module's entire failure-avoidance burden:
//! string escaping must round-trip arbitrary Unicode content through the
//! DSL's string lexer, and colors must come back out of the 8-digit hex
//! literal bit-exact.

use std::fmt::Write;

use crate::document::Snapshot;
use crate::types::DEFAULT_FONT_SIZE;

/// Generate Turbo DSL source for a snapshot.
///
/// An empty snapshot yields an empty-bodied `turbo::go!` block, which is a
/// valid program. `font_size` is emitted only when it differs from the
/// `text!` default of 24; all other arguments are always present, in fixed
/// order.
pub fn generate(snapshot: &Snapshot) -> String {
    let mut code = String::from("turbo::go! {\n");

    for el in snapshot {
        code.push_str(&format!(
            "    text!(\"{}\", x = {}, y = {}, color = 0x{:08X}",
            escape(&el.content),
            el.position.x,
            el.position.y,
            el.color.0,
        ));
        if el.font_size != DEFAULT_FONT_SIZE {
            code.push_str(&format!(", font_size = {}", el.font_size));
        }
        code.push_str(");\n");
    }

    code.push_str("}\n");
    code
}

/// Escape content for a double-quoted DSL string literal.
///
/// Total over Unicode: quotes and backslashes get a backslash prefix, the
/// common control characters use their short forms, and every other control
/// character falls back to `\u{...}`. Everything else passes through
/// verbatim, so no content is unencodable.
fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SceneDocument;

    /// Undo `escape` using the DSL's string-literal lexing rules.
    fn unescape(literal: &str) -> String {
        let mut out = String::new();
        let mut chars = literal.chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next().unwrap() {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                '0' => out.push('\0'),
                'u' => {
                    assert_eq!(chars.next(), Some('{'));
                    let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                    out.push(char::from_u32(u32::from_str_radix(&hex, 16).unwrap()).unwrap());
                }
                other => panic!("unknown escape \\{other}"),
            }
        }
        out
    }

    #[test]
    fn empty_document_is_a_valid_empty_program() {
        let doc = SceneDocument::new();
        assert_eq!(generate(&doc.snapshot()), "turbo::go! {\n}\n");
    }

    #[test]
    fn emits_one_statement_per_element_in_order() {
        let mut doc = SceneDocument::new();
        doc.add_text("Hello", 100, 100);
        doc.add_text("World", 50, 50);
        let code = generate(&doc.snapshot());
        assert_eq!(
            code,
            "turbo::go! {\n\
             \x20   text!(\"Hello\", x = 100, y = 100, color = 0xFFFFFFFF);\n\
             \x20   text!(\"World\", x = 50, y = 50, color = 0xFFFFFFFF);\n\
             }\n"
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let mut doc = SceneDocument::new();
        doc.add_text("same", -7, 3);
        let a = generate(&doc.snapshot());
        let b = generate(&doc.snapshot());
        assert_eq!(a, b);
    }

    #[test]
    fn color_is_eight_hex_digits_zero_padded() {
        // Low-valued color must keep its leading zeros.
        let snap = snapshot_of(serde_json::json!([
            {"content": "c", "position": {"x": 0, "y": 0}, "color": 0x0000_00FFu32}
        ]));
        assert!(generate(&snap).contains("color = 0x000000FF"));
    }

    #[test]
    fn non_default_font_size_is_emitted() {
        let snap = snapshot_of(serde_json::json!([
            {"content": "big", "position": {"x": 0, "y": 0}, "font_size": 32}
        ]));
        assert!(generate(&snap).contains("font_size = 32"));

        // Default size stays elided.
        let mut doc = SceneDocument::new();
        doc.add_text("small", 0, 0);
        assert!(!generate(&doc.snapshot()).contains("font_size"));
    }

    #[test]
    fn escaping_round_trips_through_the_string_lexer() {
        let nasty = "quote \" backslash \\ newline \n tab \t bell \u{7} ünïcode 🎮";
        assert_eq!(unescape(&escape(nasty)), nasty);

        let mut doc = SceneDocument::new();
        doc.add_text(nasty, 0, 0);
        let code = generate(&doc.snapshot());
        let literal = code
            .split("text!(\"")
            .nth(1)
            .unwrap()
            .split("\", x = ")
            .next()
            .unwrap();
        assert_eq!(unescape(literal), nasty);
    }

    /// Build a snapshot with non-default element values. `add_text` only
    /// appends defaults, so custom colors/sizes come in through serde.
    fn snapshot_of(elements: serde_json::Value) -> Snapshot {
        let doc: SceneDocument =
            serde_json::from_value(serde_json::json!({ "elements": elements })).unwrap();
        doc.snapshot()
    }
}
