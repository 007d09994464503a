//! Treeviz formatter for validated documents
//!
//! A visual tree of the semantic elements, one line per element, meant for debugging
//! what the builder made of a piece of markup. Nesting is drawn with box connectors:
//!
//! ```text
//! ⧉ messageML
//! └─ ▤ form id=survey
//!   ├─ ▢ div
//!   │ └─ ⏺ button type=action name=send
//!   │   └─ ◦ "Send"
//!   └─ ☺ person-selector
//! ```
//!
//! Elements recognized from presentation markup are suffixed with `(pml)`.
//! Text labels are truncated to 30 characters.
//!
//! Icons
//!     MessageML: ⧉
//!     Form: ▤
//!     Div: ▢
//!     Button: ⏺
//!     Checkbox: ☑
//!     PersonSelector: ☺
//!     Text: ◦

use crate::error::FormatError;
use crate::format::Format;
use crate::schema::ElementKind;
use crate::tree::{Document, Element, ElementId, Origin};

const MAX_LABEL: usize = 30;

fn icon(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::MessageMl => "⧉",
        ElementKind::Form => "▤",
        ElementKind::Div => "▢",
        ElementKind::Button => "⏺",
        ElementKind::Checkbox => "☑",
        ElementKind::PersonSelector => "☺",
        ElementKind::Text => "◦",
    }
}

fn label(element: &Element) -> String {
    let mut label = match &element.text {
        Some(text) => format!("\"{}\"", truncate(text)),
        None => element.tag().to_string(),
    };
    for (name, value) in &element.attributes {
        label.push_str(&format!(" {name}={value}"));
    }
    if element.origin == Origin::Presentation && element.kind != ElementKind::Text {
        label.push_str(" (pml)");
    }
    label
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_LABEL {
        let head: String = text.chars().take(MAX_LABEL - 1).collect();
        format!("{head}…")
    } else {
        text.to_string()
    }
}

fn format_element(doc: &Document, id: ElementId, prefix: &str, is_last: bool, out: &mut String) {
    let element = doc.get(id);
    let connector = if is_last { "└─" } else { "├─" };
    out.push_str(&format!("{prefix}{connector} {} {}\n", icon(element.kind), label(element)));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(doc, id, &child_prefix, out);
}

fn format_children(doc: &Document, id: ElementId, prefix: &str, out: &mut String) {
    let count = doc.get(id).children.len();
    for (index, (child, _)) in doc.children(id).enumerate() {
        format_element(doc, child, prefix, index + 1 == count, out);
    }
}

/// Render the whole document as a tree.
pub fn to_treeviz_str(doc: &Document) -> String {
    let root = doc.root();
    let mut out = format!("{} {}\n", icon(root.kind), label(root));
    format_children(doc, doc.root_id(), "", &mut out);
    out
}

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the validated elements"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
