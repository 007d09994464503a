//! Document → Markdown summary.

use crate::schema::ElementKind;
use crate::tree::{Document, ElementId};

pub const FORM_HEADER: &str = "Form (log into desktop client to answer):\n---\n";
pub const FORM_FOOTER: &str = "---\n";

pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_element(doc, doc.root_id(), &mut out);
    out
}

fn write_children(doc: &Document, id: ElementId, out: &mut String) {
    for (child, _) in doc.children(id) {
        write_element(doc, child, out);
    }
}

fn write_element(doc: &Document, id: ElementId, out: &mut String) {
    let element = doc.get(id);
    match element.kind {
        ElementKind::MessageMl => write_children(doc, id, out),
        ElementKind::Form => {
            out.push_str(FORM_HEADER);
            write_children(doc, id, out);
            out.push_str(FORM_FOOTER);
        }
        ElementKind::Div => {
            write_children(doc, id, out);
            out.push_str("\n\n");
        }
        ElementKind::Button => field_line(out, element.kind, &doc.text_content(id)),
        ElementKind::Checkbox => {
            field_line(out, element.kind, element.attribute("name").unwrap_or_default())
        }
        ElementKind::PersonSelector => {
            out.push_str(&format!("({})\n\n", element.kind.display_name()));
        }
        ElementKind::Text => out.push_str(element.text.as_deref().unwrap_or_default()),
    }
}

fn field_line(out: &mut String, kind: ElementKind, detail: &str) {
    out.push_str(&format!("({}:{detail})\n", kind.display_name()));
}
