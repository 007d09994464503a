//! Shared helpers for building documents from markup snippets.
#![allow(dead_code)]

use messageml_forms::{Document, Element, ElementId, Message, MessageMlContext};

pub const ENVELOPE_OPEN: &str = r#"<div data-format="PresentationML" data-version="2.0">"#;
pub const FORM_HEADER: &str = "Form (log into desktop client to answer):\n---\n";

/// Parse markup that is expected to be valid.
pub fn parse(source: &str) -> Message {
    MessageMlContext::default()
        .parse(source)
        .unwrap_or_else(|err| panic!("expected {source} to parse, got: {err}"))
}

/// Parse markup that is expected to fail and return the error message.
pub fn parse_err(source: &str) -> String {
    match MessageMlContext::default().parse(source) {
        Ok(message) => panic!(
            "expected {source} to fail, rendered as {}",
            message.presentation_ml()
        ),
        Err(err) => err.to_string(),
    }
}

/// `body` wrapped in an author form.
pub fn in_form(form_id: &str, body: &str) -> String {
    format!(r#"<messageML><form id="{form_id}">{body}</form></messageML>"#)
}

/// `body` wrapped in a form inside the PresentationML envelope.
pub fn presentation(form_id: &str, body: &str) -> String {
    format!(r#"{ENVELOPE_OPEN}<form id="{form_id}">{body}</form></div>"#)
}

/// The markdown envelope of a single form.
pub fn markdown(body: &str) -> String {
    format!("{FORM_HEADER}{body}---\n")
}

/// Follow child indexes from the root.
pub fn element_at(doc: &Document, path: &[usize]) -> ElementId {
    path.iter()
        .fold(doc.root_id(), |id, &index| doc.get(id).children[index])
}

pub fn get<'d>(doc: &'d Document, path: &[usize]) -> &'d Element {
    doc.get(element_at(doc, path))
}
