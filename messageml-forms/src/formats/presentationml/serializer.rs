//! Canonical PresentationML output.
//!
//! The output is a pure function of the tree: attributes are written in a fixed
//! order per element type and stored defaults are always spelled out, so parsing
//! the output again yields an equal document.

pub use crate::builder::presentation::PRESENTATION_VERSION;

use crate::builder::presentation::{FORMAT_ATTR, FORMAT_NAME, VERSION_ATTR};
use crate::schema::ElementKind;
use crate::tree::{Document, Element, ElementId};

const BUTTON_ATTRIBUTE_ORDER: &[&str] = &["type", "class", "name", "id"];
const CHECKBOX_ATTRIBUTE_ORDER: &[&str] = &["name", "checked", "value"];

pub fn serialize(doc: &Document) -> String {
    let mut writer = Writer::default();
    writer.document(doc);
    writer.out
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn document(&mut self, doc: &Document) {
        self.out.push_str(&format!(
            "<div {FORMAT_ATTR}=\"{FORMAT_NAME}\" {VERSION_ATTR}=\"{PRESENTATION_VERSION}\">"
        ));
        self.children(doc, doc.root_id());
        self.out.push_str("</div>");
    }

    fn children(&mut self, doc: &Document, id: ElementId) {
        for (child, _) in doc.children(id) {
            self.element(doc, child);
        }
    }

    fn element(&mut self, doc: &Document, id: ElementId) {
        let element = doc.get(id);
        match element.kind {
            ElementKind::MessageMl => self.children(doc, id),
            ElementKind::Form => self.container(doc, id, "form", &[("id", element.attribute("id"))]),
            ElementKind::Div => {
                self.container(doc, id, "div", &[("class", element.attribute("class"))])
            }
            ElementKind::Button => {
                self.open("button", ordered(element, BUTTON_ATTRIBUTE_ORDER));
                self.out.push('>');
                self.text(&doc.text_content(id));
                self.out.push_str("</button>");
            }
            ElementKind::Checkbox => self.checkbox(doc, id, element),
            ElementKind::PersonSelector => {
                self.open("div", vec![("class", Some("person-selector"))]);
                self.out.push_str("/>");
            }
            ElementKind::Text => self.text(element.text.as_deref().unwrap_or_default()),
        }
    }

    /// A checkbox with a text child is rendered as a labelled group, even when the
    /// label is empty; without one it is a bare input.
    fn checkbox(&mut self, doc: &Document, id: ElementId, element: &Element) {
        let labelled = !element.children.is_empty();
        if labelled {
            self.out.push_str("<div class=\"checkbox-group\">");
        }

        let mut attributes = vec![("type", Some("checkbox"))];
        attributes.extend(ordered(element, CHECKBOX_ATTRIBUTE_ORDER));
        self.open("input", attributes);
        self.out.push_str("/>");

        if labelled {
            self.out.push_str("<label>");
            self.text(&doc.text_content(id));
            self.out.push_str("</label></div>");
        }
    }

    fn container(
        &mut self,
        doc: &Document,
        id: ElementId,
        tag: &str,
        attributes: &[(&str, Option<&str>)],
    ) {
        self.open(tag, attributes.to_vec());
        if doc.get(id).children.is_empty() {
            self.out.push_str("/>");
            return;
        }
        self.out.push('>');
        self.children(doc, id);
        self.out.push_str(&format!("</{tag}>"));
    }

    fn open(&mut self, tag: &str, attributes: Vec<(&str, Option<&str>)>) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attributes {
            if let Some(value) = value {
                self.out
                    .push_str(&format!(" {name}=\"{}\"", escape_xml(value)));
            }
        }
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(&escape_xml(text));
    }
}

fn ordered<'e>(element: &'e Element, order: &[&'static str]) -> Vec<(&'static str, Option<&'e str>)> {
    order
        .iter()
        .map(|&name| (name, element.attribute(name)))
        .collect()
}

pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}
