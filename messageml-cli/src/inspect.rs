//! Views of a validated document for `mml inspect`.

use messageml_forms::formats::treeviz::to_treeviz_str;
use messageml_forms::tree::Attributes;
use messageml_forms::{Document, ElementId, ElementKind, Origin};
use serde::Serialize;

/// Nested form of an element, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Node<'a> {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "no_attributes")]
    pub attributes: &'a Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    pub fn new(doc: &'a Document, id: ElementId) -> Self {
        let element = doc.get(id);
        Node {
            kind: element.kind,
            attributes: &element.attributes,
            text: element.text.as_deref(),
            origin: element.origin,
            children: doc
                .children(id)
                .map(|(child, _)| Node::new(doc, child))
                .collect(),
        }
    }
}

fn no_attributes(attributes: &&Attributes) -> bool {
    attributes.is_empty()
}

pub fn to_tree(doc: &Document) -> String {
    to_treeviz_str(doc)
}

pub fn to_json(doc: &Document, pretty: bool) -> Result<String, serde_json::Error> {
    let root = Node::new(doc, doc.root_id());
    let mut json = if pretty {
        serde_json::to_string_pretty(&root)?
    } else {
        serde_json::to_string(&root)?
    };
    json.push('\n');
    Ok(json)
}
