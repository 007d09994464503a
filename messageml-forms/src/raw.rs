//! Raw attributed nodes, as handed over by the tokenizer.
//!
//! Nothing in here knows about MessageML: a [`RawNode`] is just a tag with its
//! attributes in original case and order, plus ordered children. [`parse_xml`] is the
//! adapter that produces such a tree from markup text using `roxmltree`.

use crate::error::FormatError;
use roxmltree::NodeType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<RawNode>,
    },
    Text(String),
}

impl RawNode {
    pub fn element(tag: &str, attributes: &[(&str, &str)], children: Vec<RawNode>) -> Self {
        RawNode::Element {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children,
        }
    }

    pub fn text(text: &str) -> Self {
        RawNode::Text(text.to_string())
    }

    /// Tag name, or `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            RawNode::Element { tag, .. } => Some(tag),
            RawNode::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            RawNode::Element { attributes, .. } => attributes,
            RawNode::Text(_) => &[],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[RawNode] {
        match self {
            RawNode::Element { children, .. } => children,
            RawNode::Text(_) => &[],
        }
    }

    /// Whether the whitespace separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn is_blank_text(&self) -> bool {
        matches!(self, RawNode::Text(text) if text.trim().is_empty())
    }

    /// Concatenated character content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            RawNode::Text(text) => text.clone(),
            RawNode::Element { children, .. } => {
                children.iter().map(RawNode::text_content).collect()
            }
        }
    }
}

/// Tokenize markup text into a raw node tree.
///
/// Comments and processing instructions are skipped, and whitespace-only text is
/// dropped: indentation between tags carries no meaning in a message.
pub fn parse_xml(source: &str) -> Result<RawNode, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;
    Ok(convert_element(doc.root_element()))
}

fn convert_element(node: roxmltree::Node) -> RawNode {
    let attributes = node
        .attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();

    // Comments and processing instructions split character data into several
    // text nodes; a run of them between two elements is one text child.
    let mut children = Vec::new();
    let mut pending = String::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => {
                flush_text(&mut pending, &mut children);
                children.push(convert_element(child));
            }
            NodeType::Text => pending.push_str(child.text().unwrap_or_default()),
            _ => {}
        }
    }
    flush_text(&mut pending, &mut children);

    RawNode::Element {
        tag: node.tag_name().name().to_string(),
        attributes,
        children,
    }
}

fn flush_text(pending: &mut String, children: &mut Vec<RawNode>) {
    let text = std::mem::take(pending);
    if !text.trim().is_empty() {
        children.push(RawNode::Text(text));
    }
}
