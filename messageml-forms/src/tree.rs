//! The validated semantic tree.
//!
//! Elements live in an arena owned by [`Document`]; children are listed by
//! [`ElementId`] and each element records its parent's id. Ownership therefore only
//! runs parent to children and the parent link is a plain index used for
//! containment lookups.

use crate::schema::attributes::DefaultValue;
use crate::schema::ElementKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized attribute values keyed by attribute name.
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which syntax an element was recognized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Author,
    Presentation,
}

#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub attributes: Attributes,
    /// Character content, set for [`ElementKind::Text`] only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<ElementId>,
    #[serde(skip)]
    pub parent: Option<ElementId>,
    pub origin: Origin,
}

impl Element {
    pub(crate) fn new(kind: ElementKind, attributes: Attributes, origin: Origin) -> Self {
        Self {
            kind,
            attributes,
            text: None,
            children: Vec::new(),
            parent: None,
            origin,
        }
    }

    pub(crate) fn text_node(text: &str, origin: Origin) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::new(ElementKind::Text, Attributes::new(), origin)
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The attribute value, falling back to the schema's logical default.
    ///
    /// A checkbox without `checked` has no stored value but is logically
    /// unchecked, so `effective_attribute("checked")` yields `"false"`.
    pub fn effective_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name)
            .or_else(|| match self.kind.schema().rule(name)?.default? {
                DefaultValue::Stored(value) | DefaultValue::Implicit(value) => Some(value),
            })
    }
}

/// Equality ignores the origin: the same element written in author or
/// presentation syntax compares equal.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.attributes == other.attributes
            && self.text == other.text
            && self.children == other.children
            && self.parent == other.parent
    }
}

impl Eq for Element {}

/// A fully validated MessageML document.
///
/// Elements are stored in document (pre-)order; the root is always the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append `element` below `parent` and return its id.
    pub(crate) fn attach(&mut self, mut element: Element, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        element.parent = parent;
        self.elements.push(element);
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(id);
        }
        id
    }

    pub fn root_id(&self) -> ElementId {
        ElementId(0)
    }

    pub fn root(&self) -> &Element {
        self.get(self.root_id())
    }

    /// Ids are only handed out by the document itself, so lookup cannot miss.
    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).parent
    }

    pub fn children(&self, id: ElementId) -> impl Iterator<Item = (ElementId, &Element)> + '_ {
        self.get(id)
            .children
            .iter()
            .map(move |&child| (child, self.get(child)))
    }

    /// The `index`-th child of `id`.
    pub fn child(&self, id: ElementId, index: usize) -> Option<&Element> {
        self.get(id).children.get(index).map(|&child| self.get(child))
    }

    /// Walk from `start` (inclusive) up to the root.
    pub fn lineage(&self, start: Option<ElementId>) -> Lineage<'_> {
        Lineage {
            document: self,
            next: start,
        }
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> Lineage<'_> {
        self.lineage(self.parent(id))
    }

    /// Concatenated text below `id`.
    pub fn text_content(&self, id: ElementId) -> String {
        let element = self.get(id);
        match &element.text {
            Some(text) => text.clone(),
            None => element
                .children
                .iter()
                .map(|&child| self.text_content(child))
                .collect(),
        }
    }

    /// All elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (ElementId(index), element))
    }
}

pub struct Lineage<'a> {
    document: &'a Document,
    next: Option<ElementId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = (ElementId, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let element = self.document.get(id);
        self.next = element.parent;
        Some((id, element))
    }
}
