//! Raw node tree → validated [`Document`]
//!
//!     Building happens in two steps per node. First the raw node is mapped to a
//!     [`Candidate`]: either directly by tag name (author syntax) or by the presentation
//!     normalizer in ./presentation.rs, which recognizes rendered fragments such as
//!     `<div class="checkbox-group">` and reconstructs the semantic element they stand
//!     for. Second, every candidate goes through the same validation path regardless of
//!     where it came from:
//!
//!         1. attribute whitelist + normalization + stored defaults
//!         2. placement against the already attached ancestors
//!         3. enumerations and conditional requirements
//!         4. content shape of the raw children
//!
//!     Only then is the element attached and its children built, in document order.
//!     The first failure aborts the whole build; no partial tree is ever returned.

pub(crate) mod presentation;

use crate::error::ValidationError;
use crate::raw::RawNode;
use crate::schema::attributes;
use crate::schema::content::{self, ContainmentRules};
use crate::schema::ElementKind;
use crate::tree::{Document, Element, ElementId, Origin};
use std::borrow::Cow;
use tracing::debug;

/// Knobs that influence validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub containment: ContainmentRules,
}

impl BuildOptions {
    pub fn new(containment: ContainmentRules) -> Self {
        Self { containment }
    }
}

/// Build a document with the default containment policies.
pub fn build(raw: &RawNode) -> Result<Document, ValidationError> {
    build_with_options(raw, &BuildOptions::default())
}

pub fn build_with_options(
    raw: &RawNode,
    options: &BuildOptions,
) -> Result<Document, ValidationError> {
    TreeBuilder::new(options).build(raw)
}

/// A raw fragment mapped onto an element type, not yet validated.
#[derive(Debug)]
pub(crate) struct Candidate<'a> {
    pub kind: ElementKind,
    pub attributes: Vec<(&'a str, &'a str)>,
    pub children: Cow<'a, [RawNode]>,
    pub origin: Origin,
}

impl<'a> Candidate<'a> {
    /// Author syntax: the node is the element, verbatim.
    fn author(kind: ElementKind, node: &'a RawNode) -> Self {
        Self {
            kind,
            attributes: borrowed_attributes(node).collect(),
            children: Cow::Borrowed(node.children()),
            origin: Origin::Author,
        }
    }
}

pub(crate) fn borrowed_attributes(node: &RawNode) -> impl Iterator<Item = (&str, &str)> {
    node.attributes()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
}

struct TreeBuilder<'o> {
    options: &'o BuildOptions,
    document: Document,
}

impl<'o> TreeBuilder<'o> {
    fn new(options: &'o BuildOptions) -> Self {
        Self {
            options,
            document: Document::new(),
        }
    }

    fn build(mut self, raw: &RawNode) -> Result<Document, ValidationError> {
        let root = self.resolve_root(raw)?;
        self.attach(root, None)?;
        Ok(self.document)
    }

    fn resolve_root<'a>(&self, raw: &'a RawNode) -> Result<Candidate<'a>, ValidationError> {
        if let Some(envelope) = presentation::recognize_envelope(raw)? {
            return Ok(envelope);
        }
        match raw.tag() {
            Some(tag) if tag == ElementKind::MessageMl.tag() => {
                Ok(Candidate::author(ElementKind::MessageMl, raw))
            }
            tag => Err(ValidationError::InvalidRoot {
                tag: tag.unwrap_or(ElementKind::Text.tag()).to_string(),
            }),
        }
    }

    fn resolve<'a>(&self, raw: &'a RawNode) -> Result<Candidate<'a>, ValidationError> {
        if let Some(candidate) = presentation::recognize(raw)? {
            return Ok(candidate);
        }
        let tag = raw.tag().unwrap_or_default();
        ElementKind::from_tag(tag)
            .map(|kind| Candidate::author(kind, raw))
            .ok_or_else(|| ValidationError::UnknownElement {
                tag: tag.to_string(),
            })
    }

    fn attach(
        &mut self,
        candidate: Candidate<'_>,
        parent: Option<ElementId>,
    ) -> Result<ElementId, ValidationError> {
        let schema = candidate.kind.schema();
        let origin = candidate.origin;

        let attributes = attributes::collect(schema, candidate.attributes, origin)?;
        content::check_placement(schema, &self.options.containment, &self.document, parent)?;
        attributes::check_rules(schema, &attributes)?;
        content::check_content(schema, &candidate.children, origin)?;

        debug!(element = schema.tag, ?origin, ?attributes, "attaching element");
        let id = self
            .document
            .attach(Element::new(candidate.kind, attributes, origin), parent);

        for child in candidate.children.iter() {
            match child {
                RawNode::Text(text) => {
                    self.document
                        .attach(Element::text_node(text, origin), Some(id));
                }
                RawNode::Element { .. } => {
                    let child = self.resolve(child)?;
                    self.attach(child, Some(id))?;
                }
            }
        }

        Ok(id)
    }
}
