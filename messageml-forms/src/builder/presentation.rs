//! Presentation normalizer.
//!
//! Maps fragments of rendered PresentationML back to the semantic element they were
//! rendered from. Only the mapping lives here; the resulting [`Candidate`] is
//! validated by the same code as author markup.
//!
//! Recognized signatures:
//!
//! - `<div data-format="PresentationML">` at the root: the document envelope
//! - `<div class="checkbox-group">`: a labelled checkbox
//! - `<input type="checkbox">`: an unlabelled checkbox
//! - `<div class="person-selector">`: a person selector

use super::{borrowed_attributes, Candidate};
use crate::error::ValidationError;
use crate::raw::RawNode;
use crate::schema::attributes::ValueListStyle;
use crate::schema::content::match_structure;
use crate::schema::{ElementKind, CHECKBOX_GROUP_PATTERN};
use crate::tree::Origin;
use std::borrow::Cow;

pub const FORMAT_ATTR: &str = "data-format";
pub const VERSION_ATTR: &str = "data-version";
pub const FORMAT_NAME: &str = "PresentationML";
pub const PRESENTATION_VERSION: &str = "2.0";

const CHECKBOX_GROUP_CLASS: &str = "checkbox-group";
const PERSON_SELECTOR_CLASS: &str = "person-selector";

/// Recognize the `<div data-format="PresentationML">` document envelope.
pub(crate) fn recognize_envelope(node: &RawNode) -> Result<Option<Candidate<'_>>, ValidationError> {
    if node.tag() != Some("div") {
        return Ok(None);
    }
    let Some(format) = node.attribute(FORMAT_ATTR) else {
        return Ok(None);
    };
    if format != FORMAT_NAME {
        return Err(envelope_value_error(FORMAT_ATTR, FORMAT_NAME));
    }
    // An envelope without a version is read as the current one.
    if node
        .attribute(VERSION_ATTR)
        .is_some_and(|version| version != PRESENTATION_VERSION)
    {
        return Err(envelope_value_error(VERSION_ATTR, PRESENTATION_VERSION));
    }

    Ok(Some(Candidate {
        kind: ElementKind::MessageMl,
        attributes: borrowed_attributes(node)
            .filter(|(name, _)| *name != FORMAT_ATTR && *name != VERSION_ATTR)
            .collect(),
        children: Cow::Borrowed(node.children()),
        origin: Origin::Presentation,
    }))
}

fn envelope_value_error(attribute: &str, allowed: &str) -> ValidationError {
    ValidationError::InvalidAttributeValue {
        tag: "div".to_string(),
        attribute: attribute.to_string(),
        allowed: vec![allowed.to_string()],
        style: ValueListStyle::Bracketed,
    }
}

/// Recognize a presentation fragment below the root.
///
/// `Ok(None)` means the node carries no presentation signature and should be
/// resolved by tag name instead.
pub(crate) fn recognize(node: &RawNode) -> Result<Option<Candidate<'_>>, ValidationError> {
    match node.tag() {
        Some("div") if node.has_class(CHECKBOX_GROUP_CLASS) => checkbox_group(node).map(Some),
        Some("div") if node.has_class(PERSON_SELECTOR_CLASS) => person_selector(node).map(Some),
        Some("input") if is_checkbox_input(node) => bare_checkbox(node).map(Some),
        _ => Ok(None),
    }
}

fn is_checkbox_input(node: &RawNode) -> bool {
    node.attribute("type")
        .map(|kind| kind.eq_ignore_ascii_case("checkbox"))
        .unwrap_or(false)
}

/// The marker class must be the only class on a recognized container; anything
/// else would be lost when the element is rendered again.
fn only_marker_class(node: &RawNode, marker: &str) -> bool {
    node.attribute("class")
        .map(|classes| classes.split_whitespace().all(|class| class == marker))
        .unwrap_or(true)
}

fn invalid_checkbox() -> ValidationError {
    ValidationError::InvalidPresentation {
        tag: ElementKind::Checkbox.tag().to_string(),
    }
}

/// `<div class="checkbox-group"><input type="checkbox" …/><label>…</label></div>`
///
/// The shape is checked before any attribute so that a malformed group is always
/// reported generically. Attributes from the group container (other than its
/// marker class) and from the input (other than its `type`) are validated as
/// checkbox attributes. A group always yields a label, empty when none was given.
fn checkbox_group(node: &RawNode) -> Result<Candidate<'_>, ValidationError> {
    if !only_marker_class(node, CHECKBOX_GROUP_CLASS) {
        return Err(invalid_checkbox());
    }
    let slots = match_structure(node.children(), CHECKBOX_GROUP_PATTERN).ok_or_else(invalid_checkbox)?;
    let input = slots[0][0];
    let label = slots[1].first().copied();

    if !is_checkbox_input(input) || !input.children().is_empty() {
        return Err(invalid_checkbox());
    }

    let label_text = match label {
        Some(label) => {
            if !label.attributes().is_empty() || label.children().iter().any(|c| c.tag().is_some()) {
                return Err(invalid_checkbox());
            }
            label.text_content()
        }
        None => String::new(),
    };

    let attributes = borrowed_attributes(node)
        .filter(|(name, _)| *name != "class")
        .chain(borrowed_attributes(input).filter(|(name, _)| *name != "type"))
        .collect();

    Ok(Candidate {
        kind: ElementKind::Checkbox,
        attributes,
        children: Cow::Owned(vec![RawNode::Text(label_text)]),
        origin: Origin::Presentation,
    })
}

/// A lone `<input type="checkbox"/>`: a checkbox without label.
fn bare_checkbox(node: &RawNode) -> Result<Candidate<'_>, ValidationError> {
    if !node.children().is_empty() {
        return Err(invalid_checkbox());
    }
    Ok(Candidate {
        kind: ElementKind::Checkbox,
        attributes: borrowed_attributes(node)
            .filter(|(name, _)| *name != "type")
            .collect(),
        children: Cow::Owned(Vec::new()),
        origin: Origin::Presentation,
    })
}

/// `<div class="person-selector"/>`; anything else on the container is reported by
/// the shared attribute and content checks.
fn person_selector(node: &RawNode) -> Result<Candidate<'_>, ValidationError> {
    if !only_marker_class(node, PERSON_SELECTOR_CLASS) {
        return Err(ValidationError::InvalidPresentation {
            tag: ElementKind::PersonSelector.tag().to_string(),
        });
    }
    Ok(Candidate {
        kind: ElementKind::PersonSelector,
        attributes: borrowed_attributes(node)
            .filter(|(name, _)| *name != "class")
            .collect(),
        children: Cow::Borrowed(node.children()),
        origin: Origin::Presentation,
    })
}
