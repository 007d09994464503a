//! Placement and content-shape rules.
//!
//! Placement is checked against the chain of already attached ancestors, content
//! against the raw children that are about to be attached, so a violation is
//! reported before anything below the offending element is built.

use super::{ContainmentPolicy, ContentModel, ElementKind, ElementSchema, Placement};
use crate::error::ValidationError;
use crate::raw::RawNode;
use crate::tree::{Document, ElementId, Origin};
use std::collections::BTreeMap;

/// Per-element overrides of the default containment policy.
///
/// Whether a field has to sit directly in its form or may be wrapped in other
/// elements is a deployment decision, so it is configuration rather than code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainmentRules {
    overrides: BTreeMap<ElementKind, ContainmentPolicy>,
}

impl ContainmentRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, kind: ElementKind, policy: ContainmentPolicy) -> Self {
        self.set_policy(kind, policy);
        self
    }

    pub fn set_policy(&mut self, kind: ElementKind, policy: ContainmentPolicy) {
        self.overrides.insert(kind, policy);
    }

    /// The effective policy for `kind`, or `None` if it has no required container.
    pub fn policy_for(&self, kind: ElementKind) -> Option<ContainmentPolicy> {
        match kind.schema().placement {
            Placement::Within { policy, .. } => {
                Some(self.overrides.get(&kind).copied().unwrap_or(policy))
            }
            _ => None,
        }
    }
}

/// Check that an element of `schema` may be attached below `parent`.
pub fn check_placement(
    schema: &ElementSchema,
    rules: &ContainmentRules,
    document: &Document,
    parent: Option<ElementId>,
) -> Result<(), ValidationError> {
    match schema.placement {
        Placement::Root if parent.is_some() => Err(ValidationError::RootOnly {
            tag: schema.tag.to_string(),
        }),
        Placement::Root => Ok(()),
        Placement::Anywhere { nestable: true } => Ok(()),
        Placement::Anywhere { nestable: false } => {
            if document
                .lineage(parent)
                .any(|(_, element)| element.kind == schema.kind)
            {
                Err(ValidationError::NestedElement {
                    tag: schema.tag.to_string(),
                })
            } else {
                Ok(())
            }
        }
        Placement::Within { container, .. } => {
            let policy = rules
                .policy_for(schema.kind)
                .unwrap_or(ContainmentPolicy::Transitive);
            let contained = match policy {
                ContainmentPolicy::Direct => parent
                    .map(|id| document.get(id).kind == container)
                    .unwrap_or(false),
                ContainmentPolicy::Transitive => document
                    .lineage(parent)
                    .any(|(_, element)| element.kind == container),
            };
            if contained {
                Ok(())
            } else {
                Err(ValidationError::IllegalContainment {
                    tag: schema.tag.to_string(),
                    container: container.tag().to_string(),
                    policy,
                })
            }
        }
    }
}

/// Check the raw children of an element against its content model.
///
/// Presentation markup gets the generic "invalid PresentationML" message for a
/// malformed label, since the fragment it came from may not map to one defect.
pub fn check_content(
    schema: &ElementSchema,
    children: &[RawNode],
    origin: Origin,
) -> Result<(), ValidationError> {
    let tag = schema.tag.to_string();
    match schema.content {
        ContentModel::Any => Ok(()),
        ContentModel::Empty if children.is_empty() => Ok(()),
        ContentModel::Empty => Err(ValidationError::ContentNotAllowed { tag }),
        ContentModel::Text { required } => {
            if let Some(child) = children.iter().find_map(RawNode::tag) {
                return Err(match origin {
                    Origin::Author => ValidationError::ElementNotAllowed {
                        tag,
                        child: child.to_string(),
                    },
                    Origin::Presentation => ValidationError::InvalidPresentation { tag },
                });
            }
            if children.len() > 1 {
                return Err(match origin {
                    Origin::Author => ValidationError::FragmentedText { tag },
                    Origin::Presentation => ValidationError::InvalidPresentation { tag },
                });
            }
            let has_text = children
                .iter()
                .any(|child| matches!(child, RawNode::Text(text) if !text.is_empty()));
            if required && !has_text {
                return Err(match origin {
                    Origin::Author => ValidationError::MissingText { tag },
                    Origin::Presentation => ValidationError::InvalidPresentation { tag },
                });
            }
            Ok(())
        }
    }
}

/// One slot of a fixed structural pattern: `min..=max` children named `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPart {
    pub tag: &'static str,
    pub min: usize,
    pub max: usize,
}

/// Match `children` against an unordered structural pattern.
///
/// Returns the children grouped per pattern slot, or `None` when a child fits no
/// slot, a slot is over or under filled, or non-blank text sits between the
/// structural children.
pub fn match_structure<'a>(
    children: &'a [RawNode],
    pattern: &[PatternPart],
) -> Option<Vec<Vec<&'a RawNode>>> {
    let mut slots: Vec<Vec<&RawNode>> = vec![Vec::new(); pattern.len()];
    for child in children {
        match child.tag() {
            None if child.is_blank_text() => continue,
            None => return None,
            Some(tag) => {
                let slot = pattern.iter().position(|part| part.tag == tag)?;
                slots[slot].push(child);
            }
        }
    }

    let filled = pattern
        .iter()
        .zip(&slots)
        .all(|(part, found)| (part.min..=part.max).contains(&found.len()));
    filled.then_some(slots)
}
