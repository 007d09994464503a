//! Attribute whitelisting, normalization, defaults and conditional requirements.
//!
//! Validation runs in two passes because the builder checks placement in between:
//! [`collect`] rejects unknown names and produces the normalized map with stored
//! defaults injected, [`check_rules`] then enforces enumerations and requirements on
//! that map.

use super::{AttributeSet, ElementSchema};
use crate::error::ValidationError;
use crate::tree::{Attributes, Origin};

/// How a raw attribute value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    Verbatim,
    Lowercase,
}

/// Wording used when a value falls outside its enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueListStyle {
    /// `Attribute "type" must be "action" or "reset"`
    Prose,
    /// `Attribute "checked" of element "checkbox" can only be one of the following values: [true, false].`
    Bracketed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSet {
    pub values: &'static [&'static str],
    pub style: ValueListStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Injected into the attribute map and therefore always rendered.
    Stored(&'static str),
    /// Logical default only; the attribute stays absent unless the author wrote it.
    Implicit(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRule {
    pub name: &'static str,
    pub normalize: Normalize,
    /// Enumerated values are always compared and stored lower-cased.
    pub values: Option<ValueSet>,
    pub default: Option<DefaultValue>,
}

impl AttributeRule {
    /// A free-form attribute kept exactly as written.
    pub const fn plain(name: &'static str) -> Self {
        Self {
            name,
            normalize: Normalize::Verbatim,
            values: None,
            default: None,
        }
    }

    fn normalize(&self, raw: &str) -> String {
        if self.values.is_some() || self.normalize == Normalize::Lowercase {
            raw.to_lowercase()
        } else {
            raw.to_string()
        }
    }
}

/// `attribute` (or one of its `alternatives`) must carry a non-blank value,
/// optionally only while another attribute holds a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub attribute: &'static str,
    pub alternatives: &'static [&'static str],
    pub when: Option<(&'static str, &'static str)>,
    /// Completes "Attribute \"x\" is required for ..." for conditional rules.
    pub condition: Option<&'static str>,
}

impl Requirement {
    pub const fn always(attribute: &'static str) -> Self {
        Self {
            attribute,
            alternatives: &[],
            when: None,
            condition: None,
        }
    }

    fn applies(&self, attributes: &Attributes) -> bool {
        match self.when {
            Some((name, value)) => attributes.get(name).map(String::as_str) == Some(value),
            None => true,
        }
    }

    fn is_satisfied(&self, attributes: &Attributes) -> bool {
        std::iter::once(&self.attribute)
            .chain(self.alternatives)
            .filter_map(|name| attributes.get(*name))
            .any(|value| !value.trim().is_empty())
    }
}

/// Whitelist and normalize the raw attributes of one element.
///
/// Elements that take no attributes report the first offender differently per
/// origin: author markup gets the blanket message, presentation markup names the
/// attribute.
pub fn collect<'a, I>(
    schema: &ElementSchema,
    raw: I,
    origin: Origin,
) -> Result<Attributes, ValidationError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let rules = match schema.attributes {
        AttributeSet::Listed(rules) => rules,
        AttributeSet::Forbidden => {
            return match (raw.into_iter().next(), origin) {
                (None, _) => Ok(Attributes::new()),
                (Some(_), Origin::Author) => Err(ValidationError::AttributesNotAllowed {
                    tag: schema.tag.to_string(),
                }),
                (Some((name, _)), Origin::Presentation) => Err(ValidationError::UnknownAttribute {
                    tag: schema.tag.to_string(),
                    attribute: name.to_string(),
                }),
            };
        }
    };

    let mut attributes = Attributes::new();
    for (name, value) in raw {
        let rule = rules
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| ValidationError::UnknownAttribute {
                tag: schema.tag.to_string(),
                attribute: name.to_string(),
            })?;
        attributes.insert(rule.name.to_string(), rule.normalize(value));
    }

    for rule in rules {
        if let Some(DefaultValue::Stored(default)) = rule.default {
            attributes
                .entry(rule.name.to_string())
                .or_insert_with(|| default.to_string());
        }
    }

    Ok(attributes)
}

/// Enforce enumerations (in declaration order), then requirements.
pub fn check_rules(schema: &ElementSchema, attributes: &Attributes) -> Result<(), ValidationError> {
    if let AttributeSet::Listed(rules) = schema.attributes {
        for rule in rules {
            let (Some(set), Some(value)) = (rule.values, attributes.get(rule.name)) else {
                continue;
            };
            if !set.values.contains(&value.as_str()) {
                return Err(ValidationError::InvalidAttributeValue {
                    tag: schema.tag.to_string(),
                    attribute: rule.name.to_string(),
                    allowed: set.values.iter().map(|v| v.to_string()).collect(),
                    style: set.style,
                });
            }
        }
    }

    for requirement in schema.requirements {
        if requirement.applies(attributes) && !requirement.is_satisfied(attributes) {
            return Err(ValidationError::MissingRequiredAttribute {
                tag: schema.tag.to_string(),
                attribute: requirement.attribute.to_string(),
                condition: requirement.condition.map(str::to_string),
            });
        }
    }

    Ok(())
}
