//! Error types for building and converting MessageML documents

use crate::schema::attributes::ValueListStyle;
use crate::schema::ContainmentPolicy;
use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The source is not well-formed markup
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The markup is well-formed but violates an element contract
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownAttribute,
    InvalidAttributeValue,
    MissingRequiredAttribute,
    IllegalContainment,
    IllegalContent,
}

/// A structural or attribute defect that aborts the build.
///
/// The `Display` output is the exact message surfaced to message authors, so
/// the wording of every variant is part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Attribute \"{attribute}\" is not allowed in \"{tag}\"")]
    UnknownAttribute { tag: String, attribute: String },

    #[error("Element \"{tag}\" may not have attributes")]
    AttributesNotAllowed { tag: String },

    #[error("{}", allowed_values_message(.tag, .attribute, .allowed, .style))]
    InvalidAttributeValue {
        tag: String,
        attribute: String,
        allowed: Vec<String>,
        style: ValueListStyle,
    },

    #[error("{}", missing_attribute_message(.attribute, .condition.as_deref()))]
    MissingRequiredAttribute {
        tag: String,
        attribute: String,
        condition: Option<String>,
    },

    #[error(
        "Element \"{tag}\" can only be a {}child of the following elements: [{container}]",
        .policy.relation_prefix()
    )]
    IllegalContainment {
        tag: String,
        container: String,
        policy: ContainmentPolicy,
    },

    #[error("Element \"{tag}\" cannot be nested inside another \"{tag}\"")]
    NestedElement { tag: String },

    #[error("Element \"{tag}\" can only be used as the document root")]
    RootOnly { tag: String },

    #[error("Invalid root element \"{tag}\": expected \"messageML\" or a PresentationML envelope")]
    InvalidRoot { tag: String },

    #[error("Invalid MessageML content at element \"{tag}\"")]
    UnknownElement { tag: String },

    #[error("Element \"{child}\" is not allowed in \"{tag}\"")]
    ElementNotAllowed { tag: String, child: String },

    #[error("Element \"{tag}\" may not have child elements or text content")]
    ContentNotAllowed { tag: String },

    #[error("Element \"{tag}\" must have a text label")]
    MissingText { tag: String },

    #[error("Element \"{tag}\" must have a single text label")]
    FragmentedText { tag: String },

    #[error("Invalid PresentationML for the \"{tag}\" element")]
    InvalidPresentation { tag: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::UnknownAttribute { .. } | ValidationError::AttributesNotAllowed { .. } => {
                ErrorKind::UnknownAttribute
            }
            ValidationError::InvalidAttributeValue { .. } => ErrorKind::InvalidAttributeValue,
            ValidationError::MissingRequiredAttribute { .. } => ErrorKind::MissingRequiredAttribute,
            ValidationError::IllegalContainment { .. }
            | ValidationError::NestedElement { .. }
            | ValidationError::RootOnly { .. }
            | ValidationError::InvalidRoot { .. } => ErrorKind::IllegalContainment,
            ValidationError::UnknownElement { .. }
            | ValidationError::ElementNotAllowed { .. }
            | ValidationError::ContentNotAllowed { .. }
            | ValidationError::MissingText { .. }
            | ValidationError::FragmentedText { .. }
            | ValidationError::InvalidPresentation { .. } => ErrorKind::IllegalContent,
        }
    }
}

fn allowed_values_message(
    tag: &str,
    attribute: &str,
    allowed: &[String],
    style: &ValueListStyle,
) -> String {
    match style {
        ValueListStyle::Prose => {
            let quoted: Vec<String> = allowed.iter().map(|v| format!("\"{v}\"")).collect();
            let listed = match quoted.split_last() {
                Some((last, [])) => last.clone(),
                Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
                None => String::new(),
            };
            format!("Attribute \"{attribute}\" must be {listed}")
        }
        ValueListStyle::Bracketed => format!(
            "Attribute \"{attribute}\" of element \"{tag}\" can only be one of the following values: [{}].",
            allowed.join(", ")
        ),
    }
}

fn missing_attribute_message(attribute: &str, condition: Option<&str>) -> String {
    match condition {
        Some(condition) => format!("Attribute \"{attribute}\" is required for {condition}"),
        None => format!("The attribute \"{attribute}\" is required"),
    }
}
