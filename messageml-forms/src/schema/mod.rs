//! Declarative element contracts
//!
//!     Every element type is described by one [`ElementSchema`] entry: which attributes it
//!     takes and how they are normalized, where it may be placed, and what content it may
//!     hold. The builder never branches on the element type itself, it only reads the
//!     table. Supporting a new form field means adding a variant to [`ElementKind`], one
//!     schema entry below, and one case in each renderer.
//!
//!     The attribute rules live in ./attributes.rs, placement and content rules in
//!     ./content.rs.

pub mod attributes;
pub mod content;

use attributes::{AttributeRule, DefaultValue, Normalize, Requirement, ValueListStyle, ValueSet};
use content::PatternPart;
use serde::{Deserialize, Serialize};

/// The closed set of semantic element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    MessageMl,
    Form,
    Div,
    Button,
    Checkbox,
    PersonSelector,
    Text,
}

impl ElementKind {
    /// Form fields, in declaration order.
    pub const FIELDS: [ElementKind; 3] = [
        ElementKind::Button,
        ElementKind::Checkbox,
        ElementKind::PersonSelector,
    ];

    pub fn tag(self) -> &'static str {
        self.schema().tag
    }

    pub fn schema(self) -> &'static ElementSchema {
        match self {
            ElementKind::MessageMl => &MESSAGEML,
            ElementKind::Form => &FORM,
            ElementKind::Div => &DIV,
            ElementKind::Button => &BUTTON,
            ElementKind::Checkbox => &CHECKBOX,
            ElementKind::PersonSelector => &PERSON_SELECTOR,
            ElementKind::Text => &TEXT,
        }
    }

    /// Resolve an author-syntax tag name.
    pub fn from_tag(tag: &str) -> Option<ElementKind> {
        [
            ElementKind::MessageMl,
            ElementKind::Form,
            ElementKind::Div,
            ElementKind::Button,
            ElementKind::Checkbox,
            ElementKind::PersonSelector,
        ]
        .into_iter()
        .find(|kind| kind.tag() == tag)
    }

    pub fn is_field(self) -> bool {
        Self::FIELDS.contains(&self)
    }

    /// Human readable name used by the markdown summary.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::MessageMl => "MessageML",
            ElementKind::Form => "Form",
            ElementKind::Div => "Div",
            ElementKind::Button => "Button",
            ElementKind::Checkbox => "Checkbox",
            ElementKind::PersonSelector => "Person Selector",
            ElementKind::Text => "Text",
        }
    }
}

/// How far up the tree the required container may sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainmentPolicy {
    /// The container must be the immediate parent.
    Direct,
    /// The container may be any ancestor.
    Transitive,
}

impl ContainmentPolicy {
    pub(crate) fn relation_prefix(&self) -> &'static str {
        match self {
            ContainmentPolicy::Direct => "",
            ContainmentPolicy::Transitive => "inner ",
        }
    }
}

/// Where an element may appear in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Only as the document root.
    Root,
    /// Under any element; `nestable: false` forbids an ancestor of the same kind.
    Anywhere { nestable: bool },
    /// Under `container`, with a default policy that configuration may override.
    Within {
        container: ElementKind,
        policy: ContainmentPolicy,
    },
}

/// Which attributes an element accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSet {
    Listed(&'static [AttributeRule]),
    /// The element takes no attributes at all.
    Forbidden,
}

/// The permitted shape of an element's realized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    Any,
    /// No child elements and no text.
    Empty,
    /// Character content only; `required` demands a non-empty label.
    Text { required: bool },
}

#[derive(Debug)]
pub struct ElementSchema {
    pub kind: ElementKind,
    pub tag: &'static str,
    pub attributes: AttributeSet,
    pub requirements: &'static [Requirement],
    pub placement: Placement,
    pub content: ContentModel,
}

impl ElementSchema {
    pub fn rule(&self, name: &str) -> Option<&'static AttributeRule> {
        match self.attributes {
            AttributeSet::Listed(rules) => rules.iter().find(|rule| rule.name == name),
            AttributeSet::Forbidden => None,
        }
    }
}

const BOOLEAN_VALUES: ValueSet = ValueSet {
    values: &["true", "false"],
    style: ValueListStyle::Bracketed,
};

const FORM_ATTRIBUTES: &[AttributeRule] = &[AttributeRule::plain("id")];
const FORM_REQUIREMENTS: &[Requirement] = &[Requirement::always("id")];

const DIV_ATTRIBUTES: &[AttributeRule] = &[AttributeRule::plain("class")];

const CHECKBOX_ATTRIBUTES: &[AttributeRule] = &[
    AttributeRule::plain("name"),
    AttributeRule {
        name: "value",
        normalize: Normalize::Verbatim,
        values: None,
        default: Some(DefaultValue::Stored("on")),
    },
    AttributeRule {
        name: "checked",
        normalize: Normalize::Lowercase,
        values: Some(BOOLEAN_VALUES),
        default: Some(DefaultValue::Implicit("false")),
    },
];
const CHECKBOX_REQUIREMENTS: &[Requirement] = &[Requirement::always("name")];

static MESSAGEML: ElementSchema = ElementSchema {
    kind: ElementKind::MessageMl,
    tag: "messageML",
    attributes: AttributeSet::Listed(&[]),
    requirements: &[],
    placement: Placement::Root,
    content: ContentModel::Any,
};

static FORM: ElementSchema = ElementSchema {
    kind: ElementKind::Form,
    tag: "form",
    attributes: AttributeSet::Listed(FORM_ATTRIBUTES),
    requirements: FORM_REQUIREMENTS,
    placement: Placement::Anywhere { nestable: false },
    content: ContentModel::Any,
};

static DIV: ElementSchema = ElementSchema {
    kind: ElementKind::Div,
    tag: "div",
    attributes: AttributeSet::Listed(DIV_ATTRIBUTES),
    requirements: &[],
    placement: Placement::Anywhere { nestable: true },
    content: ContentModel::Any,
};

static BUTTON: ElementSchema = ElementSchema {
    kind: ElementKind::Button,
    tag: "button",
    attributes: AttributeSet::Listed(&[
        AttributeRule {
            name: "name",
            normalize: Normalize::Lowercase,
            values: None,
            default: None,
        },
        AttributeRule {
            name: "id",
            normalize: Normalize::Lowercase,
            values: None,
            default: None,
        },
        AttributeRule {
            name: "type",
            normalize: Normalize::Lowercase,
            values: Some(ValueSet {
                values: &["action", "reset"],
                style: ValueListStyle::Prose,
            }),
            default: Some(DefaultValue::Stored("action")),
        },
        AttributeRule {
            name: "class",
            normalize: Normalize::Lowercase,
            values: Some(ValueSet {
                values: &[
                    "primary",
                    "secondary",
                    "primary-destructive",
                    "secondary-destructive",
                ],
                style: ValueListStyle::Prose,
            }),
            default: None,
        },
    ]),
    requirements: &[Requirement {
        attribute: "name",
        alternatives: &["id"],
        when: Some(("type", "action")),
        condition: Some("generic action buttons"),
    }],
    placement: Placement::Within {
        container: ElementKind::Form,
        policy: ContainmentPolicy::Transitive,
    },
    content: ContentModel::Text { required: true },
};

static CHECKBOX: ElementSchema = ElementSchema {
    kind: ElementKind::Checkbox,
    tag: "checkbox",
    attributes: AttributeSet::Listed(CHECKBOX_ATTRIBUTES),
    requirements: CHECKBOX_REQUIREMENTS,
    placement: Placement::Within {
        container: ElementKind::Form,
        policy: ContainmentPolicy::Transitive,
    },
    content: ContentModel::Text { required: false },
};

static PERSON_SELECTOR: ElementSchema = ElementSchema {
    kind: ElementKind::PersonSelector,
    tag: "person-selector",
    attributes: AttributeSet::Forbidden,
    requirements: &[],
    placement: Placement::Within {
        container: ElementKind::Form,
        policy: ContainmentPolicy::Direct,
    },
    content: ContentModel::Empty,
};

static TEXT: ElementSchema = ElementSchema {
    kind: ElementKind::Text,
    tag: "#text",
    attributes: AttributeSet::Forbidden,
    requirements: &[],
    placement: Placement::Anywhere { nestable: true },
    content: ContentModel::Empty,
};

/// `<div class="checkbox-group">`: one checkbox input and an optional label.
pub const CHECKBOX_GROUP_PATTERN: &[PatternPart] = &[
    PatternPart {
        tag: "input",
        min: 1,
        max: 1,
    },
    PatternPart {
        tag: "label",
        min: 0,
        max: 1,
    },
];
