//! Validation and dual rendering of MessageML interactive forms
//!
//!     MessageML is the markup bots and users write to post interactive forms into a chat.
//!     This crate turns such markup into a validated semantic tree and renders that tree
//!     two ways: canonical PresentationML for clients that display the live form, and a
//!     flat Markdown summary for clients that cannot.
//!
//!     TLDR: for element authors:
//!         - Every element type is one entry in the schema table (./schema/mod.rs). The
//!           builder never branches on element types, it reads the table.
//!         - A new field needs a variant, a schema entry, and a case in each serializer.
//!         - Presentation syntax is only a different way to spell the same element: the
//!           normalizer (./builder/presentation.rs) maps it to a candidate and the shared
//!           validation path does the rest.
//!
//! Architecture
//!
//!     Data only flows forward:
//!
//!         markup ─ raw.rs ─▶ RawNode ─ builder ─▶ Document ─┬─ presentationml ─▶ String
//!                                                          └─ markdown ───────▶ String
//!
//!     The tree (./tree.rs) is an arena: elements own their children by index and keep
//!     their parent as a plain index, used for containment checks only. Once built, a
//!     document is never mutated.
//!
//!     This is a pure lib: it powers the mml cli but assumes no shell environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ValidationError / FormatError
//!     ├── raw.rs                  # RawNode + roxmltree adapter
//!     ├── schema
//!     │   ├── mod.rs              # ElementKind and the schema table
//!     │   ├── attributes.rs       # whitelist, normalization, requirements
//!     │   └── content.rs          # placement and content shape
//!     ├── tree.rs                 # Document arena
//!     ├── builder
//!     │   ├── mod.rs              # RawNode → Document
//!     │   └── presentation.rs     # presentation fragment recognition
//!     ├── format.rs               # Format trait
//!     ├── registry.rs             # FormatRegistry
//!     ├── formats
//!     │   ├── messageml           # parse only
//!     │   ├── presentationml      # parse + serialize
//!     │   ├── markdown            # serialize only
//!     │   └── treeviz             # debug view
//!     └── context.rs              # MessageMlContext pipeline
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common/mod.rs
//!     └── <element>.rs
//!
//!     Every author facing error message is pinned by a test: their wording is part of
//!     the contract.

pub mod builder;
pub mod context;
pub mod error;
pub mod format;
pub mod formats;
pub mod raw;
pub mod registry;
pub mod schema;
pub mod tree;

pub use builder::{build, build_with_options, BuildOptions};
pub use context::{Message, MessageMlContext};
pub use error::{ErrorKind, FormatError, ValidationError};
pub use format::Format;
pub use raw::{parse_xml, RawNode};
pub use registry::FormatRegistry;
pub use schema::content::ContainmentRules;
pub use schema::{ContainmentPolicy, ElementKind};
pub use tree::{Document, Element, ElementId, Origin};

/// Render a document as canonical PresentationML.
pub fn render_presentation(doc: &Document) -> String {
    formats::presentationml::serializer::serialize(doc)
}

/// Render a document as the Markdown form summary.
pub fn render_markdown(doc: &Document) -> String {
    formats::markdown::serializer::serialize(doc)
}
