//! Markdown format (output only)
//!
//! Clients that cannot render interactive forms get a flattened text summary instead.
//! Each form becomes a fixed envelope with one line per field:
//!
//! ```text
//! Form (log into desktop client to answer):
//! ---
//! (Button:Send)
//! (Checkbox:newsletter)
//! (Person Selector)
//!
//! ---
//! ```
//!
//! | Element         | Markdown                                   |
//! |-----------------|--------------------------------------------|
//! | form            | header, separator, body, separator         |
//! | div             | children followed by a blank line pair     |
//! | button          | `(Button:<label>)` + newline               |
//! | checkbox        | `(Checkbox:<name>)` + newline              |
//! | person selector | `(Person Selector)` + two newlines         |
//! | text            | verbatim                                   |
//!
//! The summary is lossy by nature, so there is no parser.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Document;

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Plain-text form summary for clients without form support"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize(doc))
    }
}
