//! PresentationML format
//!
//!     PresentationML is the canonical markup clients use to display a live form. Every
//!     semantic element has exactly one rendering:
//!
//!     | Element          | PresentationML                                                      |
//!     |------------------|---------------------------------------------------------------------|
//!     | root             | `<div data-format="PresentationML" data-version="2.0">…</div>`      |
//!     | form             | `<form id="…">…</form>`                                             |
//!     | div              | `<div[ class="…"]>…</div>`                                          |
//!     | button           | `<button type="…"[ class="…"][ name="…"][ id="…"]>label</button>`   |
//!     | checkbox + label | `<div class="checkbox-group"><input type="checkbox" …/><label>…</label></div>` |
//!     | checkbox         | `<input type="checkbox" name="…"[ checked="…"] value="…"/>`         |
//!     | person selector  | `<div class="person-selector"/>`                                    |
//!
//!     Parsing goes through the same builder as author markup, with the presentation
//!     normalizer (see ../../builder/presentation.rs) mapping the fragments above back
//!     to their elements. Re-parsing serializer output yields an equal document.

pub mod serializer;

use crate::builder::{build_with_options, BuildOptions};
use crate::error::FormatError;
use crate::format::Format;
use crate::raw::parse_xml;
use crate::tree::Document;

pub struct PresentationMlFormat;

impl Format for PresentationMlFormat {
    fn name(&self) -> &str {
        "presentationml"
    }

    fn description(&self) -> &str {
        "Canonical presentation markup rendered by chat clients"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pml", "html"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &BuildOptions) -> Result<Document, FormatError> {
        let raw = parse_xml(source)?;
        Ok(build_with_options(&raw, options)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serializer::serialize(doc))
    }
}
