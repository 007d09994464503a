//! One-stop pipeline: markup text → validated tree → both renderings.

use crate::builder::{build_with_options, BuildOptions};
use crate::error::{FormatError, ValidationError};
use crate::formats::{markdown, presentationml};
use crate::raw::{parse_xml, RawNode};
use crate::tree::Document;
use tracing::debug;

/// Holds the build options shared by every message parsed through it.
#[derive(Debug, Clone, Default)]
pub struct MessageMlContext {
    options: BuildOptions,
}

impl MessageMlContext {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Tokenize and validate `source`, which may be author or presentation markup.
    pub fn parse(&self, source: &str) -> Result<Message, FormatError> {
        let raw = parse_xml(source)?;
        Ok(self.build(&raw)?)
    }

    /// Validate an already tokenized tree.
    pub fn build(&self, raw: &RawNode) -> Result<Message, ValidationError> {
        let document = build_with_options(raw, &self.options)?;
        debug!(elements = document.len(), "document built");
        Ok(Message { document })
    }
}

/// A validated message. Renderings are computed on demand and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    document: Document,
}

impl Message {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn presentation_ml(&self) -> String {
        presentationml::serializer::serialize(&self.document)
    }

    pub fn markdown(&self) -> String {
        markdown::serializer::serialize(&self.document)
    }
}
