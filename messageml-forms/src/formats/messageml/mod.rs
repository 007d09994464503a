//! MessageML author format (input only)
//!
//! Author markup is whatever a bot or user writes: a `messageML` root with
//! `form`, `div` and field elements below it. The builder also accepts a
//! PresentationML envelope as root, so rendered output can be fed back in.

use crate::builder::{build_with_options, BuildOptions};
use crate::error::FormatError;
use crate::format::Format;
use crate::raw::parse_xml;
use crate::tree::Document;

pub struct MessageMlFormat;

impl Format for MessageMlFormat {
    fn name(&self) -> &str {
        "messageml"
    }

    fn description(&self) -> &str {
        "MessageML author markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mml", "messageml", "xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &BuildOptions) -> Result<Document, FormatError> {
        let raw = parse_xml(source)?;
        Ok(build_with_options(&raw, options)?)
    }
}
