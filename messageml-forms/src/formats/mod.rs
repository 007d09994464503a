//! Format implementations
//!
//! This module contains all format implementations that convert between the
//! validated document tree and its text representations.

pub mod markdown;
pub mod messageml;
pub mod presentationml;
pub mod treeviz;

pub use markdown::MarkdownFormat;
pub use messageml::MessageMlFormat;
pub use presentationml::PresentationMlFormat;
pub use treeviz::TreevizFormat;
