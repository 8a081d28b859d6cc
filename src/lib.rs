//! Generates the static character-classification tables a lexer uses for its
//! "is letter / alphanumeric / uppercase" fast paths.
//!
//! Every encoding gets a 256-entry byte table of [`tables::Flags`]. UTF-8
//! additionally gets sorted codepoint range lists per [`tables::Category`]
//! covering `0x100..=0x10FFFF` minus the surrogates.

pub mod config;
pub mod driver;
pub mod encoding;
pub mod error;
pub mod tables;

pub use error::{Error, Result};
