// src/error.rs

/// Failures surfaced to the caller of [`crate::driver`].
///
/// A codepoint that has no representation in the requested encoding is not an
/// error; classifiers report it as `None` and the compilers record it as zero
/// flags.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown encoding: {0}")]
    EncodingNotFound(String),

    #[error("encoding {0} is not ASCII compatible")]
    NotAsciiCompatible(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize tables: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
