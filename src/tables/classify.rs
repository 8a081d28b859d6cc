// src/tables/classify.rs

use super::flags::Flags;
use crate::encoding::Encoding;

/// Classification oracle: flags for a code value, or `None` when the value has
/// no representation. Callers treat `None` like empty flags.
///
/// `Sync` because the per-category range scans may share one classifier
/// across threads.
pub trait Classifier: Sync {
    fn classify(&self, code: u32) -> Option<Flags>;
}

impl<F> Classifier for F
where
    F: Fn(u32) -> Option<Flags> + Sync,
{
    #[inline]
    fn classify(&self, code: u32) -> Option<Flags> {
        self(code)
    }
}

/// Classifies through an encoding's code-to-character mapping and Unicode
/// character properties.
#[derive(Debug, Clone, Copy)]
pub struct EncodingClassifier {
    encoding: Encoding,
}

impl EncodingClassifier {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Classifier for EncodingClassifier {
    #[inline]
    fn classify(&self, code: u32) -> Option<Flags> {
        self.encoding.decode(code).map(Flags::of_char)
    }
}
