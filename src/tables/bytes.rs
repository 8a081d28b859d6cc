// src/tables/bytes.rs
// Dense 256-entry table consulted by the lexer before it falls back to
// decoding a full character.

use super::{
    classify::{Classifier, EncodingClassifier},
    flags::Flags,
};
use crate::encoding::Encoding;

/// Label used when a table is identical to the plain ASCII table.
pub const ASCII_TABLE_NAME: &str = "ascii";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteTable {
    entries: [Flags; 256],
}

impl ByteTable {
    #[inline]
    pub fn get(&self, byte: u8) -> Flags {
        self.entries[byte as usize]
    }

    pub fn entries(&self) -> &[Flags; 256] {
        &self.entries
    }

    /// Raw flag values, as the lexer stores them.
    pub fn bits(&self) -> [u8; 256] {
        self.entries.map(|f| f.bits())
    }

    /// 16 rows of 16 entries, row `i` covering bytes `0xi0..=0xiF`.
    pub fn rows(&self) -> impl Iterator<Item = &[Flags]> {
        self.entries.chunks(16)
    }
}

/// Classifies every byte value; unrepresentable bytes get empty flags.
pub fn compile<C: Classifier + ?Sized>(classifier: &C) -> ByteTable {
    let mut entries = [Flags::empty(); 256];
    for b in 0u32..=255 {
        entries[b as usize] = classifier.classify(b).unwrap_or_default();
    }
    ByteTable { entries }
}

/// The table for strict 7-bit ASCII.
pub fn ascii_table() -> ByteTable {
    compile(&EncodingClassifier::new(Encoding::UsAscii))
}

/// Name the table is emitted under: `ascii` when it is bit-identical to the
/// ASCII table, otherwise the encoding name folded to an identifier.
pub fn table_name(encoding: Encoding, table: &ByteTable) -> String {
    if *table == ascii_table() {
        return ASCII_TABLE_NAME.to_string();
    }
    encoding
        .name()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
