// src/encoding.rs
// Thin adapter over the encoding registry: name resolution, ASCII
// compatibility, and mapping a code value to a character of the encoding.

use std::fmt;

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE};

/// An encoding the generator can build tables for.
///
/// `encoding_rs` follows the WHATWG label table, which folds `US-ASCII` into
/// windows-1252 and has no raw 8-bit encoding. Those two are modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Strict 7-bit ASCII; bytes 0x80..=0xFF are unrepresentable.
    UsAscii,
    /// Fixed 8-bit encoding. Bytes 0x80..=0xFF are raw bytes with no character
    /// properties.
    Binary,
    Registry(&'static encoding_rs::Encoding),
}

const US_ASCII_LABELS: &[&str] = &["us-ascii", "ascii", "ansi_x3.4-1968", "646"];
const BINARY_LABELS: &[&str] = &["ascii-8bit", "binary"];

/// Looks up an encoding by label. Matching is case-insensitive and ignores
/// surrounding whitespace.
pub fn resolve_encoding(name: &str) -> Option<Encoding> {
    let label = name.trim();
    if US_ASCII_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
        return Some(Encoding::UsAscii);
    }
    if BINARY_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
        return Some(Encoding::Binary);
    }
    encoding_rs::Encoding::for_label(label.as_bytes()).map(Encoding::Registry)
}

/// Plain ASCII is generated as the fixed 8-bit encoding.
pub fn normalize(encoding: Encoding) -> Encoding {
    match encoding {
        Encoding::UsAscii => Encoding::Binary,
        other => other,
    }
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::UsAscii => "US-ASCII",
            Self::Binary => "ASCII-8BIT",
            Self::Registry(e) => e.name(),
        }
    }

    /// Bytes 0x00..=0x7F decode to the same characters as 7-bit ASCII.
    pub fn is_ascii_compatible(self) -> bool {
        match self {
            Self::UsAscii | Self::Binary => true,
            Self::Registry(e) => e.is_ascii_compatible(),
        }
    }

    /// Whether code values are Unicode scalar values rather than byte strings.
    pub fn is_unicode(self) -> bool {
        matches!(self, Self::Registry(e) if e == UTF_8 || e == UTF_16LE || e == UTF_16BE)
    }

    /// Only the UTF-8 family gets codepoint range tables.
    pub fn is_utf8(self) -> bool {
        matches!(self, Self::Registry(e) if e == UTF_8)
    }

    /// Maps a code value to the single character it denotes in this encoding.
    ///
    /// Unicode encodings take the value as a scalar value. Everything else
    /// takes the big-endian bytes of the value (shortest form, so `0x41` is one
    /// byte and `0x82A0` is two) and requires them to decode to exactly one
    /// character with no replacement.
    pub fn decode(self, code: u32) -> Option<char> {
        match self {
            Self::UsAscii | Self::Binary => {
                if code < 0x80 {
                    Some(code as u8 as char)
                } else {
                    None
                }
            }
            Self::Registry(_) if self.is_unicode() => char::from_u32(code),
            Self::Registry(e) => {
                let be = code.to_be_bytes();
                let skip = be.iter().take(3).take_while(|&&b| b == 0).count();
                let decoded = e.decode_without_bom_handling_and_without_replacement(&be[skip..])?;
                let mut chars = decoded.chars();
                let c = chars.next()?;
                chars.next().is_none().then_some(c)
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
