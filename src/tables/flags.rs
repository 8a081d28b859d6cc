// src/tables/flags.rs

use bitflags::bitflags;

bitflags! {
    /// Per-character classification bits, packed the way the lexer reads them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        const ALPHA = 1 << 0;
        const ALNUM = 1 << 1;
        const UPPER = 1 << 2;
    }
}

impl Flags {
    /// Classifies a character with Unicode property semantics.
    pub fn of_char(c: char) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::ALPHA, c.is_alphabetic());
        flags.set(Self::ALNUM, c.is_alphanumeric());
        flags.set(Self::UPPER, c.is_uppercase());
        flags
    }
}

/// One range table is produced per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Alpha,
    Alnum,
    Upper,
}

impl Category {
    /// Emission order.
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Alnum, Self::Upper];

    pub fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Alnum => "alnum",
            Self::Upper => "isupper",
        }
    }

    pub fn flag(self) -> Flags {
        match self {
            Self::Alpha => Flags::ALPHA,
            Self::Alnum => Flags::ALNUM,
            Self::Upper => Flags::UPPER,
        }
    }

    #[inline]
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}
