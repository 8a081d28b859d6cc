// src/tables/emit.rs
// Text rendering of the tables as Rust statics, ready to paste into a lexer.

use std::io::{self, Write};

use super::{bytes::ByteTable, flags::Category, ranges::CodepointRange};

/// Writes the byte table under `name` as `pub static <NAME>_TABLE: [u8; 256]`.
///
/// A header comment row lists the column indices and every row starts with
/// its hex row index; entries are decimal flag values 0..=7.
pub fn write_byte_table<W: Write>(w: &mut W, name: &str, table: &ByteTable) -> io::Result<()> {
    writeln!(w, "// Bits: 0 = alpha, 1 = alnum, 2 = upper.")?;
    writeln!(
        w,
        "pub static {}_TABLE: [u8; 256] = [",
        name.to_ascii_uppercase()
    )?;

    write!(w, "//           ")?;
    for col in 0..16 {
        write!(w, " {:>3}", format!("0x{col:X}"))?;
    }
    writeln!(w)?;

    for (row, entries) in table.rows().enumerate() {
        write!(w, "    /* 0x{row:X} */")?;
        for flags in entries {
            write!(w, " {:>2},", flags.bits())?;
        }
        writeln!(w)?;
    }
    writeln!(w, "];")
}

/// Writes one category's ranges as a boundary count followed by the sorted
/// `start, end` pairs, one pair per line.
pub fn write_range_set<W: Write>(
    w: &mut W,
    category: Category,
    ranges: &[CodepointRange],
) -> io::Result<()> {
    let upper = category.name().to_ascii_uppercase();
    writeln!(
        w,
        "pub const UNICODE_{upper}_CODEPOINTS_LENGTH: usize = {};",
        ranges.len() * 2
    )?;
    writeln!(
        w,
        "pub static UNICODE_{upper}_CODEPOINTS: [u32; UNICODE_{upper}_CODEPOINTS_LENGTH] = ["
    )?;
    for r in ranges {
        writeln!(w, "    0x{:X}, 0x{:X},", r.start, r.end)?;
    }
    writeln!(w, "];")
}
