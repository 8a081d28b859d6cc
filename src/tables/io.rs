// src/tables/io.rs
// JSON form of the generated tables, for tooling that post-processes them.

use std::io::Write;

use serde::Serialize;
use serde_with::serde_as;

use super::{
    bytes::ByteTable,
    flags::Category,
    ranges::{CodepointRange, RangeSet},
};

#[serde_as]
#[derive(Serialize)]
struct TablesDisk<'a> {
    encoding: &'a str,
    table_name: &'a str,
    #[serde_as(as = "[_; 256]")]
    byte_table: [u8; 256],
    #[serde(skip_serializing_if = "Option::is_none")]
    ranges: Option<RangesDisk>,
}

#[derive(Serialize)]
struct RangesDisk {
    alpha: Vec<[u32; 2]>,
    alnum: Vec<[u32; 2]>,
    isupper: Vec<[u32; 2]>,
}

fn pairs(ranges: &[CodepointRange]) -> Vec<[u32; 2]> {
    ranges.iter().map(|r| [r.start, r.end]).collect()
}

impl From<&RangeSet> for RangesDisk {
    fn from(set: &RangeSet) -> Self {
        Self {
            alpha: pairs(set.get(Category::Alpha)),
            alnum: pairs(set.get(Category::Alnum)),
            isupper: pairs(set.get(Category::Upper)),
        }
    }
}

/// Writes one pretty-printed JSON document with the byte table and, when
/// present, the range lists keyed by category name.
pub fn write_tables_json<W: Write>(
    w: &mut W,
    encoding: &str,
    table_name: &str,
    table: &ByteTable,
    ranges: Option<&RangeSet>,
) -> serde_json::Result<()> {
    let disk = TablesDisk {
        encoding,
        table_name,
        byte_table: table.bits(),
        ranges: ranges.map(RangesDisk::from),
    };
    serde_json::to_writer_pretty(&mut *w, &disk)?;
    writeln!(w).map_err(serde_json::Error::io)
}
