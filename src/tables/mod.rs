// src/tables/mod.rs
pub mod bytes;
pub mod classify;
pub mod emit;
pub mod flags;
pub mod io;
pub mod ranges;

pub use bytes::{ASCII_TABLE_NAME, ByteTable, ascii_table, compile, table_name};
pub use classify::{Classifier, EncodingClassifier};
pub use flags::{Category, Flags};
pub use ranges::{CODESPACE_DOMAIN, CodepointRange, RangeSet, compress, compress_all, compress_in};
