// src/driver.rs
// Validates the requested encoding, builds the tables, renders them.

use std::{io::Write, time::Instant};

use crate::{
    config::{Format, Options},
    encoding::{Encoding, normalize, resolve_encoding},
    error::{Error, Result},
    tables::{ByteTable, EncodingClassifier, RangeSet, compile, compress_all, emit, io, table_name},
};

/// Everything produced for one encoding.
#[derive(Debug, Clone)]
pub struct Generated {
    pub encoding: Encoding,
    /// `ascii` for tables identical to plain ASCII, else the encoding's name.
    pub table_name: String,
    pub byte_table: ByteTable,
    /// Present for UTF-8 only.
    pub ranges: Option<RangeSet>,
}

/// Resolves `name`, applies the US-ASCII to ASCII-8BIT normalization and
/// rejects encodings that are not ASCII compatible.
pub fn prepare_encoding(name: &str) -> Result<Encoding> {
    let resolved =
        resolve_encoding(name).ok_or_else(|| Error::EncodingNotFound(name.to_string()))?;
    let encoding = normalize(resolved);
    if encoding != resolved {
        log::debug!("[driver] normalized {resolved} to {encoding}");
    }
    if !encoding.is_ascii_compatible() {
        return Err(Error::NotAsciiCompatible(encoding.name().to_string()));
    }
    Ok(encoding)
}

/// Builds the byte table and, for UTF-8, the range tables.
pub fn generate(encoding: Encoding, parallel: bool) -> Generated {
    let classifier = EncodingClassifier::new(encoding);

    let t0 = Instant::now();
    let byte_table = compile(&classifier);
    let table_name = table_name(encoding, &byte_table);
    log::info!(
        "[driver] {encoding}: byte table `{table_name}` built in {} ms",
        t0.elapsed().as_millis()
    );

    let ranges = encoding.is_utf8().then(|| {
        log::info!("[driver] {encoding}: scanning code space for range tables");
        compress_all(&classifier, parallel)
    });

    Generated {
        encoding,
        table_name,
        byte_table,
        ranges,
    }
}

pub fn render<W: Write>(w: &mut W, generated: &Generated, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            writeln!(
                w,
                "// Character classification tables for {}.",
                generated.encoding
            )?;
            emit::write_byte_table(w, &generated.table_name, &generated.byte_table)?;
            if let Some(ranges) = &generated.ranges {
                for (category, list) in ranges.iter() {
                    writeln!(w)?;
                    emit::write_range_set(w, category, list)?;
                }
            }
        }
        Format::Json => io::write_tables_json(
            w,
            generated.encoding.name(),
            &generated.table_name,
            &generated.byte_table,
            generated.ranges.as_ref(),
        )?,
    }
    Ok(())
}

/// Full command: validate, generate, render. Output is buffered and written
/// only once every table is complete, so a failure leaves `out` untouched.
pub fn run<W: Write>(name: &str, options: &Options, out: &mut W) -> Result<()> {
    let encoding = prepare_encoding(name)?;
    let generated = generate(encoding, options.parallel);

    let mut buf = Vec::new();
    render(&mut buf, &generated, options.format)?;
    out.write_all(&buf)?;
    out.flush()?;
    Ok(())
}
