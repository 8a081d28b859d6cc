//! Byte table compilation and canonical-ASCII labeling.

use chartab::{
    encoding::{Encoding, resolve_encoding},
    tables::{ASCII_TABLE_NAME, EncodingClassifier, Flags, ascii_table, compile, table_name},
};

fn table_for(name: &str) -> chartab::tables::ByteTable {
    let e = resolve_encoding(name).unwrap_or_else(|| panic!("unknown encoding {name}"));
    compile(&EncodingClassifier::new(e))
}

#[test]
fn ascii_letters_digits_and_nul() {
    let t = ascii_table();
    assert_eq!(t.get(b'A'), Flags::ALPHA | Flags::ALNUM | Flags::UPPER);
    assert_eq!(t.get(b'A').bits(), 7);
    assert_eq!(t.get(b'0'), Flags::ALNUM);
    assert_eq!(t.get(b'z'), Flags::ALPHA | Flags::ALNUM);
    assert_eq!(t.get(0x00), Flags::empty());
    assert_eq!(t.get(b'_'), Flags::empty());
    for b in 0x80..=0xFFu8 {
        assert_eq!(t.get(b), Flags::empty(), "byte 0x{b:02X}");
    }
}

#[test]
fn always_256_entries() {
    for name in ["US-ASCII", "binary", "UTF-8", "windows-1252", "Shift_JIS", "KOI8-R"] {
        let t = table_for(name);
        assert_eq!(t.entries().len(), 256, "{name}");
        assert_eq!(t.rows().count(), 16, "{name}");
        assert!(t.rows().all(|r| r.len() == 16), "{name}");
    }

    // A classifier that knows nothing still yields a full, empty table.
    let t = compile(&|_: u32| -> Option<Flags> { None });
    assert!(t.entries().iter().all(|f| f.is_empty()));
}

#[test]
fn compile_is_deterministic() {
    for name in ["UTF-8", "windows-1252", "Shift_JIS"] {
        assert_eq!(table_for(name), table_for(name), "{name}");
    }
}

#[test]
fn alpha_implies_alnum() {
    for name in ["US-ASCII", "UTF-8", "windows-1252", "ISO-8859-7", "KOI8-R", "Shift_JIS", "GBK"] {
        let t = table_for(name);
        for (b, f) in t.entries().iter().enumerate() {
            if f.contains(Flags::ALPHA) {
                assert!(f.contains(Flags::ALNUM), "{name} byte 0x{b:02X}: {f:?}");
            }
        }
    }
}

#[test]
fn windows_1252_high_half() {
    let t = table_for("windows-1252");
    assert_eq!(t.get(0xC0).bits(), 7); // À
    assert_eq!(t.get(0xE0).bits(), 3); // à
    assert_eq!(t.get(0xAA).bits(), 3); // ª
    assert_eq!(t.get(0x8A).bits(), 7); // Š
    assert_eq!(t.get(0xD7).bits(), 0); // ×
}

#[test]
fn shift_jis_half_width_katakana() {
    let t = table_for("Shift_JIS");
    assert_eq!(t.get(0xB1), Flags::ALPHA | Flags::ALNUM); // ｱ
    // Double-byte lead bytes on their own are unrepresentable.
    assert_eq!(t.get(0x82), Flags::empty());
}

#[test]
fn utf8_table_classifies_latin1_codepoints() {
    let t = table_for("UTF-8");
    assert_eq!(t.get(0xC0).bits(), 7);
    assert_eq!(t.get(0xB5).bits(), 3); // µ
    assert_eq!(t.get(0xA0).bits(), 0);
}

#[test]
fn bits_match_entries() {
    let t = table_for("windows-1252");
    let bits = t.bits();
    for b in 0..=255u8 {
        assert_eq!(bits[b as usize], t.get(b).bits());
    }
}

#[test]
fn ascii_identical_tables_get_the_canonical_name() {
    let binary = table_for("binary");
    assert_eq!(binary, ascii_table());
    assert_eq!(table_name(Encoding::Binary, &binary), ASCII_TABLE_NAME);

    // Naming depends on the data, not on which encoding produced it.
    let w = resolve_encoding("windows-1252").unwrap();
    assert_eq!(table_name(w, &ascii_table()), "ascii");
}

#[test]
fn other_tables_are_named_after_the_encoding() {
    let w = resolve_encoding("windows-1252").unwrap();
    assert_eq!(table_name(w, &table_for("windows-1252")), "windows_1252");

    let utf8 = resolve_encoding("UTF-8").unwrap();
    assert_eq!(table_name(utf8, &table_for("UTF-8")), "utf_8");
}
