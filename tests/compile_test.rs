//! End-to-end tests from `.po` source to `.mo` bytes

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use googletest::prelude::*;
use pomo::mo::{
    Header,
    MAGIC,
    compile_messages,
    default_metadata,
    read_word,
};
use pomo::po::parse_str;
use pomo::{
    Compiler,
    Error,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Returns the `index`-th string of the table at `table_offset`.
fn string_at(data: &[u8], table_offset: u32, index: usize) -> &[u8] {
    let entry = table_offset as usize + index * 8;
    let length = read_word(data, entry).unwrap() as usize;
    let offset = read_word(data, entry + 4).unwrap() as usize;
    &data[offset..offset + length]
}

/// Writes a catalog into `dir` and returns its path.
fn write_po(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[googletest::test]
fn hello_bonjour_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_po(temp_dir.path(), "fr.po", "msgid \"hello\"\nmsgstr \"bonjour\"\n");

    let destination = Compiler::new().compile(&source, None).unwrap();
    let data = fs::read(destination).unwrap();

    let header = Header::read(&data).unwrap();
    expect_that!(header.magic, eq(MAGIC));
    expect_that!(header.count, eq(2_u32));
    expect_that!(string_at(&data, header.originals_offset, 0), eq(b"".as_slice()));
    expect_that!(string_at(&data, header.originals_offset, 1), eq(b"hello".as_slice()));

    let mut translations = default_metadata().text;
    translations.extend_from_slice(b"\0bonjour\0");
    expect_that!(data.ends_with(&translations), eq(true));
}

#[googletest::test]
fn full_catalog_end_to_end() {
    let po = r#"# French translations
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"

#: src/main.rs:10
msgid "Open"
msgstr "Ouvrir"

#, fuzzy
msgid "untranslated"
msgstr ""

msgid "One file"
msgid_plural "%d files"
msgstr[0] "Un fichier"
msgstr[1] "%d fichiers"

msgid ""
"A long "
"sentence"
msgstr ""
"Une longue "
"phrase"
"#;

    let messages = parse_str(po);
    let data = compile_messages(&messages).unwrap();
    let header = Header::read(&data).unwrap();

    assert_eq!(header.count, 4);
    assert_eq!(
        string_at(&data, header.translations_offset, 0),
        b"Content-Type: text/plain; charset=UTF-8\\nPlural-Forms: nplurals=2; plural=(n > 1);\\n"
            .as_slice()
    );
    assert_eq!(string_at(&data, header.originals_offset, 1), b"Open".as_slice());
    assert_eq!(string_at(&data, header.originals_offset, 2), b"One file\0%d files".as_slice());
    assert_eq!(string_at(&data, header.translations_offset, 2), b"Un fichier\0%d fichiers".as_slice());
    assert_eq!(string_at(&data, header.originals_offset, 3), b"A long sentence".as_slice());
    assert_eq!(string_at(&data, header.translations_offset, 3), b"Une longue phrase".as_slice());
}

#[googletest::test]
fn header_offsets_match_message_count() {
    let messages = parse_str("msgid \"a\"\nmsgstr \"1\"\nmsgid \"b\"\nmsgstr \"2\"\nmsgid \"c\"\nmsgstr \"3\"\n");
    let data = compile_messages(&messages).unwrap();

    expect_that!(read_word(&data, 8), some(eq(4_u32)));
    expect_that!(read_word(&data, 12), some(eq(28_u32)));
    expect_that!(read_word(&data, 16), some(eq(28_u32 + 4 * 8)));
    expect_that!(read_word(&data, 20), some(eq(0_u32)));
    expect_that!(read_word(&data, 24), some(eq(28_u32 + 4 * 16)));
}

#[googletest::test]
fn strings_are_contiguous_and_nul_terminated() {
    let messages = parse_str("msgid \"a\"\nmsgstr \"x\"\nmsgid \"bb\"\nmsgstr \"yy\"\n");
    let data = compile_messages(&messages).unwrap();
    let header = Header::read(&data).unwrap();

    let mut expected_offset = header.hash_offset as usize;
    for table in [header.originals_offset, header.translations_offset] {
        for index in 0..header.count as usize {
            let entry = table as usize + index * 8;
            let length = read_word(&data, entry).unwrap() as usize;
            let offset = read_word(&data, entry + 4).unwrap() as usize;
            expect_that!(offset, eq(expected_offset));
            expect_that!(data[offset + length], eq(0_u8));
            expected_offset = offset + length + 1;
        }
    }
    expect_that!(expected_offset, eq(data.len()));
}

#[googletest::test]
fn latin1_catalog_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let po = b"msgid \"\"\nmsgstr \"Content-Type: text/plain; charset=ISO-8859-1\\n\"\n\nmsgid \"cafe\"\nmsgstr \"caf\xe9\"\n";
    let source = write_po(temp_dir.path(), "fr.po", po);

    let destination = Compiler::new().compile(&source, None).unwrap();
    let data = fs::read(destination).unwrap();

    let header = Header::read(&data).unwrap();
    assert_eq!(header.count, 2);
    assert_eq!(string_at(&data, header.originals_offset, 1), b"cafe".as_slice());
    assert_eq!(string_at(&data, header.translations_offset, 1), b"caf\xe9".as_slice());
    expect_that!(data.ends_with(b"caf\xe9\0"), eq(true));
}

#[googletest::test]
fn missing_source_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    let result = Compiler::new().compile(&temp_dir.path().join("nope.po"), None);

    expect_that!(matches!(result, Err(Error::InvalidInput { .. })), eq(true));
    expect_that!(temp_dir.path().join("nope.mo").exists(), eq(false));
}
