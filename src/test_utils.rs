//! Test helpers
//!
//! Reads strings back out of compiled MO data.
#![cfg(test)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::mo::{
    Header,
    INDEX_ENTRY_SIZE,
    read_word,
};

/// Returns the `index`-th original string, without its trailing NUL.
pub(crate) fn original_at(data: &[u8], index: usize) -> &[u8] {
    let header = Header::read(data).expect("valid MO header");
    string_at(data, header.originals_offset as usize, index)
}

/// Returns the `index`-th translation, without its trailing NUL.
pub(crate) fn translation_at(data: &[u8], index: usize) -> &[u8] {
    let header = Header::read(data).expect("valid MO header");
    string_at(data, header.translations_offset as usize, index)
}

/// Follows the (length, offset) entry of an index table.
fn string_at(data: &[u8], table_offset: usize, index: usize) -> &[u8] {
    let entry = table_offset + index * INDEX_ENTRY_SIZE;
    let length = read_word(data, entry).unwrap() as usize;
    let offset = read_word(data, entry + 4).unwrap() as usize;
    assert_eq!(data.get(offset + length), Some(&0), "string must be NUL terminated");
    data.get(offset..offset + length).unwrap()
}
