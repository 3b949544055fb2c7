//! Fixed layout of the MO file header.
//!
//! See <https://www.gnu.org/software/gettext/manual/gettext.html#MO-Files>.

use crate::error::Error;

/// Magic number of a little-endian MO file.
pub const MAGIC: u32 = 0x9504_12de;
/// File format revision.
pub const REVISION: u32 = 0;
/// Size of the header: seven 32-bit words.
pub const HEADER_SIZE: usize = 7 * WORD_SIZE;
/// Size of one index table entry: length and offset.
pub const INDEX_ENTRY_SIZE: usize = 2 * WORD_SIZE;

/// Size of a single header word.
const WORD_SIZE: usize = 4;

/// The seven-word header that starts every MO file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub revision: u32,
    /// Number of string pairs.
    pub count: u32,
    /// Offset of the original strings index table.
    pub originals_offset: u32,
    /// Offset of the translated strings index table.
    pub translations_offset: u32,
    /// Number of hash table slots. Always zero when written by this crate.
    pub hash_size: u32,
    /// Offset of the hash table, which is also where string data starts.
    pub hash_offset: u32,
}

impl Header {
    /// Lays out the header for `count` messages, with an empty hash table.
    ///
    /// # Errors
    /// [`Error::TooLarge`] if an offset does not fit into a `u32`.
    pub fn for_count(count: usize) -> Result<Self, Error> {
        let table_size = count
            .checked_mul(INDEX_ENTRY_SIZE)
            .ok_or(Error::TooLarge { what: "string index table", len: count })?;
        let translations_offset = HEADER_SIZE + table_size;
        let hash_offset = translations_offset
            .checked_add(table_size)
            .ok_or(Error::TooLarge { what: "index tables", len: translations_offset })?;

        Ok(Self {
            magic: MAGIC,
            revision: REVISION,
            count: word(count, "message count")?,
            originals_offset: word(HEADER_SIZE, "header")?,
            translations_offset: word(translations_offset, "translation index offset")?,
            hash_size: 0,
            hash_offset: word(hash_offset, "hash table offset")?,
        })
    }

    /// Offset of the first string byte, right after the hash table.
    #[must_use]
    pub const fn strings_offset(&self) -> usize {
        (self.hash_offset as usize) + (self.hash_size as usize) * WORD_SIZE
    }

    /// Appends the header words in little-endian order.
    pub(super) fn write(&self, out: &mut Vec<u8>) {
        for value in [
            self.magic,
            self.revision,
            self.count,
            self.originals_offset,
            self.translations_offset,
            self.hash_size,
            self.hash_offset,
        ] {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Reads a little-endian header. Returns `None` if `bytes` is too short
    /// or does not start with [`MAGIC`].
    #[must_use]
    pub fn read(bytes: &[u8]) -> Option<Self> {
        let word_at = |index: usize| read_word(bytes, index * WORD_SIZE);

        let header = Self {
            magic: word_at(0)?,
            revision: word_at(1)?,
            count: word_at(2)?,
            originals_offset: word_at(3)?,
            translations_offset: word_at(4)?,
            hash_size: word_at(5)?,
            hash_offset: word_at(6)?,
        };

        (header.magic == MAGIC).then_some(header)
    }
}

/// Reads the little-endian word at `offset`.
#[must_use]
pub fn read_word(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(WORD_SIZE)?;
    let word: [u8; WORD_SIZE] = bytes.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(word))
}

/// Converts a size or offset to an MO word.
pub(super) fn word(value: usize, what: &'static str) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::TooLarge { what, len: value })
}
