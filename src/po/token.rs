//! Line tokens recognized by the PO parser.
//!
//! Lines are classified as raw bytes. Keywords are ASCII, so the catalog's
//! own encoding never needs to be decoded.

/// Plural id keyword. Checked before [`MSGID`] since it shares that prefix.
const MSGID_PLURAL: &[u8] = b"msgid_plural";
/// Singular id keyword.
const MSGID: &[u8] = b"msgid";
/// Indexed translation keyword. Checked before [`MSGSTR`].
const MSGSTR_PLURAL: &[u8] = b"msgstr[";
/// Singular translation keyword.
const MSGSTR: &[u8] = b"msgstr";
/// A line made of a quoted string only.
const MULTILINE_STR: &[u8] = b"\"";

/// Classification of a single trimmed PO line.
///
/// Values are borrowed from the line and still carry their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Token<'a> {
    /// `msgid_plural "..."`
    MsgidPlural(Option<&'a [u8]>),
    /// `msgid "..."`
    Msgid(Option<&'a [u8]>),
    /// `msgstr[N] "..."`
    MsgstrPlural {
        /// Plural index between the brackets
        index: u32,
        /// Quoted value
        value: &'a [u8],
    },
    /// `msgstr "..."`
    Msgstr(Option<&'a [u8]>),
    /// `"..."` continuing the previous keyword
    Continuation(&'a [u8]),
    /// Comments, flags, references, `msgctxt`, blank lines and anything else
    Ignored,
}

impl<'a> Token<'a> {
    /// Classifies a trimmed line. The first matching prefix wins.
    pub(super) fn classify(line: &'a [u8]) -> Self {
        if line.starts_with(MSGID_PLURAL) {
            Self::MsgidPlural(value_of(line))
        } else if line.starts_with(MSGID) {
            Self::Msgid(value_of(line))
        } else if line.starts_with(MSGSTR_PLURAL) {
            Self::classify_indexed(line)
        } else if line.starts_with(MSGSTR) {
            Self::Msgstr(value_of(line))
        } else if line.starts_with(MULTILINE_STR) {
            Self::Continuation(line)
        } else {
            Self::Ignored
        }
    }

    /// Parses `msgstr[N] value`. Lines without a value or a numeric index are ignored.
    fn classify_indexed(line: &'a [u8]) -> Self {
        let Some((keyword, value)) = split_at_space(line) else {
            return Self::Ignored;
        };

        parse_index(keyword).map_or(Self::Ignored, |index| Self::MsgstrPlural {
            index,
            value: value.trim_ascii_start(),
        })
    }
}

/// Splits around the first space.
fn split_at_space(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let space = line.iter().position(|&b| b == b' ')?;
    let (keyword, rest) = line.split_at_checked(space)?;
    Some((keyword, rest.get(1..)?))
}

/// Returns everything after the first space, without leading whitespace.
fn value_of(line: &[u8]) -> Option<&[u8]> {
    split_at_space(line).map(|(_, value)| value.trim_ascii_start())
}

/// Extracts `N` from a `msgstr[N]` keyword, ignoring case.
fn parse_index(keyword: &[u8]) -> Option<u32> {
    let prefix = keyword.get(..MSGSTR_PLURAL.len())?;
    if !prefix.eq_ignore_ascii_case(MSGSTR_PLURAL) {
        return None;
    }

    let rest = keyword.get(MSGSTR_PLURAL.len()..)?;
    let close = rest.iter().position(|&b| b == b']')?;
    let digits = rest.get(..close)?;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    std::str::from_utf8(digits).ok()?.parse().ok()
}

/// Strips one leading and one trailing double quote.
///
/// Escape sequences such as `\n` or `\"` are left untouched.
#[must_use]
pub fn normalize_string(value: &[u8]) -> &[u8] {
    let value = value.strip_prefix(MULTILINE_STR).unwrap_or(value);
    value.strip_suffix(MULTILINE_STR).unwrap_or(value)
}
