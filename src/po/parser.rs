//! Line-oriented PO parser.

use std::path::Path;

use super::token::{
    Token,
    normalize_string,
};
use crate::catalog::Message;
use crate::error::Error;

/// Reads a catalog file into messages.
///
/// [`PoParser`] is the default implementation; the compiler accepts any other.
pub trait ParseCatalog {
    /// Parses the catalog at `path`.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if `path` does not exist
    /// - [`Error::Io`] if the file cannot be read
    fn parse(&self, path: &Path) -> Result<Vec<Message>, Error>;
}

/// Parser for gettext `.po` files.
///
/// The file is read as bytes and never decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoParser;

impl PoParser {
    /// Creates a parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ParseCatalog for PoParser {
    fn parse(&self, path: &Path) -> Result<Vec<Message>, Error> {
        if !path.exists() {
            return Err(Error::InvalidInput { path: path.to_path_buf() });
        }

        tracing::debug!(path = %path.display(), "Parsing catalog");
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;

        Ok(parse_bytes(&bytes))
    }
}

/// Field that a quoted continuation line is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    /// Extends `msgid`
    Id,
    /// Extends `msgstr`
    Text,
}

/// Parses PO source text.
///
/// See [`parse_bytes`].
#[must_use]
pub fn parse_str(source: &str) -> Vec<Message> {
    parse_bytes(source.as_bytes())
}

/// Parses PO source in any ASCII-compatible encoding.
///
/// Only messages carrying a translation are returned, in source order.
/// String bytes are copied through as they appear between the quotes.
#[must_use]
pub fn parse_bytes(source: &[u8]) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut current = Message::default();
    let mut continuation = None;

    // `\r\n` yields an extra empty line, which is ignored like any blank line.
    for line in source.split(|&b| b == b'\n' || b == b'\r') {
        match Token::classify(line.trim_ascii()) {
            Token::MsgidPlural(value) => {
                if let Some(value) = value {
                    current.id_plural = normalize_string(value).to_vec();
                }
            }
            Token::Msgid(value) => {
                flush(&mut messages, std::mem::take(&mut current));
                if let Some(value) = value {
                    current.id = normalize_string(value).to_vec();
                    continuation = Some(Continuation::Id);
                }
            }
            Token::MsgstrPlural { index, value } => {
                current.text_plural.insert(index, normalize_string(value).to_vec());
            }
            Token::Msgstr(value) => {
                if let Some(value) = value {
                    current.text = normalize_string(value).to_vec();
                    continuation = Some(Continuation::Text);
                }
            }
            Token::Continuation(value) => {
                let value = normalize_string(value);
                match continuation {
                    Some(Continuation::Id) => current.id.extend_from_slice(value),
                    Some(Continuation::Text) => current.text.extend_from_slice(value),
                    None => {}
                }
            }
            Token::Ignored => {}
        }
    }
    flush(&mut messages, current);
    tracing::debug!(messages = messages.len(), "Parsed catalog");

    messages
}

/// Keeps `message` only if it has a translation.
fn flush(messages: &mut Vec<Message>, message: Message) {
    if message.has_translation() {
        messages.push(message);
    } else if !message.id.is_empty() {
        tracing::trace!(id = %String::from_utf8_lossy(&message.id), "Skipping untranslated message");
    }
}
