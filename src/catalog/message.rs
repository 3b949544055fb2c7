//! The message record.

use std::collections::BTreeMap;

/// A single catalog entry.
///
/// Strings are kept as raw bytes in the catalog's own encoding, so Latin-1 or
/// any other 8-bit charset compiles unchanged. A record whose `id` is empty is
/// the metadata record; it carries the catalog headers in `text` instead of a
/// translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Untranslated singular source string.
    pub id: Vec<u8>,
    /// Untranslated plural source string. Empty when the message is not plural.
    pub id_plural: Vec<u8>,
    /// Singular translation.
    pub text: Vec<u8>,
    /// Plural translations keyed by plural index.
    pub text_plural: BTreeMap<u32, Vec<u8>>,
    /// Optional disambiguating context.
    pub context: Option<Vec<u8>>,
}

impl Message {
    /// Creates a singular message with a translation.
    #[must_use]
    pub fn new(id: impl Into<Vec<u8>>, text: impl Into<Vec<u8>>) -> Self {
        Self { id: id.into(), text: text.into(), ..Self::default() }
    }

    /// Creates the metadata record carrying the given header block.
    #[must_use]
    pub fn metadata(headers: impl Into<Vec<u8>>) -> Self {
        Self::new(Vec::new(), headers)
    }

    /// Sets the context of this message.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Vec<u8>>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Turns this message into a plural one.
    #[must_use]
    pub fn with_plural<I, S>(mut self, id_plural: impl Into<Vec<u8>>, forms: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<Vec<u8>>,
    {
        self.id_plural = id_plural.into();
        self.text_plural = forms.into_iter().map(|(index, text)| (index, text.into())).collect();
        self
    }

    /// Returns true when a plural id is set.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        !self.id_plural.is_empty()
    }

    /// Returns true when the singular text or any plural form is set.
    ///
    /// Records failing this check are dropped by the parser.
    #[must_use]
    pub fn has_translation(&self) -> bool {
        !self.text.is_empty() || !self.text_plural.is_empty()
    }

    /// Returns true for the record keyed by the empty string.
    #[must_use]
    pub fn is_metadata(&self) -> bool {
        self.id.is_empty()
    }
}

/// Returns true if any message is the metadata record.
#[must_use]
pub fn has_metadata(messages: &[Message]) -> bool {
    messages.iter().any(Message::is_metadata)
}
