//! MO file compilation.

use std::path::{
    Path,
    PathBuf,
};

use super::layout::{
    Header,
    word,
};
use crate::catalog::{
    Message,
    has_metadata,
};
use crate::error::Error;
use crate::po::{
    ParseCatalog,
    PoParser,
};

/// Header fields of the metadata record synthesized when a catalog has none.
pub const DEFAULT_HEADERS: [&str; 3] = [
    "MIME-Version: 1.0",
    "Content-Type: text/plain; charset=UTF-8",
    "Content-Transfer-Encoding: 8bit",
];

/// Separates [`DEFAULT_HEADERS`]: a backslash followed by `n`, not a newline byte.
const HEADER_SEPARATOR: &str = "\\n";

/// Separates a context from its message id.
const CONTEXT_SEPARATOR: u8 = 0x04;

/// Terminates strings and separates plural variants.
const NUL: u8 = 0x00;

/// Returns the metadata record used when a catalog has none.
#[must_use]
pub fn default_metadata() -> Message {
    Message::metadata(DEFAULT_HEADERS.join(HEADER_SEPARATOR))
}

/// Compiles messages into a little-endian MO file.
///
/// A metadata record is prepended when none is present. Index tables keep the
/// message order; they are neither sorted nor deduplicated.
///
/// # Errors
/// [`Error::TooLarge`] if a length or offset does not fit into a `u32`.
pub fn compile_messages(messages: &[Message]) -> Result<Vec<u8>, Error> {
    let metadata;
    let messages: Vec<&Message> = if has_metadata(messages) {
        messages.iter().collect()
    } else {
        metadata = default_metadata();
        std::iter::once(&metadata).chain(messages).collect()
    };

    let header = Header::for_count(messages.len())?;
    let originals: Vec<Vec<u8>> = messages.iter().map(|message| original_string(message)).collect();
    let translations: Vec<Vec<u8>> =
        messages.iter().map(|message| translation_string(message)).collect();

    let strings_offset = header.strings_offset();
    let strings_size: usize = originals.iter().chain(&translations).map(|s| s.len() + 1).sum();
    let mut data = Vec::with_capacity(strings_offset + strings_size);
    header.write(&mut data);

    // Translations are stored right after the originals, so one running offset covers both tables.
    let mut offset = strings_offset;
    for string in originals.iter().chain(&translations) {
        data.extend_from_slice(&word(string.len(), "string length")?.to_le_bytes());
        data.extend_from_slice(&word(offset, "string offset")?.to_le_bytes());
        offset += string.len() + 1;
    }

    for string in originals.iter().chain(&translations) {
        data.extend_from_slice(string);
        data.push(NUL);
    }

    tracing::debug!(messages = messages.len(), bytes = data.len(), "Compiled catalog");
    Ok(data)
}

/// Builds the lookup key: `context \x04 id \0 id_plural`, parts present as needed.
fn original_string(message: &Message) -> Vec<u8> {
    let mut string = Vec::new();
    if let Some(context) = &message.context {
        string.extend_from_slice(context);
        string.push(CONTEXT_SEPARATOR);
    }
    string.extend_from_slice(&message.id);
    if message.is_plural() {
        string.push(NUL);
        string.extend_from_slice(&message.id_plural);
    }
    string
}

/// Builds the translation: plural forms in index order joined by `\0`, or the singular text.
fn translation_string(message: &Message) -> Vec<u8> {
    if message.is_plural() {
        let forms: Vec<&[u8]> = message.text_plural.values().map(Vec::as_slice).collect();
        forms.join(&NUL)
    } else {
        message.text.clone()
    }
}

/// Derives the output path by replacing the first `.po` in `source` with `.mo`.
///
/// The replacement is not anchored to the extension: `a.pot/b.po` becomes `a.mot/b.po`.
#[must_use]
pub fn default_output_path(source: &Path) -> PathBuf {
    PathBuf::from(source.to_string_lossy().replacen(".po", ".mo", 1))
}

/// Compiles `.po` files into `.mo` files.
///
/// Uses [`PoParser`] unless another [`ParseCatalog`] is supplied.
#[derive(Debug, Default, Clone)]
pub struct Compiler<P = PoParser> {
    /// Parser reading the source catalog
    parser: P,
}

impl Compiler {
    /// Creates a compiler reading catalogs with [`PoParser`].
    #[must_use]
    pub const fn new() -> Self {
        Self { parser: PoParser::new() }
    }
}

impl<P: ParseCatalog> Compiler<P> {
    /// Creates a compiler reading catalogs with `parser`.
    #[must_use]
    pub const fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Returns the parser used for source catalogs.
    #[must_use]
    pub const fn parser(&self) -> &P {
        &self.parser
    }

    /// Parses `source` and writes the compiled catalog.
    ///
    /// When `destination` is `None` it is derived with [`default_output_path`].
    /// Returns the path that was written.
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if `source` does not exist
    /// - [`Error::Io`] if reading or writing fails
    /// - [`Error::TooLarge`] if the catalog exceeds the MO format limits
    pub fn compile(&self, source: &Path, destination: Option<&Path>) -> Result<PathBuf, Error> {
        if !source.exists() {
            return Err(Error::InvalidInput { path: source.to_path_buf() });
        }

        let messages = self.parser.parse(source)?;
        let data = compile_messages(&messages)?;

        let destination = destination.map_or_else(|| default_output_path(source), Path::to_path_buf);
        std::fs::write(&destination, data).map_err(|e| Error::io(&destination, e))?;
        tracing::info!(
            source = %source.display(),
            destination = %destination.display(),
            messages = messages.len(),
            "Compiled catalog"
        );

        Ok(destination)
    }
}
