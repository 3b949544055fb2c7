//! gettext Portable Object (`.po`) parsing.
mod parser;
mod token;

pub use parser::{
    ParseCatalog,
    PoParser,
    parse_bytes,
    parse_str,
};
pub use token::normalize_string;
