//! gettext Machine Object (`.mo`) compilation.
mod compiler;
mod layout;

pub use compiler::{
    Compiler,
    DEFAULT_HEADERS,
    compile_messages,
    default_metadata,
    default_output_path,
};
pub use layout::{
    HEADER_SIZE,
    Header,
    INDEX_ENTRY_SIZE,
    MAGIC,
    REVISION,
    read_word,
};
