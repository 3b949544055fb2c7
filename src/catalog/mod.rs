//! Message records exchanged between the parser and the compiler.
mod message;

pub use message::{
    Message,
    has_metadata,
};
