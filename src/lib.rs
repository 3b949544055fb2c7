//! pomo
//!
//! Compiles gettext `.po` translation catalogs into binary `.mo` files.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mo;
pub mod po;
pub mod workspace;

mod test_utils;

pub use catalog::Message;
pub use error::Error;
pub use mo::Compiler;
pub use po::{
    ParseCatalog,
    PoParser,
};
