//! Core definitions (error type, result alias and prefix length checks) shared by all ipseq-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
