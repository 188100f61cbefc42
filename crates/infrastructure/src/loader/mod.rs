//! Suite-file loading: decoding and directory discovery.

mod decode;
mod discover;

pub use decode::{decode_suite, load_suite, LoadError};
pub use discover::discover_suites;
