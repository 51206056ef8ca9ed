#![forbid(unsafe_code)]

pub mod compress;
pub mod digest;
pub mod engine;
pub mod error;

/// Semantic version of the crate for diagnostics labeling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use digest::{Digest, OUTPUT_SIZE};
pub use engine::{hash, hash_chunks, Sha1};
pub use error::{Error, ErrorKind, Result};
