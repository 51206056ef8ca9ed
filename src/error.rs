#![forbid(unsafe_code)]

use core::fmt;

/// Result alias used by the engine for misuse and domain-limit reporting.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type covering the engine's two failure modes; the compression
/// arithmetic itself is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// `update` or `finalize` was called on an engine that has already
    /// produced its digest.
    UseAfterFinalize,
    /// The total message length reached 2^64 bits, outside the domain the
    /// standard defines.
    LengthOverflow,
}

impl Error {
    pub const fn use_after_finalize() -> Self {
        Self {
            kind: ErrorKind::UseAfterFinalize,
        }
    }

    pub const fn length_overflow() -> Self {
        Self {
            kind: ErrorKind::LengthOverflow,
        }
    }

    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UseAfterFinalize => {
                write!(f, "engine has already been finalized")
            }
            ErrorKind::LengthOverflow => {
                write!(f, "message length exceeds 2^64 - 1 bits")
            }
        }
    }
}

impl core::error::Error for Error {}
