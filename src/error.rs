//! Errors returned by the FPE library

use thiserror::Error;

/// Errors surfaced synchronously by every public operation in this crate.
///
/// All validation fails closed: an error aborts the current call and the
/// caller's output buffer contents are unspecified (see `crate::context`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid algorithm/key combination: {0}")]
    InvalidAlgorithm(String),

    #[error("invalid radix; must be in [2, 65536], got {0}")]
    InvalidRadix(usize),

    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error("invalid tweak length: {0}")]
    InvalidTweakLength(String),

    #[error("invalid digit at position {index}: {digit} is not less than radix {radix}")]
    InvalidDigit {
        index: usize,
        digit: u16,
        radix: usize,
    },

    #[error("block cipher operation failed: {0}")]
    CipherFailure(String),
}

/// Short hand to return a result (or an FPE error)
pub type Result<T> = std::result::Result<T, Error>;
