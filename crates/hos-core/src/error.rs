//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid timestamp {0:?}: expected ISO-8601 (YYYY-MM-DDTHH:MM[:SS])")]
    InvalidTimestamp(String),

    #[error("time out of representable range: {0}")]
    OutOfRange(String),
}

/// Shorthand result type for `hos-core`.
pub type CoreResult<T> = Result<T, CoreError>;
