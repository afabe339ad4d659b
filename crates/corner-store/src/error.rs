//! # Storage Error Types
//!
//! Error types for catalog storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (read/write/rename)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Storage ← I/O failures, file-level problems                │
//! │                                                                         │
//! │  Malformed catalog line                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Parse ← names the offending line, aborts the whole load    │
//! │                                                                         │
//! │  CoreError (business rule violation)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::Core ← passes through unchanged for callers to match on    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use corner_core::{CoreError, ValidationError};
use thiserror::Error;

/// Catalog storage errors.
///
/// These errors wrap I/O and parse failures and carry domain errors through
/// unchanged, so callers can still match on the business rule that failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A catalog line could not be decoded.
    ///
    /// ## When This Occurs
    /// - Wrong field count (hand-edited file)
    /// - Unparseable number, percent or date
    /// - Out-of-range value (negative stock, percent above 100)
    ///
    /// A single bad line rejects the whole file: the repository never loads
    /// a partial catalog.
    #[error("Malformed catalog line ({reason}): '{line}'")]
    Parse { line: String, reason: String },

    /// Reading or writing the catalog file failed.
    ///
    /// ## When This Occurs
    /// - Directory missing or unwritable
    /// - Disk full
    /// - Rename over the original rejected by the OS
    #[error("Catalog storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// A business rule was violated (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a Parse error for a given line and reason.
    pub fn parse(line: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Parse {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Validation failures arrive wrapped the same way CoreError wraps them.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
