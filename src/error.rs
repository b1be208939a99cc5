//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, following the single-enum pattern used by crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - A transcript with no recognizable timestamp delimiters is a *hard*
//!   failure ([`ChatlensError::UnparseableTranscript`]); a transcript where
//!   only some timestamps resist parsing is not an error at all (those
//!   records carry a null timestamp instead)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing an export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contains no recognizable timestamp delimiters at all.
    ///
    /// Analytics must not run on such input: the caller is expected to
    /// surface this as a distinct failure rather than render zeroed results.
    #[error("Unparseable transcript{}: no timestamp delimiters found", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    UnparseableTranscript {
        /// The file path, if the transcript came from a file
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unparseable-transcript error without a file path.
    pub fn unparseable() -> Self {
        ChatlensError::UnparseableTranscript { path: None }
    }

    /// Creates an unparseable-transcript error for a specific file.
    pub fn unparseable_file(path: impl Into<PathBuf>) -> Self {
        ChatlensError::UnparseableTranscript {
            path: Some(path.into()),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an unparseable-transcript error.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ChatlensError::UnparseableTranscript { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
