//! Error types for niceties
//!
//! This module provides error handling for the argument-validating helpers.
//! All errors implement the standard Error trait and carry enough context to
//! name the offending argument in diagnostics.

use std::path::PathBuf;

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for niceties operations
#[derive(Error, Debug)]
pub enum NicetiesError {
    /// Argument contract violations (blank subject, empty delimiter)
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// Numeric arguments outside their documented range
    #[error("Argument `{name}` out of range: {message}")]
    OutOfRange {
        name: &'static str,
        message: String,
    },

    /// I/O errors raised while inspecting files for size formatting
    #[error("Failed to read metadata for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for niceties operations
pub type Result<T> = std::result::Result<T, NicetiesError>;

impl NicetiesError {
    /// Creates a new invalid-argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use niceties::error::NicetiesError;
    ///
    /// let err = NicetiesError::invalid_argument("delimiter", "must not be empty");
    /// assert!(matches!(err, NicetiesError::InvalidArgument { .. }));
    /// ```
    pub fn invalid_argument<S: Into<String>>(name: &'static str, message: S) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Creates a new out-of-range error.
    ///
    /// # Examples
    ///
    /// ```
    /// use niceties::error::NicetiesError;
    ///
    /// let err = NicetiesError::out_of_range("decimals", "must be at least 1");
    /// assert!(matches!(err, NicetiesError::OutOfRange { .. }));
    /// ```
    pub fn out_of_range<S: Into<String>>(name: &'static str, message: S) -> Self {
        Self::OutOfRange {
            name,
            message: message.into(),
        }
    }

    /// Creates a new I/O error for the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use niceties::error::NicetiesError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = NicetiesError::io("/tmp/missing.bin", io_err);
    /// assert!(matches!(err, NicetiesError::Io { .. }));
    /// ```
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
