//! Error types for the notes panel header.
//!
//! This module defines the centralized error type [`HeaderError`] and a type alias
//! [`Result`] for the few fallible surfaces of the crate: configuration loading,
//! store snapshot decoding, bus event decoding, and document engine calls. The
//! header controller itself never returns these to its caller; interaction paths
//! either succeed or are absorbed and logged at the point of detection.

use thiserror::Error;

/// The main error type for notes header operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use notes_header::HeaderError;
///
/// fn validate_window(ms: u64) -> Result<(), HeaderError> {
///     if ms == 0 {
///         return Err(HeaderError::Config("debounce window must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_window(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A document engine call failed.
    ///
    /// Raised by [`DocumentEngine`](crate::host::DocumentEngine) implementations,
    /// typically for page navigation. Callers in this crate catch and log it.
    #[error("Document engine error: {0}")]
    Engine(String),

    /// A bus event or store snapshot carried malformed JSON.
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML for the expected shape.
    #[error("Configuration format error: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A bus event arrived under a topic this crate does not know.
    #[error("Unknown event topic: {0}")]
    UnknownEvent(String),
}

/// A specialized `Result` type for notes header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
