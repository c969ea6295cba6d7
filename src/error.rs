//! Error types for geosite2list.

use thiserror::Error;

/// Error type for catalog conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Varint ran past the end of the buffer
    #[error("malformed catalog: truncated varint")]
    TruncatedVarint,

    /// Varint longer than 64 bits
    #[error("malformed catalog: varint exceeds 64 bits")]
    OverlongVarint,

    /// Length prefix points past the end of the buffer
    #[error("malformed catalog: field needs {needed} bytes but only {remaining} remain")]
    TruncatedField { needed: u64, remaining: u64 },

    /// Wire type outside the wire-format grammar
    #[error("malformed catalog: invalid wire type {0}")]
    InvalidWireType(u8),

    /// A known field carried a wire type the schema does not use
    #[error("malformed catalog: field {field} has unexpected wire type")]
    UnexpectedWireType { field: u64 },

    /// A string field held non-UTF-8 bytes
    #[error("malformed catalog: invalid UTF-8 in string field: {0}")]
    InvalidString(#[from] std::str::Utf8Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Download error
    #[error("download error: {0}")]
    Download(#[from] reqwest::Error),

    /// Non-success HTTP status from the catalog source
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
}

/// Result type alias for geosite2list operations.
pub type Result<T> = std::result::Result<T, Error>;
