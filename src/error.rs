//! # Error Types
//!
//! All operations return [`Result<T, EcfileError>`](EcfileError).

use thiserror::Error;

/// The error type for all container operations.
#[derive(Error, Debug)]
pub enum EcfileError {
    /// Read or write failure on one of the streams.
    ///
    /// A stream that ends inside the header also lands here
    /// (`ErrorKind::UnexpectedEof`).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header parsed, but describes something this library cannot decrypt
    /// (key length other than 16/24/32, unknown version, or a legacy stream
    /// when only the current format is accepted).
    ///
    /// Raised before any plaintext is written.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The final block does not carry valid PKCS#7 padding, or the ciphertext
    /// is not a whole number of blocks.
    ///
    /// Usually means a wrong password or corrupted data. This is a heuristic,
    /// not an integrity check: a wrong password yields valid-looking padding
    /// roughly once in 256 attempts, and the container has no MAC.
    #[error("Padding error: {0}")]
    Padding(String),

    /// The operating system random source failed.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl EcfileError {
    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        EcfileError::UnsupportedFormat(msg.into())
    }

    pub(crate) fn padding(msg: impl Into<String>) -> Self {
        EcfileError::Padding(msg.into())
    }
}
