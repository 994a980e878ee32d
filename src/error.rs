//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Encryption/decryption errors
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Errors from the encryption layer
///
/// These are distinguishable from all other error kinds so callers can react
/// to key misconfiguration or corrupted ciphertext without string matching.
/// They must propagate to the caller unmodified; falling back to plaintext
/// on failure is never permitted.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key material is absent or blank
    #[error("Encryption key is not configured (set the ENCRYPTION_KEY environment variable)")]
    MissingKey,

    /// Ciphertext is not valid base64
    #[error("Invalid ciphertext encoding: {0}")]
    InvalidEncoding(String),

    /// Ciphertext is too short to contain the nonce framing
    #[error("Ciphertext too short: expected at least {expected} bytes, got {actual}")]
    TruncatedCiphertext { expected: usize, actual: usize },

    /// Authentication or decryption failure
    #[error("Decryption failed: wrong key or corrupted data")]
    DecryptionFailed,

    /// Decrypted bytes are not valid UTF-8
    #[error("Decrypted data is not valid UTF-8")]
    InvalidPlaintext,

    /// Cipher construction failed
    #[error("Failed to initialize cipher: {0}")]
    CipherInit(String),

    /// The cipher primitive rejected the encryption request
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}

impl FintrackError {
    /// Create a validation error for a specific field
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation(format!("{}: {}", field, reason.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a crypto error
    pub fn is_crypto(&self) -> bool {
        matches!(self, Self::Crypto(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_field() {
        let err = FintrackError::invalid_field("email", "must contain '@'");
        assert_eq!(err.to_string(), "Validation error: email: must contain '@'");
        assert!(err.is_validation());
    }

    #[test]
    fn test_crypto_error_propagates() {
        let err: FintrackError = CryptoError::MissingKey.into();
        assert!(err.is_crypto());
        assert!(err.to_string().contains("ENCRYPTION_KEY"));
    }

    #[test]
    fn test_truncated_ciphertext_display() {
        let err = CryptoError::TruncatedCiphertext {
            expected: 12,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Ciphertext too short: expected at least 12 bytes, got 4"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fintrack_err: FintrackError = io_err.into();
        assert!(matches!(fintrack_err, FintrackError::Io(_)));
    }
}
