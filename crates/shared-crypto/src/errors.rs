//! Scheme error types.

use thiserror::Error;

/// Errors raised by a [`SignatureScheme`](crate::SignatureScheme) operation.
///
/// Every variant is fatal to the benchmark run that triggered it. A
/// structurally valid but cryptographically wrong signature is NOT an error;
/// `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemeError {
    /// Key pair generation failed
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Signature or key could not be parsed by the primitive
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Key export failed
    #[error("Key export failed: {0}")]
    Export(String),

    /// Public key import failed
    #[error("Public key import failed: {0}")]
    Import(String),

    /// Unknown scheme name
    #[error("Unknown signature scheme: {0}")]
    UnknownScheme(String),
}

impl SchemeError {
    /// Import error for a key of the wrong length.
    pub fn import_length(expected: usize, actual: usize) -> Self {
        Self::Import(format!(
            "invalid public key length: expected {}, got {}",
            expected, actual
        ))
    }

    /// Verification error for a signature of the wrong length.
    pub fn signature_length(expected: usize, actual: usize) -> Self {
        Self::Verification(format!(
            "invalid signature length: expected {}, got {}",
            expected, actual
        ))
    }
}
