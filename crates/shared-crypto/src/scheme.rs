//! # Signature Scheme Abstraction
//!
//! One instance owns exactly one key pair. Key material is threaded through
//! `sign`/`verify` without being regenerated, and callers that need isolation
//! simply construct a fresh instance.

use crate::{SchemeError, SchemeId};

/// Opaque signature bytes.
///
/// Only meaningful to the `verify` of the scheme that produced it, under the
/// same key material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Wrap raw signature bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Capability set every benchmarked scheme implements.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single signer can
/// be shared by parallel workers.
pub trait SignatureScheme: Send + Sync {
    /// Which algorithm / parameter level this instance implements.
    fn id(&self) -> SchemeId;

    /// Replace this instance's key material with a fresh, independent pair.
    fn generate_key_pair(&mut self) -> Result<(), SchemeError>;

    /// Sign `message`.
    ///
    /// The message is hashed internally (SHA-256) before reaching the
    /// primitive.
    fn sign(&self, message: &[u8]) -> Result<Signature, SchemeError>;

    /// Verify `signature` over `message` against this instance's public key.
    ///
    /// # Returns
    /// - `Ok(false)` for a well-formed but cryptographically wrong signature
    /// - `Err(SchemeError::Verification)` only when the primitive cannot parse
    ///   the input
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, SchemeError>;

    /// Canonical public key encoding.
    fn export_public_key(&self) -> Result<Vec<u8>, SchemeError>;

    /// Canonical private key encoding.
    fn export_private_key(&self) -> Result<Vec<u8>, SchemeError>;

    /// Replace this instance's public key with one decoded from `bytes`.
    ///
    /// The private key is left untouched, so after an import the instance
    /// verifies a counterpart's signatures but its own signatures no longer
    /// verify locally.
    fn import_public_key(&mut self, bytes: &[u8]) -> Result<(), SchemeError>;
}
