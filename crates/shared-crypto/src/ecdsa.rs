//! # ECDSA Signatures (P-256)
//!
//! The classical baseline, on the NIST curve used by X.509 identity layers.
//!
//! ## Encodings
//!
//! - Public key: PKIX `SubjectPublicKeyInfo` DER (91 bytes)
//! - Private key: SEC1 `ECPrivateKey` DER
//! - Signature: ASN.1 DER (70-72 bytes, variable)
//!
//! Signing is randomized per call: fresh RNG output is mixed into the
//! RFC 6979 nonce derivation, so two signatures over the same message differ.

use p256::ecdsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
use p256::ecdsa::{Signature as DerSignature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};
use p256::SecretKey;

use crate::hashing::message_digest;
use crate::{SchemeError, SchemeId, Signature, SignatureScheme};

/// PKIX DER public key length (uncompressed point plus algorithm identifier).
pub const PUBLIC_KEY_BYTES: usize = 91;

/// Upper bound of a SEC1 DER private key (scalar, curve OID and public point).
pub const MAX_PRIVATE_KEY_BYTES: usize = 121;

/// Upper bound of a DER-encoded P-256 signature.
pub const MAX_SIGNATURE_BYTES: usize = 72;

/// P-256 ECDSA instance (one key pair).
pub struct EcdsaScheme {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl EcdsaScheme {
    /// Generate a random key pair.
    pub fn generate() -> Result<Self, SchemeError> {
        Ok(Self::from_signing_key(SigningKey::random(&mut rand::thread_rng())))
    }

    /// Restore from a SEC1 DER private key, as produced by
    /// [`SignatureScheme::export_private_key`].
    pub fn from_sec1_der(bytes: &[u8]) -> Result<Self, SchemeError> {
        let secret = SecretKey::from_sec1_der(bytes)
            .map_err(|e| SchemeError::KeyGeneration(format!("invalid SEC1 private key: {}", e)))?;
        Ok(Self::from_signing_key(SigningKey::from(secret)))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = *signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }
}

impl SignatureScheme for EcdsaScheme {
    fn id(&self) -> SchemeId {
        SchemeId::Ecdsa
    }

    fn generate_key_pair(&mut self) -> Result<(), SchemeError> {
        *self = Self::generate()?;
        Ok(())
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SchemeError> {
        let digest = message_digest(message);
        let signature: DerSignature = self
            .signing_key
            .sign_prehash_with_rng(&mut rand::thread_rng(), &digest)
            .map_err(|e| SchemeError::Signing(e.to_string()))?;
        Ok(Signature::from_bytes(signature.to_der().as_bytes().to_vec()))
    }

    fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, SchemeError> {
        let parsed = DerSignature::from_der(signature.as_bytes())
            .map_err(|e| SchemeError::Verification(format!("malformed DER signature: {}", e)))?;
        let digest = message_digest(message);
        Ok(self.verifying_key.verify_prehash(&digest, &parsed).is_ok())
    }

    fn export_public_key(&self) -> Result<Vec<u8>, SchemeError> {
        let document = self
            .verifying_key
            .to_public_key_der()
            .map_err(|e| SchemeError::Export(format!("PKIX encoding failed: {}", e)))?;
        Ok(document.as_bytes().to_vec())
    }

    fn export_private_key(&self) -> Result<Vec<u8>, SchemeError> {
        let der = SecretKey::from(&self.signing_key)
            .to_sec1_der()
            .map_err(|e| SchemeError::Export(format!("SEC1 encoding failed: {}", e)))?;
        Ok(der.to_vec())
    }

    fn import_public_key(&mut self, bytes: &[u8]) -> Result<(), SchemeError> {
        self.verifying_key = VerifyingKey::from_public_key_der(bytes)
            .map_err(|_| SchemeError::Import("not a valid P-256 PKIX public key".to_string()))?;
        Ok(())
    }
}
