//! # ML-DSA Signatures (FIPS 204)
//!
//! Lattice-based signatures at three parameter levels, backed by the PQClean
//! implementations in `pqcrypto-mldsa`. Signatures are detached; randomization
//! is internal to the library.
//!
//! | Level | Public key | Private key | Signature |
//! |-------|-----------:|------------:|----------:|
//! | ML-DSA-44 | 1312 | 2560 | 2420 |
//! | ML-DSA-65 | 1952 | 4032 | 3309 |
//! | ML-DSA-87 | 2592 | 4896 | 4627 |

use pqcrypto_mldsa::{mldsa44, mldsa65, mldsa87};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use crate::hashing::message_digest;
use crate::{SchemeError, SchemeId, Signature, SignatureScheme};

macro_rules! ml_dsa_scheme {
    (
        $(#[$meta:meta])*
        $name:ident, $module:ident, $id:expr,
        public_key = $pk_len:literal,
        private_key = $sk_len:literal,
        signature = $sig_len:literal
    ) => {
        $(#[$meta])*
        pub struct $name {
            public_key: $module::PublicKey,
            secret_key: $module::SecretKey,
        }

        impl $name {
            /// Encoded public key length.
            pub const PUBLIC_KEY_BYTES: usize = $pk_len;
            /// Encoded private key length.
            pub const PRIVATE_KEY_BYTES: usize = $sk_len;
            /// Detached signature length.
            pub const SIGNATURE_BYTES: usize = $sig_len;

            /// Generate a random key pair.
            pub fn generate() -> Result<Self, SchemeError> {
                let (public_key, secret_key) = $module::keypair();
                Ok(Self {
                    public_key,
                    secret_key,
                })
            }
        }

        impl SignatureScheme for $name {
            fn id(&self) -> SchemeId {
                $id
            }

            fn generate_key_pair(&mut self) -> Result<(), SchemeError> {
                *self = Self::generate()?;
                Ok(())
            }

            fn sign(&self, message: &[u8]) -> Result<Signature, SchemeError> {
                let digest = message_digest(message);
                let signature = $module::detached_sign(&digest, &self.secret_key);
                Ok(Signature::from_bytes(signature.as_bytes().to_vec()))
            }

            fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, SchemeError> {
                if signature.len() != Self::SIGNATURE_BYTES {
                    return Err(SchemeError::signature_length(
                        Self::SIGNATURE_BYTES,
                        signature.len(),
                    ));
                }
                let parsed = $module::DetachedSignature::from_bytes(signature.as_bytes())
                    .map_err(|e| SchemeError::Verification(format!("{:?}", e)))?;
                let digest = message_digest(message);
                Ok($module::verify_detached_signature(&parsed, &digest, &self.public_key).is_ok())
            }

            fn export_public_key(&self) -> Result<Vec<u8>, SchemeError> {
                Ok(self.public_key.as_bytes().to_vec())
            }

            fn export_private_key(&self) -> Result<Vec<u8>, SchemeError> {
                Ok(self.secret_key.as_bytes().to_vec())
            }

            fn import_public_key(&mut self, bytes: &[u8]) -> Result<(), SchemeError> {
                if bytes.len() != Self::PUBLIC_KEY_BYTES {
                    return Err(SchemeError::import_length(Self::PUBLIC_KEY_BYTES, bytes.len()));
                }
                self.public_key = $module::PublicKey::from_bytes(bytes)
                    .map_err(|e| SchemeError::Import(format!("{:?}", e)))?;
                Ok(())
            }
        }
    };
}

ml_dsa_scheme!(
    /// ML-DSA-44 instance (NIST security category 2).
    MlDsa44Scheme, mldsa44, SchemeId::MlDsa44,
    public_key = 1312,
    private_key = 2560,
    signature = 2420
);

ml_dsa_scheme!(
    /// ML-DSA-65 instance (NIST security category 3).
    MlDsa65Scheme, mldsa65, SchemeId::MlDsa65,
    public_key = 1952,
    private_key = 4032,
    signature = 3309
);

ml_dsa_scheme!(
    /// ML-DSA-87 instance (NIST security category 5).
    MlDsa87Scheme, mldsa87, SchemeId::MlDsa87,
    public_key = 2592,
    private_key = 4896,
    signature = 4627
);
