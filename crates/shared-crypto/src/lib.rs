//! # Shared Crypto - Benchmarked Signature Schemes
//!
//! Uniform capability set over the signature backends the benchmark compares.
//!
//! ## Components
//!
//! | Module | Algorithm | Backend |
//! |--------|-----------|---------|
//! | `ecdsa` | ECDSA P-256 | `p256` |
//! | `ml_dsa` | ML-DSA-44 / 65 / 87 | `pqcrypto-mldsa` (PQClean) |
//! | `hashing` | SHA-256 message digest | `sha2` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared_crypto::SchemeId;
//!
//! let signer = SchemeId::MlDsa44.instantiate()?;
//! let signature = signer.sign(b"message")?;
//! assert!(signer.verify(b"message", &signature)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod identity;
pub mod ml_dsa;
pub mod scheme;

// Re-exports
pub use ecdsa::EcdsaScheme;
pub use errors::SchemeError;
pub use hashing::{message_digest, MessageDigest};
pub use identity::SchemeId;
pub use ml_dsa::{MlDsa44Scheme, MlDsa65Scheme, MlDsa87Scheme};
pub use scheme::{Signature, SignatureScheme};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
