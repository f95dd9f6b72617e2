//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies the harness needs.

use shared_crypto::{SchemeError, SchemeId, SignatureScheme};

/// Source of scheme instances.
///
/// Every call must return an instance owning freshly generated key material.
/// The harness relies on this for trial isolation: it never reuses an
/// instance across trials.
pub trait SchemeFactory: Send + Sync {
    /// Construct a fresh, keyed instance of `id`.
    ///
    /// # Errors
    /// * `SchemeError::KeyGeneration` - the backend could not produce a key pair
    fn create(&self, id: SchemeId) -> Result<Box<dyn SignatureScheme>, SchemeError>;
}

impl<T: SchemeFactory + ?Sized> SchemeFactory for &T {
    fn create(&self, id: SchemeId) -> Result<Box<dyn SignatureScheme>, SchemeError> {
        (**self).create(id)
    }
}
