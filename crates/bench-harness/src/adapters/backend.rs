//! Production scheme factory backed by the real cryptographic libraries.

use shared_crypto::{SchemeError, SchemeId, SignatureScheme};

use crate::ports::outbound::SchemeFactory;

/// Builds real `p256` / `pqcrypto-mldsa` instances.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackendFactory;

impl SchemeFactory for BackendFactory {
    fn create(&self, id: SchemeId) -> Result<Box<dyn SignatureScheme>, SchemeError> {
        id.instantiate()
    }
}
