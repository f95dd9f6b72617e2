//! Test utilities for the benchmark harness.
//!
//! Scripted scheme instances that misbehave in controlled ways, and a
//! factory that counts how many instances the harness asked for.
//! Enable with the `test-utils` feature flag.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use shared_crypto::{message_digest, SchemeError, SchemeId, Signature, SignatureScheme};

use crate::ports::outbound::SchemeFactory;

/// How a [`MockScheme`] behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockBehavior {
    /// Signs and verifies correctly.
    Honest,
    /// Every verification returns `false`.
    AlwaysReject,
    /// The second verification on an instance contradicts the first.
    FlipFlop,
    /// Every verification raises an error.
    VerifyError,
    /// The second verification on an instance raises an error.
    FlakyVerify,
    /// Signing fails.
    FailSign,
    /// Public key export returns no bytes.
    EmptyExport,
    /// Signing produces an empty signature.
    EmptySignature,
}

/// Deterministic stand-in for a real scheme.
///
/// A signature is the 8-byte key id followed by the SHA-256 of the message,
/// so it verifies exactly under the matching public key id.
pub struct MockScheme {
    id: SchemeId,
    behavior: MockBehavior,
    secret_key: u64,
    public_key: u64,
    verify_calls: AtomicUsize,
}

impl MockScheme {
    /// Create an instance owning key id `key`.
    pub fn new(id: SchemeId, behavior: MockBehavior, key: u64) -> Self {
        Self {
            id,
            behavior,
            secret_key: key,
            public_key: key,
            verify_calls: AtomicUsize::new(0),
        }
    }

    fn expected(key: u64, message: &[u8]) -> Vec<u8> {
        let mut bytes = key.to_be_bytes().to_vec();
        bytes.extend_from_slice(&message_digest(message));
        bytes
    }
}

impl SignatureScheme for MockScheme {
    fn id(&self) -> SchemeId {
        self.id
    }

    fn generate_key_pair(&mut self) -> Result<(), SchemeError> {
        let key = self.secret_key.wrapping_add(1 << 32);
        self.secret_key = key;
        self.public_key = key;
        Ok(())
    }

    fn sign(&self, message: &[u8]) -> Result<Signature, SchemeError> {
        match self.behavior {
            MockBehavior::FailSign => Err(SchemeError::Signing("scripted failure".into())),
            MockBehavior::EmptySignature => Ok(Signature::from_bytes(Vec::new())),
            _ => Ok(Signature::from_bytes(Self::expected(self.secret_key, message))),
        }
    }

    fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, SchemeError> {
        let call = self.verify_calls.fetch_add(1, Ordering::SeqCst);
        let honest = signature.as_bytes() == Self::expected(self.public_key, message).as_slice();

        match self.behavior {
            MockBehavior::AlwaysReject => Ok(false),
            MockBehavior::VerifyError => Err(SchemeError::Verification("scripted failure".into())),
            MockBehavior::FlipFlop if call % 2 == 1 => Ok(!honest),
            MockBehavior::FlakyVerify if call % 2 == 1 => {
                Err(SchemeError::Verification("scripted second-call failure".into()))
            }
            _ => Ok(honest),
        }
    }

    fn export_public_key(&self) -> Result<Vec<u8>, SchemeError> {
        if self.behavior == MockBehavior::EmptyExport {
            return Ok(Vec::new());
        }
        Ok(self.public_key.to_be_bytes().to_vec())
    }

    fn export_private_key(&self) -> Result<Vec<u8>, SchemeError> {
        let mut bytes = self.secret_key.to_be_bytes().to_vec();
        bytes.extend_from_slice(&self.secret_key.to_le_bytes());
        Ok(bytes)
    }

    fn import_public_key(&mut self, bytes: &[u8]) -> Result<(), SchemeError> {
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| SchemeError::import_length(8, bytes.len()))?;
        self.public_key = u64::from_be_bytes(raw);
        Ok(())
    }
}

/// Factory handing out [`MockScheme`]s with distinct key ids.
pub struct MockFactory {
    behavior: MockBehavior,
    fail_after: Option<usize>,
    next_key: AtomicU64,
    created: AtomicUsize,
}

impl MockFactory {
    /// Factory whose instances all follow `behavior`.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            fail_after: None,
            next_key: AtomicU64::new(1),
            created: AtomicUsize::new(0),
        }
    }

    /// Honest instances, but key generation fails once `successes` instances
    /// have been handed out.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::new(MockBehavior::Honest)
        }
    }

    /// Number of instances successfully created so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl SchemeFactory for MockFactory {
    fn create(&self, id: SchemeId) -> Result<Box<dyn SignatureScheme>, SchemeError> {
        if let Some(limit) = self.fail_after {
            if self.created() >= limit {
                return Err(SchemeError::KeyGeneration("scripted failure".into()));
            }
        }
        let key = self.next_key.fetch_add(1, Ordering::SeqCst);
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockScheme::new(id, self.behavior, key)))
    }
}
