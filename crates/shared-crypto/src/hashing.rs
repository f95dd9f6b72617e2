//! # Message Digest
//!
//! Every scheme hashes the message with SHA-256 before handing it to the
//! primitive, so arbitrarily long messages are treated uniformly.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type MessageDigest = [u8; 32];

/// Hash a message with SHA-256 (one-shot).
pub fn message_digest(message: &[u8]) -> MessageDigest {
    Sha256::digest(message).into()
}
