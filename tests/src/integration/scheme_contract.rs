//! # Scheme Contract
//!
//! Properties every real backend must satisfy before the harness can trust
//! it: round trips on empty and non-empty messages, rejection of foreign
//! signatures as `false` rather than as an error, and export/import
//! re-materialising a working verifier.

#[cfg(test)]
mod tests {
    use shared_crypto::{SchemeError, SchemeId, Signature};

    const MESSAGES: [&[u8]; 4] = [
        b"",
        b"Short test",
        b"Test with special chars: !@#$%^&*()_+-=[]{}|;':\",./<>?",
        &[0x5Au8; 10_000],
    ];

    /// Test: verify(m, sign(m)) holds for every scheme and message
    #[test]
    fn test_round_trip_all_schemes() {
        for id in SchemeId::ALL {
            let scheme = id.instantiate().unwrap();
            for message in MESSAGES {
                let signature = scheme.sign(message).unwrap();
                assert!(
                    scheme.verify(message, &signature).unwrap(),
                    "{} failed on {}-byte message",
                    id,
                    message.len()
                );
            }
        }
    }

    /// Test: a signature under a different key is rejected, not an error
    #[test]
    fn test_foreign_signature_is_false() {
        for id in SchemeId::ALL {
            let alice = id.instantiate().unwrap();
            let bob = id.instantiate().unwrap();
            let signature = alice.sign(b"payload").unwrap();

            assert_eq!(bob.verify(b"payload", &signature), Ok(false), "{}", id);
        }
    }

    #[test]
    fn test_modified_message_is_false() {
        for id in SchemeId::ALL {
            let scheme = id.instantiate().unwrap();
            let signature = scheme.sign(b"payload").unwrap();
            assert_eq!(scheme.verify(b"payload!", &signature), Ok(false), "{}", id);
        }
    }

    #[test]
    fn test_unparseable_signature_is_error() {
        for id in SchemeId::ALL {
            let scheme = id.instantiate().unwrap();
            let garbage = Signature::from_bytes(vec![0xFF; 3]);
            assert!(
                matches!(
                    scheme.verify(b"payload", &garbage),
                    Err(SchemeError::Verification(_))
                ),
                "{}",
                id
            );
        }
    }

    /// Test: importPublicKey(exportPublicKey()) yields a working verifier
    #[test]
    fn test_export_import_cross_instance() {
        for id in SchemeId::ALL {
            let signer = id.instantiate().unwrap();
            let mut verifier = id.instantiate().unwrap();
            let signature = signer.sign(b"cross").unwrap();

            verifier
                .import_public_key(&signer.export_public_key().unwrap())
                .unwrap();

            assert!(verifier.verify(b"cross", &signature).unwrap(), "{}", id);
        }
    }

    /// Test: after import the instance no longer verifies its own signatures
    #[test]
    fn test_import_replaces_only_public_key() {
        for id in SchemeId::ALL {
            let other = id.instantiate().unwrap();
            let mut scheme = id.instantiate().unwrap();
            let private_before = scheme.export_private_key().unwrap();

            scheme
                .import_public_key(&other.export_public_key().unwrap())
                .unwrap();

            let own = scheme.sign(b"own").unwrap();
            assert_eq!(scheme.verify(b"own", &own), Ok(false), "{}", id);
            assert_eq!(scheme.export_private_key().unwrap(), private_before);
        }
    }

    #[test]
    fn test_generate_key_pair_is_fresh() {
        for id in SchemeId::ALL {
            let mut scheme = id.instantiate().unwrap();
            let before = scheme.export_public_key().unwrap();
            scheme.generate_key_pair().unwrap();
            assert_ne!(scheme.export_public_key().unwrap(), before, "{}", id);
        }
    }

    #[test]
    fn test_post_quantum_artifacts_are_larger() {
        let ecdsa = SchemeId::Ecdsa.instantiate().unwrap();
        let ecdsa_sig = ecdsa.sign(b"size").unwrap().len();

        for id in SchemeId::ALL.into_iter().filter(SchemeId::is_post_quantum) {
            let scheme = id.instantiate().unwrap();
            assert!(scheme.sign(b"size").unwrap().len() > ecdsa_sig);
            assert!(
                scheme.export_public_key().unwrap().len()
                    > ecdsa.export_public_key().unwrap().len()
            );
        }
    }
}
