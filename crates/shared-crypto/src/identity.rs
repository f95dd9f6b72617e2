//! # Scheme Identity
//!
//! The fixed set of benchmarked signature schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ecdsa::EcdsaScheme;
use crate::ml_dsa::{MlDsa44Scheme, MlDsa65Scheme, MlDsa87Scheme};
use crate::{SchemeError, SignatureScheme};

/// A concrete signature algorithm / parameter level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeId {
    /// Classical ECDSA over P-256
    #[serde(rename = "ECDSA")]
    Ecdsa,
    /// ML-DSA security category 2
    #[serde(rename = "ML-DSA-44")]
    MlDsa44,
    /// ML-DSA security category 3
    #[serde(rename = "ML-DSA-65")]
    MlDsa65,
    /// ML-DSA security category 5
    #[serde(rename = "ML-DSA-87")]
    MlDsa87,
}

impl SchemeId {
    /// All schemes, in canonical run order.
    pub const ALL: [SchemeId; 4] = [
        SchemeId::Ecdsa,
        SchemeId::MlDsa44,
        SchemeId::MlDsa65,
        SchemeId::MlDsa87,
    ];

    /// Stable display name used in records and reports.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeId::Ecdsa => "ECDSA",
            SchemeId::MlDsa44 => "ML-DSA-44",
            SchemeId::MlDsa65 => "ML-DSA-65",
            SchemeId::MlDsa87 => "ML-DSA-87",
        }
    }

    /// Whether this is one of the lattice-based levels.
    pub fn is_post_quantum(&self) -> bool {
        !matches!(self, SchemeId::Ecdsa)
    }

    /// Construct a fresh instance owning freshly generated key material.
    ///
    /// Construction is key generation: no key pair is ever reused between
    /// two calls.
    pub fn instantiate(self) -> Result<Box<dyn SignatureScheme>, SchemeError> {
        Ok(match self {
            SchemeId::Ecdsa => Box::new(EcdsaScheme::generate()?),
            SchemeId::MlDsa44 => Box::new(MlDsa44Scheme::generate()?),
            SchemeId::MlDsa65 => Box::new(MlDsa65Scheme::generate()?),
            SchemeId::MlDsa87 => Box::new(MlDsa87Scheme::generate()?),
        })
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeId {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecdsa" | "classical-ec" => Ok(SchemeId::Ecdsa),
            "ml-dsa-44" | "mldsa44" | "lattice-44" => Ok(SchemeId::MlDsa44),
            "ml-dsa-65" | "mldsa65" | "lattice-65" => Ok(SchemeId::MlDsa65),
            "ml-dsa-87" | "mldsa87" | "lattice-87" => Ok(SchemeId::MlDsa87),
            _ => Err(SchemeError::UnknownScheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_stable() {
        let names: Vec<_> = SchemeId::ALL.iter().map(|id| id.to_string()).collect();
        assert_eq!(names, ["ECDSA", "ML-DSA-44", "ML-DSA-65", "ML-DSA-87"]);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("ECDSA".parse::<SchemeId>().unwrap(), SchemeId::Ecdsa);
        assert_eq!("classical-ec".parse::<SchemeId>().unwrap(), SchemeId::Ecdsa);
        assert_eq!("ml-dsa-65".parse::<SchemeId>().unwrap(), SchemeId::MlDsa65);
        assert_eq!(" lattice-87 ".parse::<SchemeId>().unwrap(), SchemeId::MlDsa87);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "rsa-2048".parse::<SchemeId>().unwrap_err();
        assert_eq!(err, SchemeError::UnknownScheme("rsa-2048".to_string()));
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&SchemeId::MlDsa44).unwrap();
        assert_eq!(json, "\"ML-DSA-44\"");
        let back: SchemeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SchemeId::MlDsa44);
    }

    #[test]
    fn test_instantiate_reports_own_id() {
        for id in SchemeId::ALL {
            let scheme = id.instantiate().unwrap();
            assert_eq!(scheme.id(), id);
        }
    }

    #[test]
    fn test_post_quantum_flag() {
        assert!(!SchemeId::Ecdsa.is_post_quantum());
        assert!(SchemeId::MlDsa87.is_post_quantum());
    }
}
