//! Hash helpers – reduce la codificación canónica a un digest hex de longitud fija.
//!
//! SHA-256 es el algoritmo de los fingerprints de entidades. `Blake3` queda
//! disponible para quien lo pida explícitamente con `hash_with`.

use std::fmt;
use std::str::FromStr;

use blake3::Hasher as Blake3Hasher;
use log::trace;
use sha2::{Digest, Sha256};

use super::canonical::canonical_bytes;
use super::value::HashableValue;
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            other => Err(CoreError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Fingerprint de un árbol de valores: SHA-256 sobre la forma canónica, en hex
/// minúscula (64 caracteres).
pub fn hash(root: &HashableValue) -> String {
    hash_with(DigestAlgorithm::Sha256, root)
}

/// Igual que `hash` pero con el algoritmo indicado.
pub fn hash_with(algorithm: DigestAlgorithm, root: &HashableValue) -> String {
    let bytes = canonical_bytes(root);
    trace!("hashing {} canonical bytes with {}", bytes.len(), algorithm);
    hash_bytes(algorithm, &bytes)
}

/// Hashea bytes ya codificados y devuelve hex.
pub fn hash_bytes(algorithm: DigestAlgorithm, bytes: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha256 => {
            let mut h = Sha256::new();
            h.update(bytes);
            format!("{:x}", h.finalize())
        }
        DigestAlgorithm::Blake3 => {
            let mut h = Blake3Hasher::new();
            h.update(bytes);
            h.finalize().to_hex().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_known_values() {
        // sha256(0x00)
        assert_eq!(hash(&HashableValue::Null), "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d");
        // sha256(03 00000003 "abc")
        assert_eq!(hash(&HashableValue::Text("abc".into())),
                   "0961c7516ae5cdf6180a8b125040ce0b97858129bfd839b961bf1b7e4d4a524d");
        // sha256(04 00000000)
        assert_eq!(hash(&HashableValue::Sequence(vec![])),
                   "88420266dfd64d604627234a8a6c75cf6477c6fd5505df0d17c59959ae9ce234");
    }

    #[test]
    fn blake3_differs_but_has_same_length() {
        let v = HashableValue::Text("abc".into());
        let b = hash_with(DigestAlgorithm::Blake3, &v);
        assert_eq!(b.len(), 64);
        assert!(b.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(b, hash(&v));
    }

    #[test]
    fn algorithm_parse() {
        assert_eq!("SHA256".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha256));
        assert_eq!(" blake3 ".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Blake3));
        assert_eq!("md5".parse::<DigestAlgorithm>(), Err(CoreError::UnknownAlgorithm("md5".into())));
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha256);
    }
}
