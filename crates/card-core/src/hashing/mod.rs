//! Módulo de hashing: modelo de valores, codificación canónica y digest.

pub mod canonical;
pub mod hash;
pub mod value;

pub use canonical::{canonical_bytes, try_canonical_bytes};
pub use hash::{hash, hash_bytes, hash_with, DigestAlgorithm};
pub use value::{HashableValue, Tag};
