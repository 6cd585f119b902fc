// Reexport de la implementación única ubicada en `card-core` para evitar
// duplicación de lógica de canonicalización/hashing a nivel de workspace.
pub use card_core::hashing::{canonical_bytes, hash, hash_bytes, hash_with, try_canonical_bytes, DigestAlgorithm, HashableValue};
pub use card_core::{FieldTable, Fingerprintable};
