//! card-core: motor de fingerprints canónicos.
//!
//! `HashableValue` → codificación canónica binaria → SHA-256 hex. Sin I/O,
//! sin reloj, sin estado compartido.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;

pub use errors::CoreError;
pub use hashing::{canonical_bytes, hash, hash_with, DigestAlgorithm, HashableValue};
pub use model::{FieldTable, Fingerprintable};
