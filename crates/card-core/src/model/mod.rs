//! Modelos neutrales (FieldTable, Fingerprintable)

pub mod fingerprint;

pub use fingerprint::{FieldTable, Fingerprintable};
