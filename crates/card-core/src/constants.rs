//! Constantes del motor de fingerprints.
//!
//! `SCHEMA_KEY` forma parte del árbol que se hashea: cambiarla altera todos los
//! digests emitidos y rompe la deduplicación entre ciclos de polling.

/// Clave reservada del `Mapping` raíz de cada entidad; su valor es
/// `"<entidad>/v<N>"`.
pub const SCHEMA_KEY: &str = "@schema";

/// Longitud en caracteres hex de un digest SHA-256.
pub const FINGERPRINT_HEX_LEN: usize = 64;
