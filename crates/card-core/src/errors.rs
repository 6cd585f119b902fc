//! Errores específicos del core de hashing.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    /// Un texto, secuencia o mapping no cabe en el prefijo de longitud de 4 bytes.
    #[error("frame too large: {len} exceeds u32 length prefix")]
    FrameTooLarge { len: usize },
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),
}
