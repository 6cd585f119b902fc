use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de hashing: {0}")]
    Hashing(#[from] card_core::CoreError),
    #[error("Error de dominio: {0}")]
    Domain(#[from] super::domain_error::DomainError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
