use thiserror::Error;

/// Errores del dominio de la aplicación
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validación fallida: {0}")]
    Validation(String),
}

impl From<card_domain::DomainError> for DomainError {
    fn from(e: card_domain::DomainError) -> Self {
        match e {
            card_domain::DomainError::Validation(msg) => DomainError::Validation(msg),
        }
    }
}
