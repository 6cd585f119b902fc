//! Errores de la aplicación (envuelven los de `card-core` y `card-domain`).
pub mod core_error;
pub mod domain_error;

pub use core_error::CoreError;
pub use domain_error::DomainError;
