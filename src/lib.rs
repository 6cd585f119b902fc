//! CardHash Rust Library
//!
//! Este crate actúa como la fachada de los conectores:
//! - Expone `errors` para manejar errores de núcleo y dominio.
//! - Expone `hashing` con el motor de fingerprints canónicos.
//! - Expone `config` con la configuración del binario de demostración.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod hashing;

pub use card_domain::{Card, CardAction, CardActionInputField, CardBody, CardBodyField, CardHeader, HttpMethod};
