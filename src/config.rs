//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//!
//! Solo afecta a la salida del binario de demostración: los hashes de las
//! entidades no dependen nunca de la configuración.
use card_core::DigestAlgorithm;
use once_cell::sync::Lazy;
use std::env;

use crate::errors::core_error::CoreError;

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Algoritmo para el digest adicional que imprime la demo.
    pub demo_algorithm: DigestAlgorithm,
    /// Imprimir los payloads JSON con indentación.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { demo_algorithm: DigestAlgorithm::Sha256,
               pretty: true }
    }
}

impl AppConfig {
    /// Construye la configuración a partir de un lookup de variables.
    /// Variables ausentes toman su valor por defecto; valores inválidos son error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = AppConfig::default();
        let demo_algorithm = match lookup("CARDHASH_DEMO_ALGORITHM") {
            Some(v) => v.parse::<DigestAlgorithm>().map_err(|e| CoreError::Config(format!("CARDHASH_DEMO_ALGORITHM: {e}")))?,
            None => defaults.demo_algorithm,
        };
        let pretty = match lookup("CARDHASH_DEMO_PRETTY") {
            Some(v) => parse_flag(&v).ok_or_else(|| CoreError::Config(format!("CARDHASH_DEMO_PRETTY: invalid flag '{v}'")))?,
            None => defaults.pretty,
        };
        Ok(AppConfig { demo_algorithm, pretty })
    }

    /// Lee `.env` (si existe) y el entorno del proceso.
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
/// Una configuración inválida se registra y se sustituye por la de defecto.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_env().unwrap_or_else(|e| {
        log::warn!("invalid configuration, using defaults: {e}");
        AppConfig::default()
    })
});
