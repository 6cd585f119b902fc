// Cierre de un snapshot: calcula su hash o aplica el override del conector.
use card_core::{hash, Fingerprintable};
use log::debug;

/// Devuelve `(hash, es_override)`. Con override el valor se devuelve tal cual,
/// sin pasar por el encoder.
pub(crate) fn seal<T: Fingerprintable>(entity: &T, custom: Option<String>) -> (String, bool) {
    match custom {
        Some(custom) => {
            debug!("custom hash supplied, skipping computation");
            (custom, true)
        }
        None => {
            let table = entity.field_table();
            let schema = table.schema().to_string();
            let digest = hash(&table.into_value());
            debug!("{}: computed hash {}", schema, &digest[..12]);
            (digest, false)
        }
    }
}

/// Accesores comunes a todas las entidades con hash.
macro_rules! hashed_entity {
    ($ty:ty) => {
        impl $ty {
            /// Token de deduplicación: el override si se suministró, si no el
            /// digest calculado en `build()`.
            pub fn hash(&self) -> &str {
                &self.hash
            }

            pub fn has_custom_hash(&self) -> bool {
                self.custom_hash
            }

            /// Recalcula el digest desde el snapshot, ignorando cualquier override.
            pub fn computed_hash(&self) -> String {
                card_core::Fingerprintable::fingerprint(self)
            }
        }
    };
}

pub(crate) use hashed_entity;
