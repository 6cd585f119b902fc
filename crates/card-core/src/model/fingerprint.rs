//! Tabla de campos versionada y trait `Fingerprintable`.
//!
//! Una `FieldTable` es el modelo previo a canonicalizar: agrupa los campos
//! incluidos de una entidad bajo su nombre de wire y un identificador de
//! esquema (`"card_action/v1"`). NO es el fingerprint final; ese se obtiene con
//! `hashing::hash` sobre `FieldTable::into_value`.

use std::collections::BTreeMap;

use crate::constants::SCHEMA_KEY;
use crate::hashing::{hash, HashableValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTable {
    schema: String,
    fields: BTreeMap<String, HashableValue>,
}

impl FieldTable {
    pub fn new(entity: &str, version: u32) -> Self {
        Self { schema: format!("{entity}/v{version}"),
               fields: BTreeMap::new() }
    }

    /// Añade un campo incluido. Cada campo se escribe siempre (un opcional
    /// ausente llega como `Null`).
    pub fn field(mut self, name: &str, value: impl Into<HashableValue>) -> Self {
        debug_assert!(name != SCHEMA_KEY, "field name collides with schema key");
        let previous = self.fields.insert(name.to_string(), value.into());
        debug_assert!(previous.is_none(), "duplicate field in table: {name}");
        self
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn into_value(self) -> HashableValue {
        let mut map = self.fields;
        map.insert(SCHEMA_KEY.to_string(), HashableValue::Text(self.schema));
        HashableValue::Mapping(map)
    }
}

/// Entidad capaz de proyectar sus campos incluidos a un `HashableValue`.
///
/// Las implementaciones deben desestructurar la entidad de forma exhaustiva
/// (sin `..`) para que añadir un campo obligue a clasificarlo como incluido o
/// excluido.
pub trait Fingerprintable {
    fn field_table(&self) -> FieldTable;

    fn hashable(&self) -> HashableValue {
        self.field_table().into_value()
    }

    fn fingerprint(&self) -> String {
        hash(&self.hashable())
    }
}
