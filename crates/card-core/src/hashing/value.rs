//! Modelo de valores hasheables.
//!
//! `HashableValue` es el conjunto cerrado de formas que puede tomar cualquier
//! dato que participe en un fingerprint. Las entidades del dominio no se
//! hashean directamente: primero se proyectan a un árbol de `HashableValue`
//! (ver `model::fingerprint::FieldTable`) y luego ese árbol se codifica en
//! forma canónica.

use std::collections::BTreeMap;

/// Etiqueta de tipo de un valor. El discriminante es el byte que abre cada
/// valor en la codificación canónica; no reordenar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Null = 0x00,
    Bool = 0x01,
    Int = 0x02,
    Text = 0x03,
    Sequence = 0x04,
    Mapping = 0x05,
}

impl Tag {
    pub fn byte(self) -> u8 {
        self as u8
    }
}

/// Valor hasheable (árbol inmutable, transitorio).
///
/// - `Sequence`: el orden es semánticamente significativo.
/// - `Mapping`: el orden NO es significativo; las claves son únicas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashableValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Sequence(Vec<HashableValue>),
    Mapping(BTreeMap<String, HashableValue>),
}

impl HashableValue {
    /// Etiqueta del valor. El `match` es exhaustivo: añadir una variante
    /// obliga a decidir su byte de tipo aquí y su framing en el encoder.
    pub fn tag(&self) -> Tag {
        match self {
            HashableValue::Null => Tag::Null,
            HashableValue::Bool(_) => Tag::Bool,
            HashableValue::Int(_) => Tag::Int,
            HashableValue::Text(_) => Tag::Text,
            HashableValue::Sequence(_) => Tag::Sequence,
            HashableValue::Mapping(_) => Tag::Mapping,
        }
    }

    /// Secuencia de textos preservando el orden recibido.
    pub fn texts<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        HashableValue::Sequence(items.into_iter().map(|s| HashableValue::Text(s.into())).collect())
    }

    /// Mapping texto→texto. El orden de iteración de `entries` es irrelevante
    /// para el resultado; claves repetidas conservan el último valor.
    pub fn text_map<I, K, V>(entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>
    {
        HashableValue::Mapping(entries.into_iter()
                                      .map(|(k, v)| (k.into(), HashableValue::Text(v.into())))
                                      .collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, HashableValue::Null)
    }
}

impl From<bool> for HashableValue {
    fn from(b: bool) -> Self {
        HashableValue::Bool(b)
    }
}

impl From<i64> for HashableValue {
    fn from(n: i64) -> Self {
        HashableValue::Int(n)
    }
}

impl From<i32> for HashableValue {
    fn from(n: i32) -> Self {
        HashableValue::Int(i64::from(n))
    }
}

impl From<&str> for HashableValue {
    fn from(s: &str) -> Self {
        HashableValue::Text(s.to_string())
    }
}

impl From<String> for HashableValue {
    fn from(s: String) -> Self {
        HashableValue::Text(s)
    }
}

impl From<&String> for HashableValue {
    fn from(s: &String) -> Self {
        HashableValue::Text(s.clone())
    }
}

// Campo opcional ausente => Null (nunca se omite del árbol).
impl<T: Into<HashableValue>> From<Option<T>> for HashableValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => HashableValue::Null,
        }
    }
}

impl<T: Into<HashableValue>> From<Vec<T>> for HashableValue {
    fn from(items: Vec<T>) -> Self {
        HashableValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}
