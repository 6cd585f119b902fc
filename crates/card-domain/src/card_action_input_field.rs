// card_action_input_field.rs
use card_core::{FieldTable, Fingerprintable, HashableValue};
use indexmap::IndexMap;
use serde::Serialize;

use crate::sealed::{hashed_entity, seal};

/// Campo de entrada que una acción solicita al usuario antes de ejecutarse
/// (p. ej. un comentario o un motivo de rechazo).
///
/// Se construye con `CardActionInputField::builder()` y es inmutable tras
/// `build()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardActionInputField {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    min_length: i32,
    max_length: i32,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    options: IndexMap<String, String>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl CardActionInputField {
    pub fn builder() -> CardActionInputFieldBuilder {
        CardActionInputFieldBuilder::default()
    }

    pub fn id(&self) -> Option<&str> { self.id.as_deref() }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn format(&self) -> Option<&str> { self.format.as_deref() }
    pub fn min_length(&self) -> i32 { self.min_length }
    pub fn max_length(&self) -> i32 { self.max_length }
    pub fn options(&self) -> &IndexMap<String, String> { &self.options }
}

hashed_entity!(CardActionInputField);

impl Fingerprintable for CardActionInputField {
    fn field_table(&self) -> FieldTable {
        let CardActionInputField { id,
                                   label,
                                   format,
                                   min_length,
                                   max_length,
                                   options,
                                   hash: _,
                                   custom_hash: _ } = self;
        FieldTable::new("card_action_input_field", 1).field("id", id.as_deref())
                                                     .field("label", label.as_deref())
                                                     .field("format", format.as_deref())
                                                     .field("minLength", *min_length)
                                                     .field("maxLength", *max_length)
                                                     .field("options", HashableValue::text_map(options.iter().map(|(k, v)| (k.as_str(), v.as_str()))))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardActionInputFieldBuilder {
    id: Option<String>,
    label: Option<String>,
    format: Option<String>,
    min_length: i32,
    max_length: i32,
    options: IndexMap<String, String>,
    hash: Option<String>,
}

impl CardActionInputFieldBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn min_length(mut self, min_length: i32) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: i32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Añade (o reemplaza) una opción seleccionable.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(value.into(), label.into());
        self
    }

    /// Fija un hash propio; `build()` lo conserva tal cual.
    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    /// Normaliza longitudes y congela el campo.
    ///
    /// - `min_length < 0` pasa a 0.
    /// - `max_length < min_length` (ya normalizado) pasa a 0.
    pub fn build(self) -> CardActionInputField {
        let min_length = self.min_length.max(0);
        let max_length = if self.max_length < min_length { 0 } else { self.max_length };
        let mut field = CardActionInputField { id: self.id,
                                               label: self.label,
                                               format: self.format,
                                               min_length,
                                               max_length,
                                               options: self.options,
                                               hash: String::new(),
                                               custom_hash: false };
        let (hash, custom_hash) = seal(&field, self.hash);
        field.hash = hash;
        field.custom_hash = custom_hash;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monkey() -> CardActionInputFieldBuilder {
        CardActionInputField::builder().id("monkey_name")
                                       .label("Monkey Name")
                                       .format("email")
                                       .min_length(3)
                                       .max_length(20)
    }

    #[test]
    fn identical_fields_share_hash() {
        let a = monkey().build();
        let b = monkey().build();
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.hash().len(), 64);
    }

    #[test]
    fn builder_call_order_is_irrelevant() {
        let a = monkey().option("x", "X").option("y", "Y").build();
        let b = CardActionInputField::builder().option("y", "Y")
                                               .max_length(20)
                                               .format("email")
                                               .option("x", "X")
                                               .min_length(3)
                                               .label("Monkey Name")
                                               .id("monkey_name")
                                               .build();
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn negative_min_length_is_clamped() {
        let clamped = monkey().min_length(-5).max_length(10).build();
        assert_eq!(clamped.min_length(), 0);
        assert_eq!(clamped.hash(), monkey().min_length(0).max_length(10).build().hash());
    }

    #[test]
    fn max_below_min_is_zeroed() {
        let f = monkey().min_length(5).max_length(2).build();
        assert_eq!(f.max_length(), 0);
        assert_eq!(f.hash(), monkey().min_length(5).max_length(0).build().hash());
    }

    #[test]
    fn each_included_field_changes_hash() {
        let base = monkey().build();
        let variants = [monkey().id("other").build(),
                        monkey().label("Other").build(),
                        monkey().format("text").build(),
                        monkey().min_length(4).build(),
                        monkey().max_length(21).build(),
                        monkey().option("a", "A").build()];
        for v in &variants {
            assert_ne!(base.hash(), v.hash(), "{v:?}");
        }
    }

    #[test]
    fn custom_hash_is_verbatim() {
        let f = monkey().hash("my-key").build();
        assert_eq!(f.hash(), "my-key");
        assert!(f.has_custom_hash());
        assert_eq!(f.computed_hash(), monkey().build().hash());
    }
}
