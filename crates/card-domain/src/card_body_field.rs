use card_core::{FieldTable, Fingerprintable, HashableValue};
use indexmap::IndexMap;
use serde::Serialize;

use crate::sealed::{hashed_entity, seal};

/// Campo del cuerpo de una card. Solo su `title` se propaga al hash del
/// `CardBody` contenedor; el hash propio cubre además tipo, descripción y
/// contenido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBodyField {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<IndexMap<String, String>>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl CardBodyField {
    pub fn builder() -> CardBodyFieldBuilder {
        CardBodyFieldBuilder::default()
    }

    pub fn field_type(&self) -> Option<&str> { self.field_type.as_deref() }
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn content(&self) -> &[IndexMap<String, String>] { &self.content }
}

hashed_entity!(CardBodyField);

impl Fingerprintable for CardBodyField {
    fn field_table(&self) -> FieldTable {
        let CardBodyField { field_type,
                            title,
                            description,
                            content,
                            hash: _,
                            custom_hash: _ } = self;
        let content = content.iter()
                             .map(|row| HashableValue::text_map(row.iter().map(|(k, v)| (k.as_str(), v.as_str()))))
                             .collect::<Vec<_>>();
        FieldTable::new("card_body_field", 1).field("type", field_type.as_deref())
                                             .field("title", title.as_deref())
                                             .field("description", description.as_deref())
                                             .field("content", HashableValue::Sequence(content))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBodyFieldBuilder {
    field_type: Option<String>,
    title: Option<String>,
    description: Option<String>,
    content: Vec<IndexMap<String, String>>,
    hash: Option<String>,
}

impl CardBodyFieldBuilder {
    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Añade una fila de contenido (clave → valor) al final.
    pub fn content<I, K, V>(mut self, row: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>
    {
        self.content.push(row.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    pub fn build(self) -> CardBodyField {
        let mut field = CardBodyField { field_type: self.field_type,
                                        title: self.title,
                                        description: self.description,
                                        content: self.content,
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

    #[test]
    fn content_rows_are_ordered_but_row_keys_are_not() {
        let a = CardBodyField::builder().content([("a", "1"), ("b", "2")]).content([("c", "3")]).build();
        let b = CardBodyField::builder().content([("b", "2"), ("a", "1")]).content([("c", "3")]).build();
        let c = CardBodyField::builder().content([("c", "3")]).content([("a", "1"), ("b", "2")]).build();
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), c.hash());
    }

    #[test]
    fn title_and_description_change_hash() {
        let base = CardBodyField::builder().field_type("GENERAL").title("t").description("d").build();
        assert_ne!(base.hash(), CardBodyField::builder().field_type("GENERAL").title("u").description("d").build().hash());
        assert_ne!(base.hash(), CardBodyField::builder().field_type("GENERAL").title("t").description("e").build().hash());
        assert_ne!(base.hash(), CardBodyField::builder().field_type("COMMENT").title("t").description("d").build().hash());
    }
}
