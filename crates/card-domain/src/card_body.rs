use card_core::{FieldTable, Fingerprintable, HashableValue};
use serde::Serialize;

use crate::sealed::{hashed_entity, seal};
use crate::CardBodyField;

/// Cuerpo de una card: descripción libre más una lista ordenada de campos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fields: Vec<CardBodyField>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl CardBody {
    pub fn builder() -> CardBodyBuilder {
        CardBodyBuilder::default()
    }

    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn fields(&self) -> &[CardBodyField] { &self.fields }
}

hashed_entity!(CardBody);

impl Fingerprintable for CardBody {
    fn field_table(&self) -> FieldTable {
        let CardBody { description,
                       fields,
                       hash: _,
                       custom_hash: _ } = self;
        let titles = HashableValue::Sequence(fields.iter().map(|f| HashableValue::from(f.title())).collect());
        FieldTable::new("card_body", 1).field("description", description.as_deref())
                                       .field("fields", titles)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBodyBuilder {
    description: Option<String>,
    fields: Vec<CardBodyField>,
    hash: Option<String>,
}

impl CardBodyBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: CardBodyField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    pub fn build(self) -> CardBody {
        let mut body = CardBody { description: self.description,
                                  fields: self.fields,
                                  hash: String::new(),
                                  custom_hash: false };
        let (hash, custom_hash) = seal(&body, self.hash);
        body.hash = hash;
        body.custom_hash = custom_hash;
        body
    }
}
