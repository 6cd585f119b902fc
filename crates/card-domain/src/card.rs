// card.rs
use card_core::{FieldTable, Fingerprintable, HashableValue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::sealed::{hashed_entity, seal};
use crate::{CardAction, CardBody, CardHeader};

/// Card emitida por un conector hacia la bandeja unificada.
///
/// El `hash` es el token de deduplicación que consume el hub de
/// notificaciones. Quedan fuera del hash `id`, `creation_date` y
/// `expiration_date`, que cambian cada vez que se regenera una card
/// semánticamente idéntica.
///
/// La cabecera y el cuerpo contribuyen como token de texto opaco: el valor de
/// su propio `hash()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<CardHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<CardBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    importance: Option<i32>,
    actions: Vec<CardAction>,
    tags: Vec<String>,
    creation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<DateTime<Utc>>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl Card {
    pub fn builder() -> CardBuilder {
        CardBuilder::default()
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn template(&self) -> Option<&str> { self.template.as_deref() }
    pub fn header(&self) -> Option<&CardHeader> { self.header.as_ref() }
    pub fn body(&self) -> Option<&CardBody> { self.body.as_ref() }
    pub fn image_url(&self) -> Option<&str> { self.image_url.as_deref() }
    pub fn importance(&self) -> Option<i32> { self.importance }
    pub fn actions(&self) -> &[CardAction] { &self.actions }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn creation_date(&self) -> DateTime<Utc> { self.creation_date }
    pub fn expiration_date(&self) -> Option<DateTime<Utc>> { self.expiration_date }

    /// Indica si dos cards son la misma notificación a efectos de deduplicación
    pub fn is_duplicate_of(&self, other: &Card) -> bool {
        self.hash == other.hash
    }
}

hashed_entity!(Card);

impl Fingerprintable for Card {
    fn field_table(&self) -> FieldTable {
        let Card { id: _,
                   name,
                   template,
                   header,
                   body,
                   image_url,
                   importance,
                   actions,
                   tags,
                   creation_date: _,
                   expiration_date: _,
                   hash: _,
                   custom_hash: _ } = self;
        let action_labels = HashableValue::Sequence(actions.iter().map(|a| HashableValue::from(a.label())).collect());
        FieldTable::new("card", 1).field("name", name.as_deref())
                                  .field("template", template.as_deref())
                                  .field("header", header.as_ref().map(CardHeader::hash))
                                  .field("body", body.as_ref().map(CardBody::hash))
                                  .field("imageUrl", image_url.as_deref())
                                  .field("importance", *importance)
                                  .field("actions", action_labels)
                                  .field("tags", HashableValue::texts(tags.iter().map(String::as_str)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "Card(id: {}, name: {}, actions: {}, hash: {})",
               self.id,
               self.name.as_deref().unwrap_or("unnamed"),
               self.actions.len(),
               self.hash)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    template: Option<String>,
    header: Option<CardHeader>,
    body: Option<CardBody>,
    image_url: Option<String>,
    importance: Option<i32>,
    actions: Vec<CardAction>,
    tags: Vec<String>,
    creation_date: Option<DateTime<Utc>>,
    expiration_date: Option<DateTime<Utc>>,
    hash: Option<String>,
}

impl CardBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn header(mut self, header: CardHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn body(mut self, body: CardBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn importance(mut self, importance: i32) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn action(mut self, action: CardAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Por defecto `build()` usa el instante actual.
    pub fn creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    pub fn expiration_date(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    pub fn build(self) -> Card {
        let mut card = Card { id: self.id.unwrap_or_else(Uuid::new_v4),
                              name: self.name,
                              template: self.template,
                              header: self.header,
                              body: self.body,
                              image_url: self.image_url,
                              importance: self.importance,
                              actions: self.actions,
                              tags: self.tags,
                              creation_date: self.creation_date.unwrap_or_else(Utc::now),
                              expiration_date: self.expiration_date,
                              hash: String::new(),
                              custom_hash: false };
        let (hash, custom_hash) = seal(&card, self.hash);
        card.hash = hash;
        card.custom_hash = custom_hash;
        card
    }
}
