use card_core::{FieldTable, Fingerprintable, HashableValue};
use serde::Serialize;

use crate::sealed::{hashed_entity, seal};

/// Cabecera de una card. `subtitles` distingue "sin subtítulos" (`None`,
/// hasheado como `Null`) de "lista vacía" (`Some(vec![])`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    subtitles: Option<Vec<String>>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl CardHeader {
    pub fn builder() -> CardHeaderBuilder {
        CardHeaderBuilder::default()
    }

    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn subtitles(&self) -> Option<&[String]> { self.subtitles.as_deref() }
}

hashed_entity!(CardHeader);

impl Fingerprintable for CardHeader {
    fn field_table(&self) -> FieldTable {
        let CardHeader { title,
                         subtitles,
                         hash: _,
                         custom_hash: _ } = self;
        let subtitles = match subtitles {
            Some(list) => HashableValue::texts(list.iter().map(String::as_str)),
            None => HashableValue::Null,
        };
        FieldTable::new("card_header", 1).field("title", title.as_deref())
                                         .field("subtitles", subtitles)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardHeaderBuilder {
    title: Option<String>,
    subtitles: Option<Vec<String>>,
    hash: Option<String>,
}

impl CardHeaderBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Reemplaza la lista completa; una lista vacía sigue siendo `Some`.
    pub fn subtitles<I, S>(mut self, subtitles: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.subtitles = Some(subtitles.into_iter().map(Into::into).collect());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitles.get_or_insert_with(Vec::new).push(subtitle.into());
        self
    }

    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    pub fn build(self) -> CardHeader {
        let mut header = CardHeader { title: self.title,
                                      subtitles: self.subtitles,
                                      hash: String::new(),
                                      custom_hash: false };
        let (hash, custom_hash) = seal(&header, self.hash);
        header.hash = hash;
        header.custom_hash = custom_hash;
        header
    }
}
