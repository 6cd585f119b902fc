// card_action.rs
use card_core::{FieldTable, Fingerprintable, HashableValue};
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

use crate::sealed::{hashed_entity, seal};
use crate::{CardActionInputField, HttpMethod};

/// Acción ejecutable desde una card (aprobar, rechazar, comentar...).
///
/// El `id` se genera por instancia y NO entra al hash: dos acciones con los
/// mismos campos producidas en ciclos de polling distintos deben deduplicarse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    id: Uuid,
    primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    action_key: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    http_method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    allow_repeated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mutually_exclusive_set_id: Option<String>,
    remove_card_on_completion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_label: Option<String>,
    user_input: Vec<CardActionInputField>,
    request: IndexMap<String, String>,
    hash: String,
    #[serde(skip)]
    custom_hash: bool,
}

impl CardAction {
    pub fn builder() -> CardActionBuilder {
        CardActionBuilder::default()
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn primary(&self) -> bool { self.primary }
    pub fn action_key(&self) -> Option<&str> { self.action_key.as_deref() }
    pub fn http_method(&self) -> Option<HttpMethod> { self.http_method }
    pub fn url(&self) -> Option<&str> { self.url.as_deref() }
    pub fn allow_repeated(&self) -> bool { self.allow_repeated }
    pub fn mutually_exclusive_set_id(&self) -> Option<&str> { self.mutually_exclusive_set_id.as_deref() }
    pub fn remove_card_on_completion(&self) -> bool { self.remove_card_on_completion }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn completed_label(&self) -> Option<&str> { self.completed_label.as_deref() }
    pub fn user_input(&self) -> &[CardActionInputField] { &self.user_input }
    pub fn request(&self) -> &IndexMap<String, String> { &self.request }
}

hashed_entity!(CardAction);

impl Fingerprintable for CardAction {
    fn field_table(&self) -> FieldTable {
        let CardAction { id: _,
                         primary,
                         action_key,
                         http_method,
                         url,
                         allow_repeated,
                         mutually_exclusive_set_id,
                         remove_card_on_completion,
                         label,
                         completed_label,
                         user_input,
                         request,
                         hash: _,
                         custom_hash: _ } = self;
        // De cada input solo participa su id, en orden.
        let input_ids = HashableValue::Sequence(user_input.iter().map(|f| HashableValue::from(f.id())).collect());
        FieldTable::new("card_action", 1).field("primary", *primary)
                                         .field("actionKey", action_key.as_deref())
                                         .field("type", http_method.map(|m| m.as_str()))
                                         .field("url", url.as_deref())
                                         .field("allowRepeated", *allow_repeated)
                                         .field("mutuallyExclusiveSetId", mutually_exclusive_set_id.as_deref())
                                         .field("removeCardOnCompletion", *remove_card_on_completion)
                                         .field("label", label.as_deref())
                                         .field("completedLabel", completed_label.as_deref())
                                         .field("userInput", input_ids)
                                         .field("request", HashableValue::text_map(request.iter().map(|(k, v)| (k.as_str(), v.as_str()))))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardActionBuilder {
    id: Option<Uuid>,
    primary: bool,
    action_key: Option<String>,
    http_method: Option<HttpMethod>,
    url: Option<String>,
    allow_repeated: bool,
    mutually_exclusive_set_id: Option<String>,
    remove_card_on_completion: bool,
    label: Option<String>,
    completed_label: Option<String>,
    user_input: Vec<CardActionInputField>,
    request: IndexMap<String, String>,
    hash: Option<String>,
}

impl CardActionBuilder {
    /// Fija el id explícitamente; por defecto se genera un UUID v4 en `build()`.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn action_key(mut self, action_key: impl Into<String>) -> Self {
        self.action_key = Some(action_key.into());
        self
    }

    pub fn http_method(mut self, method: HttpMethod) -> Self {
        self.http_method = Some(method);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn allow_repeated(mut self, allow_repeated: bool) -> Self {
        self.allow_repeated = allow_repeated;
        self
    }

    pub fn mutually_exclusive_set_id(mut self, set_id: impl Into<String>) -> Self {
        self.mutually_exclusive_set_id = Some(set_id.into());
        self
    }

    pub fn remove_card_on_completion(mut self, remove: bool) -> Self {
        self.remove_card_on_completion = remove;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn completed_label(mut self, completed_label: impl Into<String>) -> Self {
        self.completed_label = Some(completed_label.into());
        self
    }

    pub fn user_input(mut self, field: CardActionInputField) -> Self {
        self.user_input.push(field);
        self
    }

    pub fn request_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.insert(key.into(), value.into());
        self
    }

    pub fn hash(mut self, custom: impl Into<String>) -> Self {
        self.hash = Some(custom.into());
        self
    }

    pub fn build(self) -> CardAction {
        let mut action = CardAction { id: self.id.unwrap_or_else(Uuid::new_v4),
                                      primary: self.primary,
                                      action_key: self.action_key,
                                      http_method: self.http_method,
                                      url: self.url,
                                      allow_repeated: self.allow_repeated,
                                      mutually_exclusive_set_id: self.mutually_exclusive_set_id,
                                      remove_card_on_completion: self.remove_card_on_completion,
                                      label: self.label,
                                      completed_label: self.completed_label,
                                      user_input: self.user_input,
                                      request: self.request,
                                      hash: String::new(),
                                      custom_hash: false };
        let (hash, custom_hash) = seal(&action, self.hash);
        action.hash = hash;
        action.custom_hash = custom_hash;
        action
    }
}
