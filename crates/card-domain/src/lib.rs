// card-domain library entry point
mod sealed;

pub mod card;
pub mod card_action;
pub mod card_action_input_field;
pub mod card_body;
pub mod card_body_field;
pub mod card_header;
pub mod error;
pub mod http_method;

pub use card::{Card, CardBuilder};
pub use card_action::{CardAction, CardActionBuilder};
pub use card_action_input_field::{CardActionInputField, CardActionInputFieldBuilder};
pub use card_body::{CardBody, CardBodyBuilder};
pub use card_body_field::{CardBodyField, CardBodyFieldBuilder};
pub use card_header::{CardHeader, CardHeaderBuilder};
pub use error::DomainError;
pub use http_method::HttpMethod;
