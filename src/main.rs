use cardhash_rust::config::CONFIG;
use cardhash_rust::errors::{CoreError, DomainError};
use cardhash_rust::hashing::{hash_bytes, try_canonical_bytes, Fingerprintable};
use cardhash_rust::{Card, CardAction, CardActionInputField, CardBody, CardBodyField, CardHeader, HttpMethod};
use chrono::{Duration, Utc};
use serde_json::{to_string, to_string_pretty};

/// Simula lo que un conector produce en un ciclo de polling para el mismo
/// ticket. Cada llamada genera ids y fechas nuevas.
fn build_ticket_card(status: &str) -> Result<Card, DomainError> {
    let comment = CardActionInputField::builder().id("comment")
                                                 .label("Comment")
                                                 .format("textarea")
                                                 .min_length(1)
                                                 .max_length(500)
                                                 .build();
    let method = "post".parse::<HttpMethod>()?;
    let approve = CardAction::builder().primary(true)
                                       .action_key("DIRECT")
                                       .http_method(method)
                                       .url("https://connector.example.com/tickets/42/approve")
                                       .mutually_exclusive_set_id("approval")
                                       .remove_card_on_completion(true)
                                       .label("Approve")
                                       .completed_label("Approved")
                                       .build();
    let reply = CardAction::builder().action_key("USER_INPUT")
                                     .http_method(HttpMethod::Post)
                                     .url("https://connector.example.com/tickets/42/comment")
                                     .label("Comment")
                                     .user_input(comment)
                                     .request_param("ticket", "42")
                                     .build();
    let body = CardBody::builder().description("Database migration pending review")
                                  .field(CardBodyField::builder().field_type("GENERAL").title("Status").description(status).build())
                                  .field(CardBodyField::builder().field_type("GENERAL").title("Reporter").description("ops").build())
                                  .build();
    Ok(Card::builder().name("tickets")
                      .header(CardHeader::builder().title("Ticket 42").subtitle("Assigned to you").build())
                      .body(body)
                      .importance(1)
                      .action(approve)
                      .action(reply)
                      .tags(["ops", "db"])
                      .creation_date(Utc::now())
                      .expiration_date(Utc::now() + Duration::days(7))
                      .build())
}

fn main() -> Result<(), CoreError> {
    let config = &*CONFIG;
    println!("--- Demo de fingerprints (algoritmo extra: {}) ---", config.demo_algorithm);

    let first = build_ticket_card("open")?;
    let second = build_ticket_card("open")?;
    let changed = build_ticket_card("in progress")?;

    let payload = if config.pretty { to_string_pretty(&first)? } else { to_string(&first)? };
    println!("Card 1: {}", payload);
    println!("Card 1: {}", first);
    println!("Card 2: {}", second);
    println!("Card 3: {}", changed);
    println!("[dedup] ciclo 2 duplicado ? {}", first.is_duplicate_of(&second));
    // El body cambió pero solo entran los títulos de sus campos
    println!("[dedup] ciclo 3 duplicado ? {}", first.is_duplicate_of(&changed));

    let raw = try_canonical_bytes(&first.hashable())?;
    println!("[{}] digest del árbol de la card ({} bytes): {}",
             config.demo_algorithm,
             raw.len(),
             hash_bytes(config.demo_algorithm, &raw));
    Ok(())
}
