use card_domain::{Card, CardAction, CardActionInputField, CardBody, CardBodyField, CardHeader, HttpMethod};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

fn monkey_field() -> CardActionInputField {
    CardActionInputField::builder().id("monkey_name")
                                   .label("Monkey Name")
                                   .format("email")
                                   .min_length(3)
                                   .max_length(20)
                                   .build()
}

fn comment_action(id: Uuid) -> CardAction {
    CardAction::builder().id(id)
                         .primary(true)
                         .action_key("USER_INPUT")
                         .http_method(HttpMethod::Post)
                         .url("https://backend.example.com/comment")
                         .label("Comment")
                         .completed_label("Commented")
                         .user_input(monkey_field())
                         .request_param("issue", "PRJ-1")
                         .build()
}

fn ticket_card(tags: &[&str]) -> Card {
    Card::builder().name("jira")
                   .header(CardHeader::builder().title("PRJ-1").subtitles(["assigned to you"]).build())
                   .body(CardBody::builder().description("Fix it")
                                            .field(CardBodyField::builder().title("a").build())
                                            .field(CardBodyField::builder().title("b").build())
                                            .build())
                   .action(comment_action(Uuid::new_v4()))
                   .tags(tags.iter().copied())
                   .build()
}

#[test]
fn test_identical_input_fields_share_digest() {
    // Scenario 1
    let a = monkey_field();
    let b = monkey_field();
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.hash().len(), 64);
    assert!(a.hash().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn test_action_uuid_is_excluded() {
    // Scenario 2
    let a = comment_action(Uuid::new_v4());
    let b = comment_action(Uuid::new_v4());
    assert_ne!(a.id(), b.id());
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_header_null_vs_empty_subtitles() {
    // Scenario 3
    let null = CardHeader::builder().title("t").build();
    let empty = CardHeader::builder().title("t").subtitles(Vec::<String>::new()).build();
    assert_ne!(null.hash(), empty.hash());
}

#[test]
fn test_body_hash_is_stable() {
    // Scenario 4
    let body = ["a", "b", "c"].iter()
                              .fold(CardBody::builder(), |b, t| b.field(CardBodyField::builder().title(*t).build()))
                              .build();
    let first = body.computed_hash();
    let second = body.computed_hash();
    assert_eq!(first, second);
    assert_eq!(first, body.hash());
}

#[test]
fn test_card_tags_and_dates() {
    // Scenario 5
    let a = ticket_card(&["c", "d"]);
    let b = ticket_card(&["X", "d"]);
    assert_ne!(a.hash(), b.hash());

    let now = Utc::now();
    let header = CardHeader::builder().title("PRJ-1").build();
    let earlier = Card::builder().name("jira").header(header.clone()).creation_date(now - Duration::minutes(5)).build();
    let later = Card::builder().name("jira").header(header).creation_date(now).build();
    assert_eq!(earlier.hash(), later.hash());
}

#[test]
fn test_regenerated_card_is_duplicate() {
    // Dos ciclos de polling producen ids y fechas distintas para la misma card
    let first = ticket_card(&["c", "d"]);
    let second = ticket_card(&["c", "d"]);
    assert_ne!(first.id(), second.id());
    assert!(first.is_duplicate_of(&second));
}

#[test]
fn test_custom_hash_is_verbatim() {
    let card = Card::builder().name("jira").hash("PRJ-1@v7").build();
    assert_eq!(card.hash(), "PRJ-1@v7");
    assert!(card.has_custom_hash());
    assert_ne!(card.computed_hash(), card.hash());
    assert_eq!(card.computed_hash(), Card::builder().name("jira").build().hash());
}

#[test]
fn test_custom_child_hash_feeds_parent_token() {
    let plain = Card::builder().header(CardHeader::builder().title("t").build()).build();
    let custom = Card::builder().header(CardHeader::builder().title("t").hash("my-header").build()).build();
    assert_ne!(plain.hash(), custom.hash());
}

#[test]
fn test_payload_json_shape() {
    let card = ticket_card(&["c", "d"]);
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["hash"], card.hash());
    assert_eq!(json["tags"], json!(["c", "d"]));
    assert_eq!(json["header"]["subtitles"], json!(["assigned to you"]));
    assert_eq!(json["actions"][0]["type"], "POST");
    assert_eq!(json["actions"][0]["userInput"][0]["minLength"], 3);
    assert_eq!(json["body"]["fields"][1]["title"], "b");
    assert!(json.get("customHash").is_none());
}

#[test]
fn test_snapshots_hash_consistently_across_threads() {
    let card = ticket_card(&["c", "d"]);
    let expected = card.hash().to_string();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(card.computed_hash(), expected));
        }
    });
}
