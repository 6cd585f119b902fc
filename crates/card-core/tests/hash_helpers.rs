use card_core::hashing::{hash, HashableValue};
use std::collections::BTreeMap;

fn texts(items: &[&str]) -> HashableValue {
    HashableValue::texts(items.iter().copied())
}

#[test]
fn hash_value_produces_hex_64() {
    let h = hash(&texts(&["a", "b"]));
    assert_eq!(h.len(), card_core::constants::FINGERPRINT_HEX_LEN);
    assert!(h.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    // deterministic
    assert_eq!(h, hash(&texts(&["a", "b"])));
}

#[test]
fn sequence_order_matters() {
    assert_ne!(hash(&texts(&["a", "b"])), hash(&texts(&["b", "a"])));
}

#[test]
fn separators_inside_text_do_not_collide_with_lists() {
    let split = hash(&texts(&["a", "b"]));
    for joined in ["a,b", "a|b", "a;b", "a b", "ab"] {
        assert_ne!(hash(&texts(&[joined])), split, "{joined:?} collided with [a, b]");
    }
}

#[test]
fn empty_strings_count() {
    assert_ne!(hash(&texts(&["", ""])), hash(&texts(&["", "", ""])));
    assert_ne!(hash(&texts(&[""])), hash(&texts(&[])));
}

#[test]
fn null_differs_from_empty_sequence() {
    assert_ne!(hash(&HashableValue::Null), hash(&texts(&[])));
}

#[test]
fn mapping_key_order_is_irrelevant() {
    let a = HashableValue::text_map(vec![("x", "1"), ("y", "2"), ("z", "3")]);
    let b = HashableValue::text_map(vec![("z", "3"), ("x", "1"), ("y", "2")]);
    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn mapping_keys_and_entry_boundaries_matter() {
    let ac = HashableValue::text_map(vec![("a", "1"), ("c", "1")]);
    let ab = HashableValue::text_map(vec![("a", "1"), ("b", "1")]);
    assert_ne!(hash(&ac), hash(&ab));

    let one_entry = HashableValue::text_map(vec![("a", "1, b=2")]);
    let two_entries = HashableValue::text_map(vec![("a", "1"), ("b", "2")]);
    assert_ne!(hash(&one_entry), hash(&two_entries));
}

#[test]
fn mapping_differs_from_sequence_of_pairs() {
    let map = HashableValue::text_map(vec![("a", "1")]);
    let seq = texts(&["a", "1"]);
    assert_ne!(hash(&map), hash(&seq));
    assert_ne!(hash(&HashableValue::Mapping(BTreeMap::new())), hash(&texts(&[])));
}

#[test]
fn scalar_types_do_not_alias() {
    assert_ne!(hash(&HashableValue::Int(1)), hash(&HashableValue::Bool(true)));
    assert_ne!(hash(&HashableValue::Int(0)), hash(&HashableValue::Null));
    assert_ne!(hash(&HashableValue::Text("1".into())), hash(&HashableValue::Int(1)));
    assert_ne!(hash(&HashableValue::Text("true".into())), hash(&HashableValue::Bool(true)));
}

#[test]
fn concurrent_hashing_is_consistent() {
    let value = HashableValue::Sequence(vec![texts(&["a", "b"]),
                                             HashableValue::text_map(vec![("k", "v")]),
                                             HashableValue::Int(-42)]);
    let expected = hash(&value);
    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| hash(&value))).collect();
        handles.into_iter().map(|h| h.join().expect("hash thread panicked")).collect()
    });
    assert!(results.iter().all(|r| *r == expected));
}
