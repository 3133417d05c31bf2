//! Tests for the item list codec
//!
//! These tests verify:
//! - Encoding produces the persisted JSON shape
//! - Decoding keeps order, fields and ids
//! - Records without an id still decode
//! - Invalid input is reported as a serialization error

use cashbook::codec::{decode_items, encode_items};
use cashbook::{CashError, Item};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Coffee", "Personal", 3.5),
        Item::new("Laptop", "Business", 1299.99),
        Item::new("", "Personal", 0.0),
        Item::new("Refund", "Personal", -20.0),
    ]
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_field_names() {
    let item = Item::new("Coffee", "Personal", 3.5);
    let bytes = encode_items(std::slice::from_ref(&item)).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let record = &value.as_array().unwrap()[0];

    assert_eq!(record["id"], item.id().to_string());
    assert_eq!(record["name"], "Coffee");
    assert_eq!(record["type"], "Personal");
    assert_eq!(record["price"], 3.5);
    assert!(record.get("category").is_none());
}

#[test]
fn test_encode_empty_list() {
    let bytes = encode_items(&[]).unwrap();
    assert_eq!(bytes, b"[]");
}

#[test]
fn test_encode_rejects_non_finite_price() {
    let items = vec![Item::new("ok", "Personal", 1.0), Item::new("bad", "Personal", f64::NAN)];

    match encode_items(&items) {
        Err(CashError::Serialization(msg)) => assert!(msg.contains("bad")),
        other => panic!("expected serialization error, got {:?}", other),
    }

    assert!(encode_items(&[Item::new("inf", "Business", f64::INFINITY)]).is_err());
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_round_trip_keeps_order_and_ids() {
    let items = sample_items();

    let decoded = decode_items(&encode_items(&items).unwrap()).unwrap();

    assert_eq!(decoded, items);
    for (before, after) in items.iter().zip(&decoded) {
        assert_eq!(before.id(), after.id());
    }
}

#[test]
fn test_decode_record_without_id() {
    let json = br#"[{"name":"Tea","type":"Personal","price":2.0},
                    {"name":"Tea","type":"Personal","price":2.0}]"#;

    let decoded = decode_items(json).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].name(), "Tea");
    assert_eq!(decoded[0].price(), 2.0);
    assert_ne!(decoded[0].id(), decoded[1].id());
}

#[test]
fn test_decode_integer_price() {
    let json = br#"[{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"Rent","type":"Business","price":800}]"#;

    let decoded = decode_items(json).unwrap();

    assert_eq!(decoded[0].price(), 800.0);
    assert_eq!(decoded[0].id().to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
}

#[test]
fn test_decode_invalid_input() {
    let cases: [&[u8]; 5] = [
        b"",
        b"not json",
        b"{\"name\":\"Coffee\"}",
        b"[{\"name\":\"Coffee\",\"type\":\"Personal\"}]",
        &[0xff, 0xfe, 0x00],
    ];

    for bytes in cases {
        assert!(matches!(decode_items(bytes), Err(CashError::Serialization(_))));
    }
}
