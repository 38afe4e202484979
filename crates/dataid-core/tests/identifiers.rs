use dataid_canonical::Value;
use dataid_core::{convert_text_to_uuid, derive_id, derive_id_with, ContentId, IdMethod};
use proptest::prelude::*;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

fn sha256_of(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn uuid_id(value: &Value) -> String {
    derive_id(value, IdMethod::Uuid).unwrap().to_string()
}

#[test]
fn empty_inputs_have_fixed_identifiers() {
    assert_eq!(
        uuid_id(&Value::Bytes(vec![])),
        "5150bdd9-c6ab-3d68-a915-e58d5ac56d50"
    );
    assert_eq!(uuid_id(&Value::from("")), "5150bdd9-c6ab-3d68-a915-e58d5ac56d50");
    assert_eq!(uuid_id(&Value::Seq(vec![])), "2061443b-712a-3816-bbf6-0e31a077be9f");
    assert_eq!(
        uuid_id(&Value::from_json(json!({}))),
        "46369ab4-05ab-36da-bb30-49738a5110c9"
    );
}

#[test]
fn null_has_no_identifier() {
    assert!(derive_id(&Value::Null, IdMethod::Uuid).is_none());
}

#[test]
fn bytes_are_hashed_verbatim() {
    let data = b"test bytes";
    let expected = sha256_of(data);
    let value = Value::Bytes(data.to_vec());

    let digest = derive_id(&value, IdMethod::Sha256).unwrap();
    assert_eq!(digest.as_str(), expected);
    assert!(digest.is_sha256());

    let short = derive_id(&value, IdMethod::Uuid).unwrap();
    let expected_uuid = Uuid::new_v3(&Uuid::NAMESPACE_X500, format!("sha256={expected}").as_bytes());
    assert_eq!(short.as_str(), expected_uuid.to_string());
    assert_eq!(short.as_str().len(), 36);
}

#[test]
fn strings_are_hashed_as_utf8() {
    let expected = sha256_of("test string".as_bytes());
    let value = Value::from("test string");
    assert_eq!(derive_id(&value, IdMethod::Sha256).unwrap(), expected.as_str());
    assert_eq!(
        derive_id(&value, IdMethod::Uuid).unwrap().to_string(),
        convert_text_to_uuid(&format!("sha256={expected}")).to_string()
    );
}

#[test]
fn containers_are_hashed_through_canonical_text() {
    let value = Value::from_json(json!({"b": 1, "a": [2, 1]}));
    let expected = sha256_of(br#"{"a": [1, 2], "b": 1}"#);
    assert_eq!(derive_id(&value, IdMethod::Sha256).unwrap(), expected.as_str());
}

#[test]
fn key_and_element_order_do_not_matter() {
    let a = Value::from_json(json!({"b": [2, 1], "a": ["None", "a"]}));
    let b = Value::from_json(json!({"a": ["None", "a"], "b": [2, 1]}));
    let c = Value::from_json(json!({"a": ["a", "None"], "b": [1, 2]}));
    assert_eq!(derive_id(&a, IdMethod::Uuid), derive_id(&b, IdMethod::Uuid));
    assert_eq!(derive_id(&a, IdMethod::Uuid), derive_id(&c, IdMethod::Uuid));
}

#[test]
fn distinct_content_gives_distinct_ids() {
    for method in [IdMethod::Sha256, IdMethod::Uuid] {
        assert_ne!(
            derive_id(&Value::from("unique1"), method),
            derive_id(&Value::from("unique2"), method)
        );
    }
    assert_ne!(
        derive_id(&Value::from_json(json!([1])), IdMethod::Uuid),
        derive_id(&Value::from_json(json!(["1"])), IdMethod::Uuid)
    );
}

#[test]
fn long_inputs() {
    let text = Value::from("a".repeat(10_000));
    let bytes = Value::Bytes(vec![b'a'; 10_000]);
    for method in ["sha256", "uuid"] {
        assert!(derive_id_with(&text, method).is_some());
        assert!(derive_id_with(&bytes, method).is_some());
    }
    assert_eq!(
        derive_id(&text, IdMethod::Sha256),
        derive_id(&bytes, IdMethod::Sha256)
    );
}

#[test]
fn invalid_method_yields_nothing() {
    assert!(derive_id_with(&Value::from("test string"), "invalid_method").is_none());
}

#[test]
fn derived_ids_round_trip_through_parse() {
    let id = derive_id(&Value::from("consistent"), IdMethod::Uuid).unwrap();
    assert_eq!(ContentId::parse(id.as_str()).unwrap(), id);
}

proptest! {
    #[test]
    fn repeated_derivation_is_stable(items in proptest::collection::vec(-50i64..50, 0..8)) {
        let forward = Value::Seq(items.iter().copied().map(Value::Int).collect());
        let backward = Value::Seq(items.iter().rev().copied().map(Value::Int).collect());
        let first = derive_id(&forward, IdMethod::Sha256);
        prop_assert_eq!(first.clone(), derive_id(&forward, IdMethod::Sha256));
        prop_assert_eq!(first, derive_id(&backward, IdMethod::Sha256));
    }
}
