//! Tests for JSON <-> YAML conversion

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tcv::converters::{json_to_yaml, yaml_to_json};
use tcv::{ConversionError, ConversionErrorKind};

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_json_yaml_json_round_trip() {
    let documents = [
        r#"{"name": "Alice", "age": 30, "active": true}"#,
        r#"[1, "two", null, 4.5, {"nested": [false]}]"#,
        r#"{"empty_obj": {}, "empty_arr": [], "quote": "it's \"quoted\""}"#,
        r#""just a string""#,
        "42",
        "null",
    ];

    for document in documents {
        let yaml = json_to_yaml(document).unwrap();
        let back = yaml_to_json(&yaml).unwrap();
        assert_eq!(parse(&back), parse(document), "via yaml:\n{}", yaml);
    }
}

#[test]
fn test_key_order_survives_round_trip() {
    let yaml = json_to_yaml(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let json = yaml_to_json(&yaml).unwrap();
    let keys: Vec<String> = parse(&json).as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_yaml_to_json_pretty_output() {
    let json = yaml_to_json("name: tcv\ntags:\n  - cli\n  - rust\n").unwrap();
    assert_eq!(
        json,
        "{\n  \"name\": \"tcv\",\n  \"tags\": [\n    \"cli\",\n    \"rust\"\n  ]\n}"
    );
}

#[test]
fn test_yaml_scalars() {
    let json = yaml_to_json("int: 7\nfloat: 1.5\nbool: yes\nnothing: ~\n").unwrap();
    // YAML 1.2: `yes` is a plain string
    assert_eq!(
        parse(&json),
        json!({"int": 7, "float": 1.5, "bool": "yes", "nothing": null})
    );
}

#[test]
fn test_invalid_json_reports_location() {
    let err = json_to_yaml("{\n  \"a\": 1,\n  oops\n}").unwrap_err();
    assert_eq!(err.kind(), ConversionErrorKind::Parse);
    match err {
        ConversionError::Parse(parse_error) => assert!(parse_error.location.is_some()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_yaml() {
    let err = yaml_to_json("key: [unclosed").unwrap_err();
    assert_eq!(err.kind(), ConversionErrorKind::Parse);
    assert!(err.user_message().contains("line"));
}

#[test]
fn test_empty_document_is_null() {
    assert_eq!(yaml_to_json("").unwrap(), "null");
    assert_eq!(yaml_to_json("\n  \n").unwrap(), "null");
}

#[test]
fn test_tags_are_unwrapped() {
    let json = yaml_to_json("point: !point [1, 2]\nconfig: !settings {debug: true}\n").unwrap();
    assert_eq!(
        parse(&json),
        json!({"point": [1, 2], "config": {"debug": true}})
    );
}

#[test]
fn test_non_finite_floats_become_null() {
    assert_eq!(yaml_to_json(".nan").unwrap(), "null");
    let json = yaml_to_json("up: .inf\ndown: -.inf\nok: 2.5\n").unwrap();
    assert_eq!(parse(&json), json!({"up": null, "down": null, "ok": 2.5}));
}

#[test]
fn test_merge_keys_in_nested_mappings() {
    let yaml = "defaults: &defaults\n  retries: 3\n  timeout: 10\nservices:\n  api:\n    <<: *defaults\n    timeout: 30\n";
    let json = yaml_to_json(yaml).unwrap();
    assert_eq!(
        parse(&json)["services"]["api"],
        json!({"retries": 3, "timeout": 30})
    );
}
