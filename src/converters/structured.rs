//! JSON <-> YAML conversion through a key-order-preserving `serde_json::Value` tree

use crate::error::{ConversionError, ConversionResult, ParseError};
use serde_json::{Map, Number, Value};

/// Parse JSON text and re-serialize it as block-style YAML.
pub fn json_to_yaml(text: &str) -> ConversionResult<String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ParseError::from_json("Invalid JSON", &e))?;

    serde_yaml::to_string(&value)
        .map_err(|e| ConversionError::format(format!("Failed to serialize YAML: {}", e)))
}

/// Parse a single YAML document and re-serialize it as JSON with 2-space indentation.
///
/// Merge keys (`<<: *anchor`) are resolved before conversion.
pub fn yaml_to_json(text: &str) -> ConversionResult<String> {
    // An empty document is null
    if text.trim().is_empty() {
        return Ok(Value::Null.to_string());
    }

    let mut yaml: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| ParseError::from_yaml("Invalid YAML", &e))?;
    yaml.apply_merge()
        .map_err(|e| ParseError::from_yaml("Invalid YAML merge key", &e))?;

    let value = yaml_value_to_json(yaml);
    serde_json::to_string_pretty(&value)
        .map_err(|e| ConversionError::format(format!("Failed to serialize JSON: {}", e)))
}

/// Convert a YAML tree into the JSON data model.
///
/// Mapping keys that are not strings are rendered as their YAML scalar text,
/// tags are dropped and non-finite floats become `null`.
fn yaml_value_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Value::Number(Number::from(u))
            } else {
                num.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_value_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = Map::new();
            for (k, v) in map {
                obj.insert(mapping_key(k), yaml_value_to_json(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_value_to_json(tagged.value),
    }
}

fn mapping_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
