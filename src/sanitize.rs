//! Recursive field removal over JSON trees.
//!
//! Objects lose the named key and are then descended into; arrays are
//! descended into element by element. Strings, numbers, booleans and null
//! are left as they are.

use serde_json::{Map, Value};

/// Field carrying source-location metadata, never handed to a renderer.
pub const SOURCE_FIELD: &str = "src";

pub fn strip_field(value: &mut Value, field: &str) {
    match value {
        Value::Object(map) => strip_field_from_map(map, field),
        Value::Array(items) => {
            for item in items {
                strip_field(item, field);
            }
        }
        _ => {}
    }
}

pub fn strip_field_from_map(map: &mut Map<String, Value>, field: &str) {
    map.remove(field);
    for child in map.values_mut() {
        strip_field(child, field);
    }
}

/// True if `field` appears as a key anywhere in `value`.
#[cfg(test)]
pub fn contains_field(value: &Value, field: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(field) || map.values().any(|v| contains_field(v, field))
        }
        Value::Array(items) => items.iter().any(|v| contains_field(v, field)),
        _ => false,
    }
}
