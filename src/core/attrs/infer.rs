// src/core/attrs/infer.rs

//! Type inference from untyped JSON values to the attribute-value model.
//!
//! Inference is a pure, total function: any JSON value maps to exactly one
//! `AttributeValue` variant, and shapes with no natural variant degrade to
//! their string representation rather than failing. Map key order is
//! preserved end to end (`serde_json` is built with `preserve_order`).

use crate::core::attrs::value::{AttributeMap, AttributeValue, AttributeValueUpdate, UpdateMap};
use serde_json::Value;

/// Maps a single JSON value to its attribute-value representation.
///
/// Scalars map directly; arrays map to sets with a homogeneity rule (an array
/// whose elements are all numbers becomes a number set, anything else,
/// including mixed-typed and empty arrays, becomes a string set with
/// string-coerced elements); objects map recursively.
pub fn infer(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null,
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Bool(b) => AttributeValue::Bool(*b),
        // All numeric forms, integral and fractional, keep their decimal text.
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::Array(items) => infer_set(items),
        Value::Object(entries) => AttributeValue::M(
            entries
                .iter()
                .map(|(name, value)| (name.clone(), infer(value)))
                .collect(),
        ),
    }
}

/// Converts a flat document into an attribute map, inferring every value.
pub fn infer_map(doc: &serde_json::Map<String, Value>) -> AttributeMap {
    doc.iter()
        .map(|(name, value)| (name.clone(), infer(value)))
        .collect()
}

/// Converts a flat document into an update map, wrapping every inferred value
/// with the replace action.
pub fn infer_update_map(doc: &serde_json::Map<String, Value>) -> UpdateMap {
    doc.iter()
        .map(|(name, value)| (name.clone(), AttributeValueUpdate::replace(infer(value))))
        .collect()
}

fn infer_set(items: &[Value]) -> AttributeValue {
    let texts = items.iter().map(coerce_text).collect();

    if !items.is_empty() && items.iter().all(Value::is_number) {
        AttributeValue::Ns(texts)
    } else {
        AttributeValue::Ss(texts)
    }
}

/// Best-effort string form of a JSON value, used for set elements.
///
/// Scalars render as their bare text (no quotes); composites render as
/// compact JSON.
fn coerce_text(value: &Value) -> String {
    match value {
        // `Value::to_string` would re-quote the string.
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
