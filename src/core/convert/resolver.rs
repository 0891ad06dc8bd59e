// src/core/convert/resolver.rs

//! Splits the top-level JSON body into the key-document and the
//! item-document.
//!
//! The body can name the two documents explicitly through the reserved
//! top-level fields `"key"` and `"item"`. When a field is absent the
//! document falls back to the body's own non-reserved entries, so a body
//! with no explicit split acts as a single flat attribute object shared by
//! both documents. Only one level of flattening happens here; nested values
//! stay JSON trees for the inference engine.

use crate::core::errors::AttrMapError;
use crate::core::headers;
use serde_json::Value;

/// A flat mapping of attribute name to raw JSON value.
pub type Document = serde_json::Map<String, Value>;

/// Top-level body fields with contextual meaning; never part of a fallback
/// document.
const RESERVED_FIELDS: [&str; 3] = [
    headers::OPERATION_FIELD,
    headers::KEY_FIELD,
    headers::ITEM_FIELD,
];

/// The two documents a conversion works on. In the fallback case they are
/// value-equal, not the same source node.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDocuments {
    pub key_doc: Document,
    pub item_doc: Document,
}

/// Resolves the key- and item-documents from the decoded body.
pub fn resolve(root: &Document) -> Result<ResolvedDocuments, AttrMapError> {
    let key_doc = match root.get(headers::KEY_FIELD) {
        Some(sub) => as_document(headers::KEY_FIELD, sub)?,
        None => non_reserved(root),
    };

    let item_doc = match root.get(headers::ITEM_FIELD) {
        Some(sub) => as_document(headers::ITEM_FIELD, sub)?,
        None => non_reserved(root),
    };

    Ok(ResolvedDocuments { key_doc, item_doc })
}

fn as_document(field: &str, value: &Value) -> Result<Document, AttrMapError> {
    value.as_object().cloned().ok_or_else(|| {
        AttrMapError::BodyDecode(format!("top-level \"{field}\" must be a JSON object"))
    })
}

fn non_reserved(root: &Document) -> Document {
    root.iter()
        .filter(|(name, _)| !RESERVED_FIELDS.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
