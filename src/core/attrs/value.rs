// src/core/attrs/value.rs

//! Defines the attribute-value model native to key/attribute-oriented stores,
//! such as `AttributeValue` and the `AttributeValueUpdate` pair.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A map of attribute name to typed attribute value, insertion-ordered.
pub type AttributeMap = IndexMap<String, AttributeValue>;

/// A map of attribute name to update instruction, insertion-ordered.
pub type UpdateMap = IndexMap<String, AttributeValueUpdate>;

/// The tagged-union representation of a store-native value.
///
/// Numbers are carried in decimal-canonical textual form, never as binary
/// floats, so the store decides precision. Sets are ordered sequences and may
/// be empty. The serde tags follow the store's conventional short names, so a
/// serialized map matches the wire shape callers hand to the store client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// A string value.
    #[serde(rename = "S")]
    S(String),
    /// A number in decimal text form.
    #[serde(rename = "N")]
    N(String),
    /// A boolean value.
    #[serde(rename = "BOOL")]
    Bool(bool),
    /// An explicit null.
    #[serde(rename = "NULL")]
    Null,
    /// A set of strings.
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    /// A set of numbers in decimal text form.
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    /// A nested map of attribute values, insertion-ordered.
    #[serde(rename = "M")]
    M(AttributeMap),
}

impl AttributeValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_m(&self) -> Option<&AttributeMap> {
        match self {
            AttributeValue::M(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }
}

/// The mutation action attached to an attribute in an update map.
///
/// Only `Replace` ("set this attribute to this value") is produced here;
/// append/remove variants belong to richer update expressions outside this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeAction {
    #[serde(rename = "REPLACE")]
    Replace,
}

/// An update instruction: an action paired with the value it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueUpdate {
    pub action: AttributeAction,
    pub value: AttributeValue,
}

impl AttributeValueUpdate {
    /// Creates a replace-action update for `value`.
    pub fn replace(value: AttributeValue) -> Self {
        Self {
            action: AttributeAction::Replace,
            value,
        }
    }
}
