// src/core/message.rs

//! A minimal message envelope: a property bag, a header bag, and a body.
//!
//! The conversion reads contextual hints from the properties and headers and
//! writes its typed output back into the header bag. Transport concerns
//! (routing, retries, serialization of headers onto the wire) stay with the
//! caller.

use crate::core::attrs::value::{AttributeMap, UpdateMap};
use crate::core::convert::router::{Operation, ReturnValues};
use bytes::Bytes;
use indexmap::IndexMap;
use serde_json;

/// The message body: either an already-decoded JSON tree or raw bytes that
/// are expected to decode as JSON.
#[derive(Debug, Clone)]
pub enum Body {
    Decoded(serde_json::Value),
    Raw(Bytes),
}

impl Default for Body {
    fn default() -> Self {
        Body::Decoded(serde_json::Value::Null)
    }
}

/// `HeaderValue` is a closed set of the value shapes the conversion reads
/// from or writes to the header bag.
///
/// Modeling the header bag with a closed enum (instead of a dynamically-typed
/// map) keeps the operation lookup and the output merge exhaustively
/// pattern-matched.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Text(String),
    Operation(Operation),
    ReturnValues(ReturnValues),
    AttributeMap(AttributeMap),
    UpdateMap(UpdateMap),
}

impl HeaderValue {
    /// Returns the operation name carried by this header, if it holds one.
    ///
    /// Accepts both the enumerated form and its textual form, so upstream
    /// steps can set either.
    pub fn operation_name(&self) -> Option<&str> {
        match self {
            HeaderValue::Operation(op) => Some(op.as_str()),
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_attribute_map(&self) -> Option<&AttributeMap> {
        match self {
            HeaderValue::AttributeMap(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_update_map(&self) -> Option<&UpdateMap> {
        match self {
            HeaderValue::UpdateMap(map) => Some(map),
            _ => None,
        }
    }
}

/// A single in-flight message. Each conversion call processes exactly one
/// `Message` and mutates only its own header bag.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub properties: IndexMap<String, String>,
    pub headers: IndexMap<String, HeaderValue>,
    pub body: Body,
}

impl Message {
    /// Creates a message around an already-decoded JSON body.
    pub fn from_json(body: serde_json::Value) -> Self {
        Self {
            body: Body::Decoded(body),
            ..Default::default()
        }
    }

    /// Creates a message around a raw byte body that will be decoded lazily
    /// by the conversion.
    pub fn from_bytes(body: impl Into<Bytes>) -> Self {
        Self {
            body: Body::Raw(body.into()),
            ..Default::default()
        }
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: HeaderValue) {
        self.headers.insert(name.into(), value);
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }
}
