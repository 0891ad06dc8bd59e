// src/core/convert/router.rs

//! Resolves the effective store operation from its three signal sources and
//! shapes the typed output for the resolved operation.

use crate::core::attrs::infer::{infer_map, infer_update_map};
use crate::core::attrs::value::{AttributeMap, UpdateMap};
use crate::core::convert::resolver::Document;
use crate::core::errors::AttrMapError;
use crate::core::headers;
use crate::core::message::{HeaderValue, Message};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The store operations this conversion can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Insert-or-replace a whole item.
    #[default]
    Insert,
    /// Replace individual attributes of an existing item.
    Update,
    /// Remove an item by key.
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insert => "Insert",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AttrMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Insert" => Ok(Operation::Insert),
            "Update" => Ok(Operation::Update),
            "Delete" => Ok(Operation::Delete),
            other => Err(AttrMapError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// The return-values policy defaulted per operation, written only when the
/// caller has not set one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnValues {
    /// Return the attribute values as they were before the operation.
    AllOld,
    /// Return the attribute values as they are after the operation.
    AllNew,
}

impl ReturnValues {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnValues::AllOld => "ALL_OLD",
            ReturnValues::AllNew => "ALL_NEW",
        }
    }
}

impl fmt::Display for ReturnValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the effective operation from the message and body.
///
/// The signals are searched in precedence order, first present wins: the
/// operation header, then the `operation` property (ignored when empty),
/// then the body's `"operation"` field. With no signal present the
/// operation defaults to `Insert`. The winning name is parsed exactly once,
/// so an unknown name fails before any header is written.
pub fn resolve_operation(msg: &Message, root: &Document) -> Result<Operation, AttrMapError> {
    let from_header = msg
        .header(headers::OPERATION)
        .and_then(HeaderValue::operation_name);

    let from_property = msg
        .property(headers::OPERATION_PROPERTY)
        .filter(|name| !name.is_empty());

    let from_body = root.get(headers::OPERATION_FIELD).and_then(Value::as_str);

    match from_header.or(from_property).or(from_body) {
        Some(name) => name.parse(),
        None => Ok(Operation::default()),
    }
}

/// The typed output record of a conversion: the operation tag plus the
/// header payloads its contract requires.
///
/// Returning a record and merging it afterwards keeps the pipeline free of
/// partial writes: either `apply_to` runs with the full set, or nothing is
/// written.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub operation: Operation,
    pub key: Option<AttributeMap>,
    pub item: Option<AttributeMap>,
    pub update: Option<UpdateMap>,
    pub return_values: Option<ReturnValues>,
}

/// Shapes the output for the resolved operation.
///
/// | Operation | Emits |
/// |---|---|
/// | Insert | item map, `ALL_OLD` default |
/// | Update | key map, update map (replace-wrapped), `ALL_NEW` default |
/// | Delete | key map, `ALL_OLD` default |
pub fn route(operation: Operation, key_doc: &Document, item_doc: &Document) -> ConversionOutput {
    match operation {
        Operation::Insert => ConversionOutput {
            operation,
            key: None,
            item: Some(infer_map(item_doc)),
            update: None,
            return_values: Some(ReturnValues::AllOld),
        },
        Operation::Update => ConversionOutput {
            operation,
            key: Some(infer_map(key_doc)),
            item: None,
            update: Some(infer_update_map(item_doc)),
            return_values: Some(ReturnValues::AllNew),
        },
        Operation::Delete => ConversionOutput {
            operation,
            key: Some(infer_map(key_doc)),
            item: None,
            update: None,
            return_values: Some(ReturnValues::AllOld),
        },
    }
}

impl ConversionOutput {
    /// Merges this output into the message's header bag.
    ///
    /// The return-values default never overwrites a policy a prior step has
    /// already chosen.
    pub fn apply_to(self, msg: &mut Message) {
        msg.set_header(headers::OPERATION, HeaderValue::Operation(self.operation));

        if let Some(key) = self.key {
            msg.set_header(headers::KEY, HeaderValue::AttributeMap(key));
        }
        if let Some(item) = self.item {
            msg.set_header(headers::ITEM, HeaderValue::AttributeMap(item));
        }
        if let Some(update) = self.update {
            msg.set_header(headers::UPDATE_VALUES, HeaderValue::UpdateMap(update));
        }
        if let Some(return_values) = self.return_values
            && !msg.headers.contains_key(headers::RETURN_VALUES)
        {
            msg.set_header(headers::RETURN_VALUES, HeaderValue::ReturnValues(return_values));
        }
    }
}
