// src/core/headers.rs

//! Names of the headers, properties, and body fields consulted or written by
//! the conversion.

/// Header carrying the resolved store operation.
pub const OPERATION: &str = "attr.operation";

/// Header carrying the key attribute map (identifies a single record).
pub const KEY: &str = "attr.key";

/// Header carrying the item attribute map (full record content).
pub const ITEM: &str = "attr.item";

/// Header carrying the update map for partial-update operations.
pub const UPDATE_VALUES: &str = "attr.update-values";

/// Header carrying the return-values policy. Only written when absent.
pub const RETURN_VALUES: &str = "attr.return-values";

/// Message property consulted as an operation override.
pub const OPERATION_PROPERTY: &str = "operation";

// Reserved top-level body fields.
pub const OPERATION_FIELD: &str = "operation";
pub const KEY_FIELD: &str = "key";
pub const ITEM_FIELD: &str = "item";
