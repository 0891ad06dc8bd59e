// src/core/attrs/mod.rs

//! The attribute-value model and the JSON type-inference engine.

pub mod infer;
pub mod value;

pub use infer::{infer, infer_map, infer_update_map};
pub use value::{AttributeAction, AttributeMap, AttributeValue, AttributeValueUpdate, UpdateMap};
