// src/core/mod.rs

//! The central module containing the core logic and data structures of attrmap.

pub mod attrs;
pub mod convert;
pub mod errors;
pub mod headers;
pub mod message;

pub use attrs::value::{AttributeMap, AttributeValue, AttributeValueUpdate, UpdateMap};
pub use convert::router::{Operation, ReturnValues};
pub use errors::AttrMapError;
pub use message::{Body, HeaderValue, Message};
