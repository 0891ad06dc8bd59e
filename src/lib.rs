// src/lib.rs

pub mod core;

// Re-export
pub use crate::core::AttrMapError;
pub use crate::core::convert::{ConvertOutcome, convert};
