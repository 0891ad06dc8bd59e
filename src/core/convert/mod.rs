// src/core/convert/mod.rs

//! The conversion pipeline: document resolution, operation routing, and the
//! top-level entry point.

pub mod input;
pub mod resolver;
pub mod router;

pub use input::{ConvertOutcome, convert};
pub use router::{ConversionOutput, Operation, ReturnValues};
