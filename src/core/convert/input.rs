// src/core/convert/input.rs

//! The conversion entry point: idempotency guard, body decode, and header
//! merge.

use crate::core::convert::{resolver, router};
use crate::core::errors::AttrMapError;
use crate::core::headers;
use crate::core::message::{Body, Message};
use serde_json::Value;
use tracing::debug;

/// What a conversion call did to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The key or item output header was already populated upstream; the
    /// message was left untouched.
    Skipped,
    /// The full header set for the resolved operation was written.
    Applied(router::Operation),
}

/// Converts the message body into attribute-value headers for the resolved
/// store operation.
///
/// The call is fail-fast and all-or-nothing: body decoding, document
/// resolution, and operation resolution all complete before the first header
/// is written, so an error leaves the header bag untouched.
pub fn convert(msg: &mut Message) -> Result<ConvertOutcome, AttrMapError> {
    // Upstream steps may pre-supply the attribute maps; never redo or
    // overwrite their work.
    if msg.headers.contains_key(headers::KEY) || msg.headers.contains_key(headers::ITEM) {
        debug!("key or item header already populated, skipping conversion");
        return Ok(ConvertOutcome::Skipped);
    }

    let decoded;
    let body = match &msg.body {
        Body::Decoded(value) => value,
        Body::Raw(bytes) => {
            decoded = serde_json::from_slice::<Value>(bytes)?;
            &decoded
        }
    };

    let root = body.as_object().ok_or_else(|| {
        AttrMapError::BodyDecode("message body must decode to a JSON object".to_string())
    })?;

    let operation = router::resolve_operation(msg, root)?;
    let docs = resolver::resolve(root)?;
    let output = router::route(operation, &docs.key_doc, &docs.item_doc);

    debug!(%operation, "resolved store operation, emitting attribute headers");
    output.apply_to(msg);

    Ok(ConvertOutcome::Applied(operation))
}
