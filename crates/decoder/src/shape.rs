// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Picks the decode strategy for a multi-field return from the number of
//! blobs in the response.
//!
//! The query engine returns a tuple either as one packed blob or as one
//! blob per field, and carries no tag telling the two apart. Dispatch is on
//! the blob count alone: exactly one blob is packed, exactly
//! `schema.field_count()` blobs are separated, anything else is rejected.

use crate::error::DecodeError;
use crate::schema::{Fields, Schema, decode_packed, decode_separated};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// One blob holding every field back to back.
    Packed,
    /// One self-contained blob per field, in schema order.
    Separated,
}

/// Classify a response of `blob_count` blobs for `schema`.
///
/// The packed check wins, so a one-field schema is always treated as packed.
pub fn resolve_shape(schema: &Schema, blob_count: usize) -> Result<WireShape, DecodeError> {
    if blob_count == 1 {
        Ok(WireShape::Packed)
    } else if blob_count == schema.field_count() {
        Ok(WireShape::Separated)
    } else {
        Err(DecodeError::UnexpectedShape {
            schema: schema.name,
            expected: schema.field_count(),
            got: blob_count,
        })
    }
}

/// Resolve the shape of `blobs` and decode them against `schema`.
pub fn decode_with_shape<B: AsRef<[u8]>>(
    schema: &'static Schema,
    blobs: &[B],
) -> Result<Fields, DecodeError> {
    let shape = resolve_shape(schema, blobs.len())?;
    tracing::debug!(
        schema = schema.name,
        blobs = blobs.len(),
        shape = ?shape,
        "Resolved response shape"
    );

    match shape {
        WireShape::Packed => decode_packed(schema, blobs[0].as_ref()),
        WireShape::Separated => decode_separated(schema, blobs),
    }
}
