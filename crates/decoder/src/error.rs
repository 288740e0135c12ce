// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failures raised while decoding a BCS payload.
///
/// Every variant is recoverable: the decode boundary in [`crate::query`]
/// converts them into empty or placeholder results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Buffer underrun at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Malformed ULEB128 varint starting at offset {offset}")]
    MalformedVarint { offset: usize },

    #[error(
        "Unexpected response shape for {schema}: expected {} return values, got {got}",
        accepted_counts(.expected)
    )]
    UnexpectedShape {
        schema: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid UTF-8 string at offset {offset}: {source}")]
    Utf8DecodeError {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Field '{field}' of {schema} does not match its declared type")]
    FieldMismatch {
        schema: &'static str,
        field: &'static str,
    },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// A single-value query accepts one blob; a multi-field one also accepts
/// one blob per field.
fn accepted_counts(expected: &usize) -> String {
    if *expected == 1 {
        "1".to_string()
    } else {
        format!("1 or {}", expected)
    }
}

impl DecodeError {
    /// Short machine-friendly name used in structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::BufferUnderrun { .. } => "buffer_underrun",
            DecodeError::MalformedVarint { .. } => "malformed_varint",
            DecodeError::UnexpectedShape { .. } => "unexpected_shape",
            DecodeError::Utf8DecodeError { .. } => "utf8_decode_error",
            DecodeError::FieldMismatch { .. } => "field_mismatch",
            DecodeError::InvalidAddress(_) => "invalid_address",
        }
    }
}
