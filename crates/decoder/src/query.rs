// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decode boundary between raw simulation responses and the presentation
//! layer.
//!
//! The `decode_*` functions are strict and return every failure. The
//! `*_or_*` functions wrap them for callers that must never fail: the error
//! is logged and replaced with a placeholder or an empty list.

use crate::error::DecodeError;
use crate::response::DevInspectResults;
use crate::schema::{Record, decode_list};
use crate::shape::decode_with_shape;
use crate::types::{Address, AgentProfile, EscrowInfo, PROFILE_LOOKUP};

/// Decode the return of `get_agent_profile` for a known `owner`.
///
/// Accepts both the packed and the per-field response shape.
pub fn decode_profile<B: AsRef<[u8]>>(
    owner: Address,
    blobs: &[B],
) -> Result<AgentProfile, DecodeError> {
    let fields = decode_with_shape(&PROFILE_LOOKUP, blobs)?;
    AgentProfile::from_lookup_fields(owner, fields)
}

/// Decode a count-prefixed list of `R` from the first return value.
pub fn decode_records<R: Record, B: AsRef<[u8]>>(blobs: &[B]) -> Result<Vec<R>, DecodeError> {
    let Some(first) = blobs.first() else {
        return Err(DecodeError::UnexpectedShape {
            schema: R::SCHEMA.name,
            expected: 1,
            got: 0,
        });
    };

    if blobs.len() > 1 {
        tracing::debug!(
            schema = R::SCHEMA.name,
            blobs = blobs.len(),
            "List query returned extra values, decoding the first"
        );
    }

    decode_list(R::SCHEMA, first.as_ref())?
        .into_iter()
        .map(R::from_fields)
        .collect()
}

/// Decode the "list all profiles" return.
pub fn decode_profile_list<B: AsRef<[u8]>>(blobs: &[B]) -> Result<Vec<AgentProfile>, DecodeError> {
    decode_records(blobs)
}

/// Decode the return of `get_escrows_as_client`.
pub fn decode_escrow_list<B: AsRef<[u8]>>(blobs: &[B]) -> Result<Vec<EscrowInfo>, DecodeError> {
    decode_records(blobs)
}

/// Profile for `owner`, or [`AgentProfile::placeholder`] if the response
/// cannot be decoded.
pub fn profile_or_placeholder(owner: Address, response: &DevInspectResults) -> AgentProfile {
    match decode_profile(owner, &response.blobs()) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(
                owner = %owner,
                schema = PROFILE_LOOKUP.name,
                kind = e.kind(),
                error = %e,
                "Failed to decode agent profile, using placeholder"
            );
            AgentProfile::placeholder(owner)
        }
    }
}

/// Every decoded profile, or an empty list on failure.
pub fn profiles_or_empty(response: &DevInspectResults) -> Vec<AgentProfile> {
    records_or_empty(response)
}

/// Every decoded escrow, or an empty list on failure.
pub fn escrows_or_empty(response: &DevInspectResults) -> Vec<EscrowInfo> {
    records_or_empty(response)
}

fn records_or_empty<R: Record>(response: &DevInspectResults) -> Vec<R> {
    match decode_records::<R, _>(&response.blobs()) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                schema = R::SCHEMA.name,
                kind = e.kind(),
                error = %e,
                "Failed to decode record list, returning empty"
            );
            Vec::new()
        }
    }
}
