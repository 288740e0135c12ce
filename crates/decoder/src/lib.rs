// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoder for AgentWave simulation-call responses.
//!
//! Raw BCS return values from `devInspectTransactionBlock` go in; agent
//! profiles and escrow records come out. See [`query`] for the entry points.

pub mod bcs;
pub mod error;
pub mod logging;
pub mod query;
pub mod response;
pub mod schema;
pub mod shape;
pub mod source;
pub mod types;
pub mod utils;

pub use error::DecodeError;

#[cfg(test)]
pub mod test_fixtures;
