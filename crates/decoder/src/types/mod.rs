// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Records produced by the decoder.
//!
//! Records are plain values: built once from a fully decoded payload and
//! never mutated afterwards.

pub mod address;
pub mod escrow;
pub mod profile;

pub use address::{ADDRESS_LENGTH, Address};
pub use escrow::{ESCROW_INFO, EscrowInfo, EscrowStatus, EscrowSummary};
pub use profile::{AgentProfile, PROFILE_LISTING, PROFILE_LOOKUP};
