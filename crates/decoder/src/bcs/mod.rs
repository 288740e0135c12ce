// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary Canonical Serialization primitives.
//!
//! BCS carries no field names or type tags: lengths and counts are ULEB128
//! varints, integers are fixed-width little-endian, addresses are 32 raw
//! bytes and options use a single presence byte.

pub mod reader;

pub use reader::BcsReader;
