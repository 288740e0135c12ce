// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative field tables and the generic decoder driven by them.
//!
//! Each entity declares its wire layout once as a `const` [`Schema`]. The
//! same table drives packed decoding, per-field decoding of separated return
//! values and count-prefixed list decoding, so the three paths cannot drift
//! apart.

pub mod decode;
pub mod value;

pub use decode::{decode_list, decode_packed, decode_separated, decode_struct, decode_value};
pub use value::{Fields, Value};

use crate::error::DecodeError;

/// Wire type of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Address,
    String,
    U8,
    U64,
    Bool,
    Vector(&'static FieldType),
    Option(&'static FieldType),
}

impl FieldType {
    /// Move-style type name, used in logs and error messages.
    pub fn type_name(&self) -> String {
        match self {
            FieldType::Address => "address".to_string(),
            FieldType::String => "string".to_string(),
            FieldType::U8 => "u8".to_string(),
            FieldType::U64 => "u64".to_string(),
            FieldType::Bool => "bool".to_string(),
            FieldType::Vector(inner) => format!("vector<{}>", inner.type_name()),
            FieldType::Option(inner) => format!("option<{}>", inner.type_name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Ordered field list of one entity. Order is the only thing that gives a
/// BCS field its meaning.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A record that can be built from the decoded fields of its schema.
pub trait Record: Sized {
    const SCHEMA: &'static Schema;

    fn from_fields(fields: Fields) -> Result<Self, DecodeError>;
}
