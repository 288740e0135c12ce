// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Schema;
use crate::error::DecodeError;
use crate::types::Address;

/// A decoded field value, shaped by its [`super::FieldType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Address(Address),
    String(String),
    U8(u8),
    U64(u64),
    Bool(bool),
    Vector(Vec<Value>),
    Option(Option<Box<Value>>),
}

/// The decoded values of one schema instance, consumed in declaration order.
///
/// Record builders call the typed `next_*` accessors in the same order as
/// the schema table; a type disagreement surfaces as
/// [`DecodeError::FieldMismatch`] rather than a silently wrong record.
#[derive(Debug)]
pub struct Fields {
    schema: &'static Schema,
    values: std::vec::IntoIter<Value>,
    index: usize,
}

impl Fields {
    pub(crate) fn new(schema: &'static Schema, values: Vec<Value>) -> Self {
        Self {
            schema,
            values: values.into_iter(),
            index: 0,
        }
    }

    /// Values not yet consumed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    fn mismatch(&self, index: usize) -> DecodeError {
        DecodeError::FieldMismatch {
            schema: self.schema.name,
            field: self
                .schema
                .fields
                .get(index)
                .map(|f| f.name)
                .unwrap_or("<missing>"),
        }
    }

    fn next_value(&mut self) -> Result<(usize, Value), DecodeError> {
        let index = self.index;
        self.index += 1;
        match self.values.next() {
            Some(value) => Ok((index, value)),
            None => Err(self.mismatch(index)),
        }
    }

    pub fn next_address(&mut self) -> Result<Address, DecodeError> {
        match self.next_value()? {
            (_, Value::Address(a)) => Ok(a),
            (index, _) => Err(self.mismatch(index)),
        }
    }

    pub fn next_string(&mut self) -> Result<String, DecodeError> {
        match self.next_value()? {
            (_, Value::String(s)) => Ok(s),
            (index, _) => Err(self.mismatch(index)),
        }
    }

    pub fn next_u8(&mut self) -> Result<u8, DecodeError> {
        match self.next_value()? {
            (_, Value::U8(v)) => Ok(v),
            (index, _) => Err(self.mismatch(index)),
        }
    }

    pub fn next_u64(&mut self) -> Result<u64, DecodeError> {
        match self.next_value()? {
            (_, Value::U64(v)) => Ok(v),
            (index, _) => Err(self.mismatch(index)),
        }
    }

    pub fn next_bool(&mut self) -> Result<bool, DecodeError> {
        match self.next_value()? {
            (_, Value::Bool(v)) => Ok(v),
            (index, _) => Err(self.mismatch(index)),
        }
    }

    pub fn next_string_vec(&mut self) -> Result<Vec<String>, DecodeError> {
        let (index, value) = self.next_value()?;
        let Value::Vector(items) = value else {
            return Err(self.mismatch(index));
        };
        items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(self.mismatch(index)),
            })
            .collect()
    }

    pub fn next_optional_string(&mut self) -> Result<Option<String>, DecodeError> {
        match self.next_value()? {
            (_, Value::Option(None)) => Ok(None),
            (index, Value::Option(Some(inner))) => match *inner {
                Value::String(s) => Ok(Some(s)),
                _ => Err(self.mismatch(index)),
            },
            (index, _) => Err(self.mismatch(index)),
        }
    }
}
