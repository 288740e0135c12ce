// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{FieldType, Fields, Schema, Value};
use crate::bcs::BcsReader;
use crate::error::DecodeError;

/// Decode one value of type `ty` at the reader's cursor.
pub fn decode_value(ty: &FieldType, reader: &mut BcsReader<'_>) -> Result<Value, DecodeError> {
    Ok(match ty {
        FieldType::Address => Value::Address(reader.read_address()?),
        FieldType::String => Value::String(reader.read_string()?),
        FieldType::U8 => Value::U8(reader.read_u8()?),
        FieldType::U64 => Value::U64(reader.read_u64()?),
        FieldType::Bool => Value::Bool(reader.read_bool()?),
        FieldType::Vector(inner) => Value::Vector(reader.read_vec(|r| decode_value(inner, r))?),
        FieldType::Option(inner) => {
            Value::Option(reader.read_option(|r| decode_value(inner, r).map(Box::new))?)
        }
    })
}

/// Decode every field of `schema` in order over one shared cursor.
pub fn decode_struct(
    schema: &'static Schema,
    reader: &mut BcsReader<'_>,
) -> Result<Fields, DecodeError> {
    let values = schema
        .fields
        .iter()
        .map(|field| decode_value(&field.ty, reader))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Fields::new(schema, values))
}

/// Decode a single blob holding the whole struct back to back.
///
/// Trailing bytes after the last field are tolerated and logged.
pub fn decode_packed(schema: &'static Schema, bytes: &[u8]) -> Result<Fields, DecodeError> {
    let mut reader = BcsReader::new(bytes);
    let fields = decode_struct(schema, &mut reader)?;

    if reader.remaining() > 0 {
        tracing::debug!(
            schema = schema.name,
            trailing = reader.remaining(),
            "Ignoring trailing bytes after packed struct"
        );
    }

    Ok(fields)
}

/// Decode one independently encoded blob per field.
///
/// Each blob starts at offset 0 and is read with the decoder of the field
/// at the same position.
pub fn decode_separated<B: AsRef<[u8]>>(
    schema: &'static Schema,
    blobs: &[B],
) -> Result<Fields, DecodeError> {
    if blobs.len() != schema.field_count() {
        return Err(DecodeError::UnexpectedShape {
            schema: schema.name,
            expected: schema.field_count(),
            got: blobs.len(),
        });
    }

    let values = schema
        .fields
        .iter()
        .zip(blobs)
        .map(|(field, blob)| {
            let mut reader = BcsReader::new(blob.as_ref());
            decode_value(&field.ty, &mut reader)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Fields::new(schema, values))
}

/// Decode a count-prefixed sequence of `schema` structs.
///
/// The first failing element aborts the whole list.
pub fn decode_list(schema: &'static Schema, bytes: &[u8]) -> Result<Vec<Fields>, DecodeError> {
    let mut reader = BcsReader::new(bytes);
    reader.read_vec(|r| decode_struct(schema, r))
}
