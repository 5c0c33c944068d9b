use crate::errors::record_error::RecordError;
use crate::types::schema_types::{AttributeSchema, TableSchema, TypeKind};
use crate::types::storage_types::{Record, Value};

fn bitmap_len(num_attributes: usize) -> usize {
    (num_attributes + 7) / 8
}

impl Record {
    /// Serializes the record for storage: a null bitmap (bit `i % 8` of
    /// byte `i / 8` set iff attribute `i` is null) followed by the non-null
    /// values encoded in attribute order.
    pub fn encode(&self, schema: &TableSchema) -> Result<Vec<u8>, RecordError> {
        let attributes = schema.attributes();
        if self.values.len() != attributes.len() {
            return Err(RecordError::ArityMismatch {
                expected: attributes.len(),
                got: self.values.len(),
            });
        }

        let mut out = vec![0u8; bitmap_len(attributes.len())];
        for (i, value) in self.values.iter().enumerate() {
            if value.is_null() {
                out[i / 8] |= 1 << (i % 8);
            }
        }

        for (value, attribute) in self.values.iter().zip(attributes) {
            if value.is_null() {
                if attribute.is_not_null() {
                    return Err(RecordError::NullNotAllowed(attribute.name().to_string()));
                }
                continue; // null values contribute no payload bytes
            }
            encode_value(&mut out, value, attribute)?;
        }

        Ok(out)
    }

    /// Inverse of [`Record::encode`], driven by the same schema.
    pub fn decode(data: &[u8], schema: &TableSchema) -> Result<Record, RecordError> {
        let attributes = schema.attributes();
        let bitmap = data
            .get(..bitmap_len(attributes.len()))
            .ok_or(RecordError::Truncated)?;

        let mut cursor = bitmap.len();
        let mut values = Vec::with_capacity(attributes.len());
        for (i, attribute) in attributes.iter().enumerate() {
            if (bitmap[i / 8] >> (i % 8)) & 1 == 1 {
                values.push(Value::Null);
                continue;
            }
            values.push(decode_value(data, &mut cursor, attribute)?);
        }

        Ok(Record::new(values))
    }
}

fn encode_value(
    out: &mut Vec<u8>,
    value: &Value,
    attribute: &AttributeSchema,
) -> Result<(), RecordError> {
    let data_type = attribute.data_type();
    match (data_type.kind(), value) {
        (TypeKind::Integer, Value::Int(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (TypeKind::Double, Value::Double(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (TypeKind::Boolean, Value::Bool(v)) => out.push(*v as u8),
        (TypeKind::Char, Value::Text(s)) => {
            let max = data_type.max_length() as usize;
            if s.len() > max {
                return Err(RecordError::LengthExceeded {
                    attribute: attribute.name().to_string(),
                    max: data_type.max_length(),
                });
            }
            // exactly max bytes, zero padded
            out.extend_from_slice(s.as_bytes());
            out.extend(std::iter::repeat(0u8).take(max - s.len()));
        }
        (TypeKind::Varchar, Value::Text(s)) => {
            if s.len() > data_type.max_length() as usize {
                return Err(RecordError::LengthExceeded {
                    attribute: attribute.name().to_string(),
                    max: data_type.max_length(),
                });
            }
            out.extend_from_slice(&(s.len() as u16).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        _ => {
            return Err(RecordError::TypeMismatch {
                attribute: attribute.name().to_string(),
                expected: data_type.to_string(),
            })
        }
    }
    Ok(())
}

fn decode_value(
    data: &[u8],
    cursor: &mut usize,
    attribute: &AttributeSchema,
) -> Result<Value, RecordError> {
    let data_type = attribute.data_type();
    match data_type.kind() {
        TypeKind::Integer => {
            let raw: [u8; 4] = take(data, cursor, 4)?
                .try_into()
                .map_err(|_| RecordError::Truncated)?;
            Ok(Value::Int(i32::from_le_bytes(raw)))
        }
        TypeKind::Double => {
            let raw: [u8; 8] = take(data, cursor, 8)?
                .try_into()
                .map_err(|_| RecordError::Truncated)?;
            Ok(Value::Double(f64::from_le_bytes(raw)))
        }
        TypeKind::Boolean => {
            let raw = take(data, cursor, 1)?;
            Ok(Value::Bool(raw[0] == 1))
        }
        TypeKind::Char => {
            let raw = take(data, cursor, data_type.max_length() as usize)?;
            let s = std::str::from_utf8(raw).map_err(|_| RecordError::InvalidUtf8)?;
            // strip the zero padding, then any trailing whitespace
            let s = s
                .trim_end_matches('\0')
                .trim_end_matches(|c: char| c.is_ascii_whitespace());
            Ok(Value::Text(s.to_string()))
        }
        TypeKind::Varchar => {
            let raw: [u8; 2] = take(data, cursor, 2)?
                .try_into()
                .map_err(|_| RecordError::Truncated)?;
            let len = u16::from_le_bytes(raw) as usize;
            let raw = take(data, cursor, len)?;
            let s = std::str::from_utf8(raw).map_err(|_| RecordError::InvalidUtf8)?;
            Ok(Value::Text(s.to_string()))
        }
    }
}

fn take<'a>(data: &'a [u8], cursor: &mut usize, len: usize) -> Result<&'a [u8], RecordError> {
    let raw = data
        .get(*cursor..*cursor + len)
        .ok_or(RecordError::Truncated)?;
    *cursor += len;
    Ok(raw)
}
