use minirel::errors::record_error::RecordError;
use minirel::types::schema_types::{AttributeSchema, DataType, TableSchema, TypeKind};
use minirel::types::storage_types::{Record, Value};

fn attr(name: &str, data_type: DataType) -> AttributeSchema {
    AttributeSchema::new(name, data_type, false, false, None)
}

fn users_schema() -> TableSchema {
    let mut table = TableSchema::new("users");
    table.add_attribute(AttributeSchema::new(
        "id",
        DataType::new(TypeKind::Integer),
        true,
        true,
        None,
    ));
    table.add_attribute(attr("name", DataType::with_length(TypeKind::Varchar, 16)));
    table
}

fn wide_schema() -> TableSchema {
    let mut table = TableSchema::new("wide");
    table.add_attribute(AttributeSchema::new(
        "id",
        DataType::new(TypeKind::Integer),
        true,
        true,
        None,
    ));
    table.add_attribute(attr("score", DataType::new(TypeKind::Double)));
    table.add_attribute(attr("active", DataType::new(TypeKind::Boolean)));
    table.add_attribute(attr("tag", DataType::with_length(TypeKind::Char, 8)));
    table.add_attribute(attr("bio", DataType::with_length(TypeKind::Varchar, 64)));
    table
}

#[test]
fn test_encode_layout() {
    // null bitmap byte, then 4-byte integer, then length-prefixed varchar
    let record = Record::new(vec![Value::Int(1), Value::Text("a".to_string())]);
    let bytes = record.encode(&users_schema()).unwrap();
    assert_eq!(bytes, vec![0x00, 1, 0, 0, 0, 1, 0, b'a']);
}

#[test]
fn test_null_sets_bitmap_bit_and_skips_payload() {
    let record = Record::new(vec![Value::Int(1), Value::Null]);
    let bytes = record.encode(&users_schema()).unwrap();
    assert_eq!(bytes, vec![0x02, 1, 0, 0, 0]);

    let decoded = Record::decode(&bytes, &users_schema()).unwrap();
    assert_eq!(decoded.values(), &[Value::Int(1), Value::Null]);
}

#[test]
fn test_round_trip_all_types() {
    let schema = wide_schema();
    let record = Record::new(vec![
        Value::Int(-42),
        Value::Double(2.5),
        Value::Bool(true),
        Value::Text("hot".to_string()),
        Value::Text("hello world".to_string()),
    ]);
    let decoded = Record::decode(&record.encode(&schema).unwrap(), &schema).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_round_trip_with_nulls() {
    let schema = wide_schema();
    let record = Record::new(vec![
        Value::Int(7),
        Value::Null,
        Value::Null,
        Value::Text("x".to_string()),
        Value::Null,
    ]);
    let decoded = Record::decode(&record.encode(&schema).unwrap(), &schema).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_bitmap_spans_multiple_bytes() {
    let mut table = TableSchema::new("t");
    table.add_attribute(AttributeSchema::new(
        "a0",
        DataType::new(TypeKind::Integer),
        true,
        true,
        None,
    ));
    for i in 1..9 {
        table.add_attribute(attr(&format!("a{}", i), DataType::new(TypeKind::Integer)));
    }

    let mut values: Vec<Value> = (0..8).map(Value::Int).collect();
    values.push(Value::Null); // ninth attribute lands in the second bitmap byte

    let record = Record::new(values);
    let bytes = record.encode(&table).unwrap();
    assert_eq!(bytes[0], 0x00);
    assert_eq!(bytes[1], 0x01);
    assert_eq!(bytes.len(), 2 + 8 * 4);

    let decoded = Record::decode(&bytes, &table).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_char_is_padded_and_trimmed() {
    let schema = wide_schema();
    let record = Record::new(vec![
        Value::Int(1),
        Value::Null,
        Value::Null,
        Value::Text("ab".to_string()),
        Value::Null,
    ]);
    let bytes = record.encode(&schema).unwrap();
    // bitmap + id + exactly 8 bytes of char payload
    assert_eq!(bytes.len(), 1 + 4 + 8);
    assert_eq!(&bytes[5..], b"ab\0\0\0\0\0\0");

    let decoded = Record::decode(&bytes, &schema).unwrap();
    assert_eq!(decoded.value(3), Some(&Value::Text("ab".to_string())));
}

#[test]
fn test_char_trailing_whitespace_is_trimmed() {
    let schema = wide_schema();
    let record = Record::new(vec![
        Value::Int(1),
        Value::Null,
        Value::Null,
        Value::Text("ab  ".to_string()),
        Value::Null,
    ]);
    let decoded = Record::decode(&record.encode(&schema).unwrap(), &schema).unwrap();
    assert_eq!(decoded.value(3), Some(&Value::Text("ab".to_string())));
}

#[test]
fn test_char_too_long_rejected() {
    let schema = wide_schema();
    let record = Record::new(vec![
        Value::Int(1),
        Value::Null,
        Value::Null,
        Value::Text("way too long for 8".to_string()),
        Value::Null,
    ]);
    let err = record.encode(&schema).unwrap_err();
    assert!(matches!(err, RecordError::LengthExceeded { .. }));
}

#[test]
fn test_varchar_too_long_rejected() {
    let mut table = TableSchema::new("t");
    table.add_attribute(AttributeSchema::new(
        "id",
        DataType::new(TypeKind::Integer),
        true,
        true,
        None,
    ));
    table.add_attribute(attr("v", DataType::with_length(TypeKind::Varchar, 4)));

    let record = Record::new(vec![Value::Int(1), Value::Text("abcde".to_string())]);
    let err = record.encode(&table).unwrap_err();
    assert!(matches!(err, RecordError::LengthExceeded { .. }));
}

#[test]
fn test_type_mismatch_rejected() {
    let record = Record::new(vec![Value::Text("one".to_string()), Value::Null]);
    let err = record.encode(&users_schema()).unwrap_err();
    assert!(matches!(err, RecordError::TypeMismatch { .. }));
}

#[test]
fn test_null_in_not_null_rejected() {
    let record = Record::new(vec![Value::Null, Value::Text("a".to_string())]);
    let err = record.encode(&users_schema()).unwrap_err();
    assert!(matches!(err, RecordError::NullNotAllowed(_)));
}

#[test]
fn test_arity_mismatch_rejected() {
    let record = Record::new(vec![Value::Int(1)]);
    let err = record.encode(&users_schema()).unwrap_err();
    assert!(matches!(err, RecordError::ArityMismatch { .. }));
}

#[test]
fn test_truncated_decode_rejected() {
    let record = Record::new(vec![Value::Int(1), Value::Text("abc".to_string())]);
    let bytes = record.encode(&users_schema()).unwrap();
    let err = Record::decode(&bytes[..bytes.len() - 1], &users_schema()).unwrap_err();
    assert!(matches!(err, RecordError::Truncated));
}
