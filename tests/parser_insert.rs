use minirel::parser::parse_command;
use minirel::types::parser_types::Statement;
use minirel::types::storage_types::Value;

#[test]
fn test_single_row() {
    let statement = parse_command("INSERT t VALUES (1, \"a\")").unwrap();
    let Statement::Insert { table, rows } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(table, "t");
    assert_eq!(
        rows,
        vec![vec![Value::Int(1), Value::Text("a".to_string())]]
    );
}

#[test]
fn test_multiple_rows() {
    let statement = parse_command("INSERT t VALUES (1, \"a\"), (2, \"b\"), (3, \"c\")").unwrap();
    let Statement::Insert { rows, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], vec![Value::Int(3), Value::Text("c".to_string())]);
}

#[test]
fn test_literal_types() {
    let statement =
        parse_command("INSERT t VALUES (-5, 2.5, true, False, null, \"hello world\")").unwrap();
    let Statement::Insert { rows, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(
        rows[0],
        vec![
            Value::Int(-5),
            Value::Double(2.5),
            Value::Bool(true),
            Value::Bool(false),
            Value::Null,
            Value::Text("hello world".to_string()),
        ]
    );
}

#[test]
fn test_string_keeps_spaces_and_case() {
    let statement = parse_command("INSERT t VALUES (\"Hello, World\")").unwrap();
    let Statement::Insert { rows, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(rows[0], vec![Value::Text("Hello, World".to_string())]);
}

#[test]
fn test_unterminated_string_rejected() {
    assert!(parse_command("INSERT t VALUES (\"abc)").is_err());
}

#[test]
fn test_missing_values_keyword_rejected() {
    assert!(parse_command("INSERT t (1, 2)").is_err());
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(parse_command("INSERT t VALUES (1) garbage").is_err());
}
