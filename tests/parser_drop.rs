use minirel::parser::parse_command;
use minirel::types::parser_types::Statement;

#[test]
fn test_drop_table() {
    let statement = parse_command("DROP TABLE users").unwrap();
    assert_eq!(statement, Statement::DropTable("users".to_string()));
}

#[test]
fn test_missing_table_keyword_rejected() {
    assert!(parse_command("DROP users").is_err());
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(parse_command("DROP TABLE users extra").is_err());
}
