use minirel::parser::parse_command;
use minirel::types::parser_types::Statement;

#[test]
fn test_select_all() {
    let statement = parse_command("SELECT * FROM users").unwrap();
    assert_eq!(statement, Statement::SelectAll("users".to_string()));
}

#[test]
fn test_keywords_are_case_insensitive() {
    let statement = parse_command("select * from users").unwrap();
    assert_eq!(statement, Statement::SelectAll("users".to_string()));
}

#[test]
fn test_column_list_rejected() {
    // only full scans exist
    assert!(parse_command("SELECT id FROM users").is_err());
}

#[test]
fn test_missing_from_rejected() {
    assert!(parse_command("SELECT * users").is_err());
}

#[test]
fn test_unknown_command_rejected() {
    assert!(parse_command("UPDATE users").is_err());
}

#[test]
fn test_unexpected_character_rejected() {
    assert!(parse_command("SELECT * FROM users;!").is_err());
}
