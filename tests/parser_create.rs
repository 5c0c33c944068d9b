use minirel::parser::parse_command;
use minirel::types::parser_types::Statement;
use minirel::types::schema_types::TypeKind;

#[test]
fn test_basic_create() {
    let statement =
        parse_command("CREATE TABLE users (id INTEGER PRIMARYKEY, name VARCHAR(32))").unwrap();
    let Statement::CreateTable(table) = statement else {
        panic!("Unexpected statement variant");
    };

    assert_eq!(table.name(), "users");
    assert_eq!(table.attribute_count(), 2);
    assert_eq!(table.attributes()[0].name(), "id");
    assert_eq!(table.attributes()[0].data_type().kind(), TypeKind::Integer);
    assert!(table.attributes()[0].is_primary_key());
    assert!(table.attributes()[0].is_not_null()); // implied by the primary key
    assert_eq!(table.attributes()[1].name(), "name");
    assert_eq!(table.attributes()[1].data_type().kind(), TypeKind::Varchar);
    assert_eq!(table.attributes()[1].data_type().max_length(), 32);
    assert_eq!(table.head_page_id(), -1);
}

#[test]
fn test_names_are_lowercased() {
    let statement = parse_command("CREATE TABLE Users (ID INTEGER PRIMARYKEY)").unwrap();
    let Statement::CreateTable(table) = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(table.name(), "users");
    assert_eq!(table.attributes()[0].name(), "id");
}

#[test]
fn test_notnull_and_char() {
    let statement =
        parse_command("CREATE TABLE t (id INTEGER PRIMARYKEY, tag CHAR(8) NOTNULL)").unwrap();
    let Statement::CreateTable(table) = statement else {
        panic!("Unexpected statement variant");
    };
    let tag = &table.attributes()[1];
    assert_eq!(tag.data_type().kind(), TypeKind::Char);
    assert_eq!(tag.data_type().max_length(), 8);
    assert!(tag.is_not_null());
    assert!(!tag.is_primary_key());
    assert!(tag.default().is_none());
}

#[test]
fn test_missing_primary_key_rejected() {
    let result = parse_command("CREATE TABLE t (a INTEGER, b BOOLEAN)");
    assert!(result.is_err());
}

#[test]
fn test_two_primary_keys_rejected() {
    let result = parse_command("CREATE TABLE t (a INTEGER PRIMARYKEY, b INTEGER PRIMARYKEY)");
    assert!(result.is_err());
}

#[test]
fn test_duplicate_attribute_rejected() {
    let result = parse_command("CREATE TABLE t (a INTEGER PRIMARYKEY, a BOOLEAN)");
    assert!(result.is_err());
}

#[test]
fn test_unknown_type_rejected() {
    let result = parse_command("CREATE TABLE t (a FLOAT PRIMARYKEY)");
    assert!(result.is_err());
}

#[test]
fn test_char_size_must_be_positive() {
    assert!(parse_command("CREATE TABLE t (a CHAR(0) PRIMARYKEY)").is_err());
    assert!(parse_command("CREATE TABLE t (a VARCHAR(1.5) PRIMARYKEY)").is_err());
}

#[test]
fn test_missing_paren_rejected() {
    let result = parse_command("CREATE TABLE t id INTEGER PRIMARYKEY)");
    assert!(result.is_err());
}
