use minirel::parser::parse_command;
use minirel::types::parser_types::Statement;
use minirel::types::schema_types::TypeKind;
use minirel::types::storage_types::Value;

#[test]
fn test_alter_add_with_default() {
    let statement = parse_command("ALTER TABLE t ADD age INTEGER NOTNULL DEFAULT 0").unwrap();
    let Statement::AlterAdd { table, attribute } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(table, "t");
    assert_eq!(attribute.name(), "age");
    assert_eq!(attribute.data_type().kind(), TypeKind::Integer);
    assert!(attribute.is_not_null());
    assert!(!attribute.is_primary_key());
    assert_eq!(attribute.default(), Some(&Value::Int(0)));
}

#[test]
fn test_alter_add_nullable_without_default() {
    let statement = parse_command("ALTER TABLE t ADD note VARCHAR(40)").unwrap();
    let Statement::AlterAdd { attribute, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert!(!attribute.is_not_null());
    assert!(attribute.default().is_none());
}

#[test]
fn test_notnull_requires_default() {
    assert!(parse_command("ALTER TABLE t ADD age INTEGER NOTNULL").is_err());
}

#[test]
fn test_default_null_means_no_default() {
    let statement = parse_command("ALTER TABLE t ADD note VARCHAR(40) DEFAULT null").unwrap();
    let Statement::AlterAdd { attribute, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert!(attribute.default().is_none());
}

#[test]
fn test_integer_default_promoted_for_double() {
    let statement = parse_command("ALTER TABLE t ADD score DOUBLE DEFAULT 3").unwrap();
    let Statement::AlterAdd { attribute, .. } = statement else {
        panic!("Unexpected statement variant");
    };
    assert_eq!(attribute.default(), Some(&Value::Double(3.0)));
}

#[test]
fn test_default_type_mismatch_rejected() {
    assert!(parse_command("ALTER TABLE t ADD age INTEGER DEFAULT \"x\"").is_err());
    assert!(parse_command("ALTER TABLE t ADD flag BOOLEAN DEFAULT 1").is_err());
}

#[test]
fn test_default_string_too_long_rejected() {
    assert!(parse_command("ALTER TABLE t ADD tag CHAR(2) DEFAULT \"abc\"").is_err());
}

#[test]
fn test_alter_drop() {
    let statement = parse_command("ALTER TABLE t DROP name").unwrap();
    assert_eq!(
        statement,
        Statement::AlterDrop {
            table: "t".to_string(),
            attribute: "name".to_string(),
        }
    );
}

#[test]
fn test_bad_action_rejected() {
    assert!(parse_command("ALTER TABLE t RENAME name").is_err());
}
