use super::Cursor;
use crate::types::parser_types::{Statement, Token, TokenKind};
use crate::types::schema_types::{AttributeSchema, DataType, TypeKind};
use crate::types::storage_types::Value;

/// Parses an ALTER TABLE statement:
///
/// ALTER TABLE <table> ADD <attr> <type> [NOTNULL] [DEFAULT <literal>]
/// ALTER TABLE <table> DROP <attr>
pub fn parse_alter_table(tokens: &mut Cursor) -> Result<Statement, String> {
    tokens.expect_keyword("ALTER")?;
    tokens.expect_keyword("TABLE")?;
    let table = tokens.consume_word()?;

    let action = tokens.consume_word()?;
    if action.eq_ignore_ascii_case("ADD") {
        parse_alter_add(tokens, table)
    } else if action.eq_ignore_ascii_case("DROP") {
        parse_alter_drop(tokens, table)
    } else {
        Err(format!("expected ADD or DROP but got '{}'", action))
    }
}

fn parse_alter_add(tokens: &mut Cursor, table: String) -> Result<Statement, String> {
    let name = tokens.consume_word()?;
    let data_type = super::parse_data_type(tokens)?;

    let mut is_not_null = false;
    let mut default: Option<Value> = None;

    while let Some(token) = tokens.peek() {
        if token.kind != TokenKind::Word {
            break;
        }
        if token.text.eq_ignore_ascii_case("NOTNULL") {
            tokens.consume()?;
            is_not_null = true;
        } else if token.text.eq_ignore_ascii_case("DEFAULT") {
            tokens.consume()?;
            let value_token = tokens.consume()?;
            let value = convert_default(&value_token, data_type)?;
            // DEFAULT null means no default at all
            default = if value.is_null() { None } else { Some(value) };
        } else {
            break;
        }
    }

    tokens.expect_end()?;

    // existing rows need something to hold in the new attribute
    if is_not_null && default.is_none() {
        return Err("NOTNULL requires a DEFAULT value when altering a table".into());
    }

    let attribute = AttributeSchema::new(&name, data_type, false, is_not_null, default);
    Ok(Statement::AlterAdd { table, attribute })
}

fn parse_alter_drop(tokens: &mut Cursor, table: String) -> Result<Statement, String> {
    let attribute = tokens.consume_word()?;
    tokens.expect_end()?;

    Ok(Statement::AlterDrop {
        table,
        attribute: attribute.to_lowercase(),
    })
}

// Validates a DEFAULT literal against the attribute type. Integer
// literals are promoted for DOUBLE attributes.
fn convert_default(token: &Token, data_type: DataType) -> Result<Value, String> {
    let value = super::parse_literal(token)?;
    match (data_type.kind(), value) {
        (_, Value::Null) => Ok(Value::Null),
        (TypeKind::Integer, Value::Int(v)) => Ok(Value::Int(v)),
        (TypeKind::Double, Value::Double(v)) => Ok(Value::Double(v)),
        (TypeKind::Double, Value::Int(v)) => Ok(Value::Double(v as f64)),
        (TypeKind::Boolean, Value::Bool(v)) => Ok(Value::Bool(v)),
        (TypeKind::Char | TypeKind::Varchar, Value::Text(s)) => {
            if s.len() > data_type.max_length() as usize {
                return Err(format!(
                    "default value is limited to {} bytes",
                    data_type.max_length()
                ));
            }
            Ok(Value::Text(s))
        }
        (_, other) => Err(format!(
            "default value for {} cannot be {}",
            data_type,
            other.vtype()
        )),
    }
}
