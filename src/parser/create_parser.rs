use super::Cursor;
use crate::types::parser_types::{Statement, TokenKind};
use crate::types::schema_types::{AttributeSchema, TableSchema};

/// Parses a CREATE TABLE statement:
///
/// CREATE TABLE <name> ( <attr> <type> [PRIMARYKEY] [NOTNULL], ... )
///
/// Attribute names must be unique and exactly one attribute must be the
/// primary key.
pub fn parse_create_table(tokens: &mut Cursor) -> Result<Statement, String> {
    tokens.expect_keyword("CREATE")?;
    tokens.expect_keyword("TABLE")?;
    let table_name = tokens.consume_word()?;

    tokens.expect_kind(TokenKind::LParen, "'('")?;

    let mut table = TableSchema::new(&table_name);
    parse_attribute_def(tokens, &mut table)?;
    while tokens.peek_is(TokenKind::Comma) {
        tokens.consume()?;
        parse_attribute_def(tokens, &mut table)?;
    }

    tokens.expect_kind(TokenKind::RParen, "')'")?;
    tokens.expect_end()?;

    let pk_count = table
        .attributes()
        .iter()
        .filter(|a| a.is_primary_key())
        .count();
    if pk_count != 1 {
        return Err("table must have exactly one PRIMARYKEY attribute".into());
    }

    Ok(Statement::CreateTable(table))
}

// One attribute definition: name, type, then constraint words until a
// comma or the closing parenthesis.
fn parse_attribute_def(tokens: &mut Cursor, table: &mut TableSchema) -> Result<(), String> {
    let name = tokens.consume_word()?;
    let data_type = super::parse_data_type(tokens)?;

    let mut is_primary_key = false;
    let mut is_not_null = false;

    while let Some(token) = tokens.peek() {
        if token.kind != TokenKind::Word {
            break;
        }
        if token.text.eq_ignore_ascii_case("PRIMARYKEY") {
            tokens.consume()?;
            is_primary_key = true;
            is_not_null = true;
        } else if token.text.eq_ignore_ascii_case("NOTNULL") {
            tokens.consume()?;
            is_not_null = true;
        } else {
            break; // not a constraint
        }
    }

    let attribute = AttributeSchema::new(&name, data_type, is_primary_key, is_not_null, None);
    if !table.add_attribute(attribute) {
        return Err(format!("duplicate attribute name: {}", name));
    }
    Ok(())
}
