use super::Cursor;
use crate::types::parser_types::Statement;

/// Parses a DROP TABLE statement:
///
/// DROP TABLE <table>
pub fn parse_drop_table(tokens: &mut Cursor) -> Result<Statement, String> {
    tokens.expect_keyword("DROP")?;
    tokens.expect_keyword("TABLE")?;
    let table = tokens.consume_word()?;
    tokens.expect_end()?;

    Ok(Statement::DropTable(table))
}
