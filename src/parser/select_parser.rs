use super::Cursor;
use crate::types::parser_types::{Statement, TokenKind};

/// Parses a SELECT statement. Only full scans exist:
///
/// SELECT * FROM <table>
pub fn parse_select(tokens: &mut Cursor) -> Result<Statement, String> {
    tokens.expect_keyword("SELECT")?;
    tokens.expect_kind(TokenKind::Star, "'*'")?;
    tokens.expect_keyword("FROM")?;
    let table = tokens.consume_word()?;
    tokens.expect_end()?;

    Ok(Statement::SelectAll(table))
}
