use super::Cursor;
use crate::types::parser_types::{Statement, TokenKind};

/// Parses an INSERT statement:
///
/// INSERT <table> VALUES ( v, v, ... ) [, ( ... )]*
///
/// Values are typed literals; arity and types are checked against the
/// schema at execution time.
pub fn parse_insert(tokens: &mut Cursor) -> Result<Statement, String> {
    tokens.expect_keyword("INSERT")?;
    let table = tokens.consume_word()?;
    tokens.expect_keyword("VALUES")?;

    let mut rows = Vec::new();
    loop {
        tokens.expect_kind(TokenKind::LParen, "'('")?;

        let mut row = Vec::new();
        if !tokens.peek_is(TokenKind::RParen) {
            row.push(super::parse_literal(&tokens.consume()?)?);
            while tokens.peek_is(TokenKind::Comma) {
                tokens.consume()?;
                row.push(super::parse_literal(&tokens.consume()?)?);
            }
        }

        tokens.expect_kind(TokenKind::RParen, "')'")?;
        rows.push(row);

        // another row follows after a comma
        if tokens.peek_is(TokenKind::Comma) {
            tokens.consume()?;
        } else {
            break;
        }
    }

    tokens.expect_end()?;
    Ok(Statement::Insert { table, rows })
}
