pub mod alter_parser;
pub mod create_parser;
pub mod drop_parser;
pub mod insert_parser;
pub mod select_parser;
pub mod token;

use crate::types::parser_types::{Statement, Token, TokenKind};
use crate::types::schema_types::{DataType, TypeKind};
use crate::types::storage_types::Value;

/// Tokenizes one command and hands it to the matching statement parser.
pub fn parse_command(input: &str) -> Result<Statement, String> {
    let tokens = token::tokenize(input)?;
    let mut tokens = Cursor::new(tokens);

    let Some(first) = tokens.peek() else {
        return Err("empty command".into());
    };
    if first.kind != TokenKind::Word {
        return Err(format!("expected a command, got '{}'", first.text));
    }

    match first.text.to_ascii_uppercase().as_str() {
        "CREATE" => create_parser::parse_create_table(&mut tokens),
        "SELECT" => select_parser::parse_select(&mut tokens),
        "INSERT" => insert_parser::parse_insert(&mut tokens),
        "DROP" => drop_parser::parse_drop_table(&mut tokens),
        "ALTER" => alter_parser::parse_alter_table(&mut tokens),
        other => Err(format!("unknown command: {}", other)),
    }
}

// Token stream cursor shared by the statement parsers.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().map(|t| t.kind == kind).unwrap_or(false)
    }

    pub(crate) fn consume(&mut self) -> Result<Token, String> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| "unexpected end of command".to_string())?;
        self.pos += 1;
        Ok(token)
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Result<Token, String> {
        let token = self.consume()?;
        if token.kind != kind {
            return Err(format!("expected {} but got '{}'", what, token.text));
        }
        Ok(token)
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<(), String> {
        let token = self.consume()?;
        if token.kind != TokenKind::Word || !token.text.eq_ignore_ascii_case(keyword) {
            return Err(format!("expected '{}' but got '{}'", keyword, token.text));
        }
        Ok(())
    }

    pub(crate) fn consume_word(&mut self) -> Result<String, String> {
        let token = self.consume()?;
        if token.kind != TokenKind::Word {
            return Err(format!("expected a name but got '{}'", token.text));
        }
        Ok(token.text)
    }

    pub(crate) fn expect_end(&self) -> Result<(), String> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(format!("unexpected token after command: '{}'", token.text)),
        }
    }
}

/// Parses a data type: INTEGER, DOUBLE, BOOLEAN, CHAR(n), VARCHAR(n).
pub(crate) fn parse_data_type(tokens: &mut Cursor) -> Result<DataType, String> {
    let type_name = tokens.consume_word()?.to_ascii_uppercase();

    match type_name.as_str() {
        "INTEGER" => Ok(DataType::new(TypeKind::Integer)),
        "DOUBLE" => Ok(DataType::new(TypeKind::Double)),
        "BOOLEAN" => Ok(DataType::new(TypeKind::Boolean)),
        "CHAR" | "VARCHAR" => {
            tokens.expect_kind(TokenKind::LParen, "'('")?;

            let size_token = tokens.consume()?;
            if size_token.kind != TokenKind::Number || size_token.text.contains('.') {
                return Err(format!("expected an integer size for {}", type_name));
            }
            let size: i32 = size_token
                .text
                .parse()
                .map_err(|_| format!("invalid size for {}", type_name))?;
            if size <= 0 {
                return Err(format!("{} size must be positive", type_name));
            }

            tokens.expect_kind(TokenKind::RParen, "')'")?;

            let kind = if type_name == "CHAR" {
                TypeKind::Char
            } else {
                TypeKind::Varchar
            };
            Ok(DataType::with_length(kind, size))
        }
        other => Err(format!("unknown data type: {}", other)),
    }
}

/// Converts a literal token to a value: quoted strings, integers,
/// decimals, true/false and null (case-insensitive).
pub(crate) fn parse_literal(token: &Token) -> Result<Value, String> {
    match token.kind {
        TokenKind::Str => Ok(Value::Text(token.text.clone())),
        TokenKind::Number if token.text.contains('.') => token
            .text
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| format!("invalid number: {}", token.text)),
        TokenKind::Number => token
            .text
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|_| format!("integer out of range: {}", token.text)),
        TokenKind::Word if token.text.eq_ignore_ascii_case("null") => Ok(Value::Null),
        TokenKind::Word if token.text.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
        TokenKind::Word if token.text.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
        _ => Err(format!("unexpected value: '{}'", token.text)),
    }
}
