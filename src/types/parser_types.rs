use crate::types::schema_types::{AttributeSchema, TableSchema};
use crate::types::storage_types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,   // keywords, identifiers, true/false/null
    Str,    // string in double quotes
    Number, // integer or decimal
    LParen, // (
    RParen, // )
    Comma,  // ,
    Star,   // *
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// A fully parsed command, ready for execution
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(TableSchema),
    DropTable(String),
    Insert {
        table: String,
        rows: Vec<Vec<Value>>,
    },
    SelectAll(String),
    AlterAdd {
        table: String,
        attribute: AttributeSchema,
    },
    AlterDrop {
        table: String,
        attribute: String,
    },
}
