use crate::types::parser_types::{Token, TokenKind};

/// Splits a command into tokens. Strings are double-quoted without
/// escapes; numbers take an optional leading minus and at most one
/// decimal point; words are alphanumerics plus underscores.
pub fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                tokens.push(Token::new(TokenKind::LParen, "("));
                i += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::RParen, ")"));
                i += 1;
            }
            ',' => {
                tokens.push(Token::new(TokenKind::Comma, ","));
                i += 1;
            }
            '*' => {
                tokens.push(Token::new(TokenKind::Star, "*"));
                i += 1;
            }
            '"' => {
                i += 1;
                let start = i;
                while i < chars.len() && chars[i] != '"' {
                    i += 1;
                }
                if i >= chars.len() {
                    return Err("unterminated string literal".into());
                }
                let text: String = chars[start..i].iter().collect();
                i += 1; // closing quote
                tokens.push(Token::new(TokenKind::Str, text));
            }
            _ if c.is_ascii_digit() || (c == '-' && next_is_digit(&chars, i)) => {
                let start = i;
                if c == '-' {
                    i += 1;
                }
                let mut has_decimal = false;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    if chars[i] == '.' {
                        if has_decimal {
                            break;
                        }
                        has_decimal = true;
                    }
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                tokens.push(Token::new(TokenKind::Number, text));
            }
            _ if c.is_alphanumeric() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                tokens.push(Token::new(TokenKind::Word, text));
            }
            other => return Err(format!("unexpected character: '{}'", other)),
        }
    }

    Ok(tokens)
}

fn next_is_digit(chars: &[char], i: usize) -> bool {
    chars.get(i + 1).map(|c| c.is_ascii_digit()).unwrap_or(false)
}
