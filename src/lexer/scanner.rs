//! Tokenizer and raw-string parenthesis balance check

use crate::error::{Result, RuleError};
use crate::lexer::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Token grammar
///
/// Alternative order matters: quoted strings win over bare words, and words
/// are tried before the comparison symbols so multi-character operators
/// still match at their own positions.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'(?:[^'\\]|\\.)*'|\(|\)|[0-9A-Za-z_]+|>=|<=|>|<|=")
        .expect("valid token pattern")
});

/// Split a raw rule string into tokens
///
/// Whitespace between tokens is insignificant. Any character the grammar
/// does not consume invalidates the whole string.
pub fn tokenize(raw: &str) -> Result<Vec<Token>> {
    let lexemes: Vec<&str> = TOKEN_RE.find_iter(raw).map(|m| m.as_str()).collect();
    if lexemes.is_empty() {
        return Err(RuleError::EmptyOrUnparsable);
    }

    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped != lexemes.concat() {
        return Err(RuleError::UnsupportedCharacters);
    }

    Ok(lexemes.into_iter().map(Token::classify).collect())
}

/// Check parenthesis nesting on the raw string
///
/// Runs before tokenization as a cheap early rejection; a close with no
/// matching open fails immediately.
pub fn parentheses_balanced(raw: &str) -> bool {
    let mut depth: usize = 0;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}
