//! Lexical tokens for rule strings

use crate::ast::CompareOp;
use std::fmt;

/// Atomic lexical unit of a rule string
///
/// `Display` renders the exact source lexeme; syntax error messages embed
/// tokens verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    And,
    Or,
    Not,
    /// One of the five comparison symbols
    Compare(CompareOp),
    /// Bare word or quoted string literal; quotes are kept until parsing
    Operand(String),
}

impl Token {
    /// Classify a lexeme produced by the tokenizer
    ///
    /// Only exact upper-case AND/OR/NOT are logical keywords; any other word
    /// is an operand.
    pub(crate) fn classify(lexeme: &str) -> Token {
        match lexeme {
            "(" => Token::OpenParen,
            ")" => Token::CloseParen,
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => match CompareOp::from_symbol(lexeme) {
                Some(op) => Token::Compare(op),
                None => Token::Operand(lexeme.to_string()),
            },
        }
    }

    /// Comparison or logical operator; parens and operands are not operators
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::And | Token::Or | Token::Not | Token::Compare(_)
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self, Token::Compare(_))
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::And => f.write_str("AND"),
            Token::Or => f.write_str("OR"),
            Token::Not => f.write_str("NOT"),
            Token::Compare(op) => f.write_str(op.as_str()),
            Token::Operand(lexeme) => f.write_str(lexeme),
        }
    }
}
