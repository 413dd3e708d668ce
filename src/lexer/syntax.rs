//! Token-sequence syntax validation
//!
//! Read-only scan between lexing and parsing. Structural problems are
//! reported here with their dedicated messages, so the parser only ever
//! sees sequences it can commit to.

use crate::error::{Result, RuleError};
use crate::lexer::token::Token;

/// Validate the structure of a token sequence
pub fn validate(tokens: &[Token]) -> Result<()> {
    if tokens.is_empty() {
        return Err(RuleError::EmptyOrUnparsable);
    }

    for pair in tokens.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        // Two sub-expressions back to back, e.g. "(a > 1)(b > 2)"
        if matches!(current, Token::CloseParen) && matches!(next, Token::OpenParen) {
            return Err(RuleError::MissingLogicalOperator);
        }

        if !current.is_operator()
            && !next.is_operator()
            && !current.is_paren()
            && !next.is_paren()
        {
            return Err(RuleError::MissingOperatorBetween(
                current.to_string(),
                next.to_string(),
            ));
        }

        // NOT counts as an operator here, so "AND NOT" and stacked "NOT NOT"
        // are rejected at this stage
        if current.is_operator() && next.is_operator() {
            return Err(RuleError::AdjacentOperators(
                current.to_string(),
                next.to_string(),
            ));
        }
    }

    let mut open_count: i32 = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => open_count += 1,
            Token::CloseParen => {
                open_count -= 1;
                if open_count < 0 {
                    return Err(RuleError::UnmatchedClosingParenthesis);
                }
            }
            _ => {}
        }

        if token.is_comparison() {
            if i == 0 || i == tokens.len() - 1 {
                return Err(RuleError::ComparisonAtInvalidPosition(token.to_string()));
            }
            if tokens[i - 1].is_operator() || tokens[i + 1].is_operator() {
                return Err(RuleError::ComparisonNotBetweenOperands(token.to_string()));
            }
        }

        if matches!(token, Token::And | Token::Or) && (i == 0 || i == tokens.len() - 1) {
            return Err(RuleError::LogicalAtInvalidPosition(token.to_string()));
        }
    }

    if open_count != 0 {
        return Err(RuleError::UnmatchedOpeningParenthesis);
    }

    Ok(())
}
