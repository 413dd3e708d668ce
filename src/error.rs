//! Error types for the rule engine core

use thiserror::Error;

/// Main error type for the rule engine core
///
/// The `#[error]` text of each variant is part of the external contract:
/// callers surface these messages verbatim and conformance tests assert on
/// them.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid rule: Unmatched parentheses")]
    UnmatchedParentheses,

    #[error("Invalid rule string: Unable to parse tokens")]
    EmptyOrUnparsable,

    #[error("Invalid rule string: Contains unsupported characters")]
    UnsupportedCharacters,

    #[error("Invalid syntax: Missing logical operator (AND/OR) between expressions")]
    MissingLogicalOperator,

    #[error("Invalid syntax: Missing operator between \"{0}\" and \"{1}\"")]
    MissingOperatorBetween(String, String),

    #[error("Invalid syntax: Adjacent operators \"{0}\" and \"{1}\"")]
    AdjacentOperators(String, String),

    #[error("Invalid syntax: Unmatched closing parenthesis")]
    UnmatchedClosingParenthesis,

    #[error("Invalid syntax: Unmatched opening parenthesis")]
    UnmatchedOpeningParenthesis,

    #[error("Invalid syntax: Comparison operator \"{0}\" at invalid position")]
    ComparisonAtInvalidPosition(String),

    #[error("Invalid syntax: Comparison operator \"{0}\" must be between operands")]
    ComparisonNotBetweenOperands(String),

    #[error("Invalid syntax: Logical operator \"{0}\" at invalid position")]
    LogicalAtInvalidPosition(String),

    #[error("Invalid tokens: Expected non-empty array")]
    EmptyTokenSequence,

    #[error("Invalid comparison: Expected format \"operand operator operand\"")]
    IncompleteComparison,

    #[error("Invalid attribute: {0} is not part of the attribute catalog")]
    UnknownAttribute(String),

    #[error("Invalid operator: {0}. Expected one of >, <, >=, <=, =")]
    InvalidComparisonOperator(String),

    #[error("Invalid comparison: Missing right operand")]
    MissingRightOperand,

    #[error("Invalid rule: {0} operator missing right operand")]
    MissingOperandAfter(String),

    #[error("Invalid rule: NOT operator missing operand")]
    MissingOperandAfterNot,

    #[error("Invalid rule: Missing closing parenthesis")]
    MissingClosingParenthesis,

    #[error("Missing data for operand: {0}")]
    MissingData(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Invalid AST structure")]
    InvalidAstStructure,

    #[error("Invalid input: Expected non-empty array of ASTs")]
    EmptyCombineInput,

    #[error("Duplicate attribute in catalog: {0}")]
    DuplicateAttribute(String),
}

/// Result type alias for the rule engine core
pub type Result<T> = std::result::Result<T, RuleError>;
