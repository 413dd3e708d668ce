//! Rule Engine Core - eligibility rule compilation and evaluation
//!
//! This crate compiles boolean rules like
//! `age >= 18 AND (salary > 30000 OR spend < 500)` into immutable ASTs,
//! evaluates them against flat data records, and merges several rules into
//! one combined tree via a majority-vote heuristic.
//!
//! It is the algorithmic core of a larger rule-management service;
//! persistence, transport, and rendering happen elsewhere, against the
//! serialized `{type, left, right, value}` form of the tree.

pub mod ast;
pub mod catalog;
pub mod combiner;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, CompareOp, NodeKind, NodeRepr, RuleOp};
pub use catalog::{default_catalog, AttributeCatalog};
pub use combiner::{combine, tally_operators, CombinedRule, DominantOp, OperatorTally};
pub use error::{Result, RuleError};
pub use evaluator::{evaluate, DataRecord, Scalar};
pub use lexer::{parentheses_balanced, tokenize, validate, Token};
pub use parser::Parser;

use std::sync::Arc;

/// Compile a rule string against the default attribute catalog
///
/// Full pipeline: parenthesis balance check on the raw string,
/// tokenization, token-sequence validation, parse.
pub fn create_rule(rule: &str) -> Result<Arc<AstNode>> {
    create_rule_with(rule, catalog::default_catalog())
}

/// Compile a rule string against a caller-supplied catalog
pub fn create_rule_with(rule: &str, catalog: &AttributeCatalog) -> Result<Arc<AstNode>> {
    if !lexer::parentheses_balanced(rule) {
        return Err(RuleError::UnmatchedParentheses);
    }

    let tokens = lexer::tokenize(rule)?;
    lexer::validate(&tokens)?;

    let ast = Parser::new(&tokens, catalog).parse()?;
    Ok(Arc::new(ast))
}

/// Evaluate a compiled rule against a data record
pub fn evaluate_rule(ast: &AstNode, record: &DataRecord) -> Result<bool> {
    evaluator::evaluate(ast, record)
}

/// Merge compiled rules into one tree under the dominant operator
pub fn combine_rules(asts: &[Arc<AstNode>]) -> Result<CombinedRule> {
    combiner::combine(asts)
}
