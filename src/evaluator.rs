//! Rule evaluation against flat data records

use crate::ast::{AstNode, CompareOp, RuleOp};
use crate::error::{Result, RuleError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scalar value an attribute may hold in a data record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    String(String),
}

impl Scalar {
    /// Numeric coercion with the engine's loose semantics: strings are
    /// trimmed, an empty string is 0, anything unparsable is NaN (and NaN
    /// comparisons are all false)
    fn as_number(&self) -> f64 {
        match self {
            Scalar::Number(n) => *n,
            Scalar::String(s) => number_of(s),
        }
    }

    /// String coercion; integral numbers render without a decimal point
    fn as_text(&self) -> String {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => s.clone(),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

/// Flat mapping from attribute name to scalar value
pub type DataRecord = HashMap<String, Scalar>;

fn number_of(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

/// Evaluate an AST against a data record
///
/// Pure and recursive. AND/OR evaluate both children unconditionally, so a
/// missing-attribute error on the untaken branch of an OR still propagates;
/// this mirrors the engine's historical behavior and callers rely on it
/// surfacing incomplete records.
pub fn evaluate(node: &AstNode, record: &DataRecord) -> Result<bool> {
    match node {
        AstNode::Operator { op, left, right } => match op {
            RuleOp::And | RuleOp::Or => {
                let right = right.as_deref().ok_or(RuleError::InvalidAstStructure)?;
                let left_value = evaluate(left, record)?;
                let right_value = evaluate(right, record)?;
                if *op == RuleOp::And {
                    Ok(left_value && right_value)
                } else {
                    Ok(left_value || right_value)
                }
            }
            RuleOp::Not => Ok(!evaluate(left, record)?),
            RuleOp::Compare(cmp) => {
                let right = right.as_deref().ok_or(RuleError::InvalidAstStructure)?;
                compare(*cmp, left, right, record)
            }
        },
        // A bare operand is not a rule
        AstNode::Operand { .. } => Err(RuleError::InvalidAstStructure),
    }
}

fn compare(op: CompareOp, left: &AstNode, right: &AstNode, record: &DataRecord) -> Result<bool> {
    let (attribute, literal) = match (left, right) {
        (AstNode::Operand { value: attribute }, AstNode::Operand { value: literal }) => {
            (attribute, literal)
        }
        _ => return Err(RuleError::InvalidAstStructure),
    };

    let data_value = record
        .get(attribute)
        .ok_or_else(|| RuleError::MissingData(attribute.clone()))?;

    Ok(match op {
        CompareOp::Greater => data_value.as_number() > number_of(literal),
        CompareOp::Less => data_value.as_number() < number_of(literal),
        CompareOp::GreaterEqual => data_value.as_number() >= number_of(literal),
        CompareOp::LessEqual => data_value.as_number() <= number_of(literal),
        CompareOp::Equal => {
            data_value.as_text().trim().to_lowercase() == literal.trim().to_lowercase()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_rule;

    fn record(pairs: &[(&str, Scalar)]) -> DataRecord {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn eval(rule: &str, pairs: &[(&str, Scalar)]) -> Result<bool> {
        let ast = create_rule(rule).unwrap();
        evaluate(&ast, &record(pairs))
    }

    #[test]
    fn test_simple_comparison() {
        assert!(eval("age >= 18", &[("age", 20.into())]).unwrap());
        assert!(!eval("age >= 18", &[("age", 17.into())]).unwrap());
    }

    #[test]
    fn test_and_or() {
        let data: &[(&str, Scalar)] = &[("age", 25.into()), ("salary", 35000.into())];
        assert!(eval("age >= 18 AND salary > 30000", data).unwrap());
        assert!(!eval("age >= 18 AND salary > 40000", data).unwrap());
        assert!(eval("age >= 30 OR salary > 30000", data).unwrap());
        assert!(!eval("age >= 30 OR salary > 40000", data).unwrap());
    }

    #[test]
    fn test_not() {
        let data: &[(&str, Scalar)] = &[("department", "IT".into()), ("salary", 35000.into())];
        assert!(eval("NOT (department = 'HR' AND salary < 40000)", data).unwrap());
        assert!(!eval("NOT (department = 'IT' AND salary < 40000)", data).unwrap());
    }

    #[test]
    fn test_missing_attribute() {
        let err = eval("age >= 18", &[("salary", 35000.into())]).unwrap_err();
        assert_eq!(err.to_string(), "Missing data for operand: age");
    }

    #[test]
    fn test_no_short_circuit_on_or() {
        // The left side is already true, but the right side still evaluates
        // and its missing attribute aborts the run
        let err = eval("age >= 18 OR spend < 500", &[("age", 20.into())]).unwrap_err();
        assert!(matches!(err, RuleError::MissingData(name) if name == "spend"));
    }

    #[test]
    fn test_no_short_circuit_on_and() {
        let err = eval("age >= 99 AND spend < 500", &[("age", 20.into())]).unwrap_err();
        assert!(matches!(err, RuleError::MissingData(name) if name == "spend"));
    }

    #[test]
    fn test_numeric_coercion_of_string_data() {
        assert!(eval("age >= 18", &[("age", "25".into())]).unwrap());
        assert!(eval("age >= 18", &[("age", "  25  ".into())]).unwrap());
        // Unparsable data is NaN and every ordering against it is false
        assert!(!eval("age >= 18", &[("age", "abc".into())]).unwrap());
        assert!(!eval("age < 18", &[("age", "abc".into())]).unwrap());
    }

    #[test]
    fn test_equality_is_trimmed_case_insensitive_text() {
        assert!(eval("department = 'HR'", &[("department", "  hr ".into())]).unwrap());
        assert!(eval("age = 27", &[("age", 27.into())]).unwrap());
        assert!(!eval("age = 27", &[("age", 28.into())]).unwrap());
    }

    #[test]
    fn test_integral_numbers_compare_equal_as_text() {
        // 35000.0 renders as "35000" for the = operator
        assert!(eval("salary = 35000", &[("salary", 35000.0.into())]).unwrap());
    }

    #[test]
    fn test_bare_operand_root_is_structural_error() {
        let node = AstNode::operand("age");
        let err = evaluate(&node, &DataRecord::new()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid AST structure");
    }
}
