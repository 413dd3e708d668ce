//! Abstract syntax tree for rule expressions
//!
//! Trees are immutable after construction. Children are reference-counted so
//! the combiner can make an existing tree a subtree of several new roots
//! without copying; no node is ever mutated, which is what makes that
//! sharing safe.

mod serial;

pub use serial::{NodeKind, NodeRepr};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Less than or equal (<=)
    LessEqual,
    /// Equal (=)
    Equal,
}

impl CompareOp {
    /// The operator's source symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::GreaterEqual => ">=",
            CompareOp::LessEqual => "<=",
            CompareOp::Equal => "=",
        }
    }

    /// Parse a source symbol into a comparison operator
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(CompareOp::Greater),
            "<" => Some(CompareOp::Less),
            ">=" => Some(CompareOp::GreaterEqual),
            "<=" => Some(CompareOp::LessEqual),
            "=" => Some(CompareOp::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator symbol carried by an [`AstNode::Operator`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOp {
    And,
    Or,
    Not,
    Compare(CompareOp),
}

impl RuleOp {
    /// The operator's source symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOp::And => "AND",
            RuleOp::Or => "OR",
            RuleOp::Not => "NOT",
            RuleOp::Compare(op) => op.as_str(),
        }
    }

    /// Parse a source symbol into an operator
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "AND" => Some(RuleOp::And),
            "OR" => Some(RuleOp::Or),
            "NOT" => Some(RuleOp::Not),
            _ => CompareOp::from_symbol(symbol).map(RuleOp::Compare),
        }
    }
}

impl fmt::Display for RuleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST node for rule expressions
///
/// Exactly two shapes: an `Operand` leaf holding a literal value, or an
/// `Operator` holding a symbol and its children. `NOT` keeps its single
/// child in the left slot with `right` unset; `AND`/`OR` and comparisons
/// carry two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeRepr", into = "NodeRepr")]
pub enum AstNode {
    /// Attribute name or comparison literal; no children
    Operand { value: String },
    /// Logical or comparison operator with one or two children
    Operator {
        op: RuleOp,
        left: Arc<AstNode>,
        right: Option<Arc<AstNode>>,
    },
}

impl AstNode {
    /// Leaf node holding an attribute name or literal
    pub fn operand(value: impl Into<String>) -> Self {
        AstNode::Operand {
            value: value.into(),
        }
    }

    /// `left AND right`
    pub fn and(left: AstNode, right: AstNode) -> Self {
        AstNode::Operator {
            op: RuleOp::And,
            left: Arc::new(left),
            right: Some(Arc::new(right)),
        }
    }

    /// `left OR right`
    pub fn or(left: AstNode, right: AstNode) -> Self {
        AstNode::Operator {
            op: RuleOp::Or,
            left: Arc::new(left),
            right: Some(Arc::new(right)),
        }
    }

    /// `NOT child`; the single child occupies the left slot
    pub fn negate(child: AstNode) -> Self {
        AstNode::Operator {
            op: RuleOp::Not,
            left: Arc::new(child),
            right: None,
        }
    }

    /// `attribute op literal` with both sides as operand leaves
    pub fn comparison(
        op: CompareOp,
        attribute: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        AstNode::Operator {
            op: RuleOp::Compare(op),
            left: Arc::new(AstNode::operand(attribute)),
            right: Some(Arc::new(AstNode::operand(literal))),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, AstNode::Operand { .. })
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, AstNode::Operator { .. })
    }
}
