//! Serialized boundary form of the AST
//!
//! External collaborators persist and render trees as recursive
//! `{type, left, right, value}` records. [`AstNode`] serializes through this
//! shape; deserialization re-validates it, so malformed records never become
//! live trees.

use crate::ast::{AstNode, RuleOp};
use crate::error::RuleError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Discriminant of the serialized `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Operator,
    Operand,
}

/// Recursive `{type, left, right, value}` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRepr {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub left: Option<Box<NodeRepr>>,
    #[serde(default)]
    pub right: Option<Box<NodeRepr>>,
    pub value: String,
}

impl From<&AstNode> for NodeRepr {
    fn from(node: &AstNode) -> Self {
        match node {
            AstNode::Operand { value } => NodeRepr {
                kind: NodeKind::Operand,
                left: None,
                right: None,
                value: value.clone(),
            },
            AstNode::Operator { op, left, right } => NodeRepr {
                kind: NodeKind::Operator,
                left: Some(Box::new(NodeRepr::from(left.as_ref()))),
                right: right.as_deref().map(|r| Box::new(NodeRepr::from(r))),
                value: op.as_str().to_string(),
            },
        }
    }
}

impl From<AstNode> for NodeRepr {
    fn from(node: AstNode) -> Self {
        NodeRepr::from(&node)
    }
}

impl TryFrom<NodeRepr> for AstNode {
    type Error = RuleError;

    fn try_from(repr: NodeRepr) -> Result<Self, RuleError> {
        match repr.kind {
            NodeKind::Operand => {
                if repr.left.is_some() || repr.right.is_some() {
                    return Err(RuleError::InvalidAstStructure);
                }
                Ok(AstNode::Operand { value: repr.value })
            }
            NodeKind::Operator => {
                let op = RuleOp::from_symbol(&repr.value)
                    .ok_or(RuleError::UnsupportedOperator(repr.value))?;
                let left = repr.left.ok_or(RuleError::InvalidAstStructure)?;
                let left = Arc::new(AstNode::try_from(*left)?);
                let right = match repr.right {
                    Some(r) => Some(Arc::new(AstNode::try_from(*r)?)),
                    None => None,
                };
                // Only NOT is unary
                if right.is_none() && op != RuleOp::Not {
                    return Err(RuleError::InvalidAstStructure);
                }
                Ok(AstNode::Operator { op, left, right })
            }
        }
    }
}
