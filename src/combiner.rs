//! Heuristic rule combination
//!
//! Merges several rule trees into one: whichever of AND/OR appears more
//! often across the inputs becomes the joining operator, and the trees are
//! left-folded under it. Inputs become shared subtrees of the new roots;
//! nothing is copied or mutated, which keeps the result a DAG of immutable
//! reference-counted nodes.

use crate::ast::{AstNode, RuleOp};
use crate::error::{Result, RuleError};
use smallvec::SmallVec;
use std::sync::Arc;

/// Joining operator selected by the majority-vote heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantOp {
    And,
    Or,
}

impl DominantOp {
    /// Symbol used by callers to join the original rule strings into a
    /// combined human-readable rule
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantOp::And => "AND",
            DominantOp::Or => "OR",
        }
    }
}

impl From<DominantOp> for RuleOp {
    fn from(op: DominantOp) -> RuleOp {
        match op {
            DominantOp::And => RuleOp::And,
            DominantOp::Or => RuleOp::Or,
        }
    }
}

/// Result of combining rule trees
#[derive(Debug, Clone)]
pub struct CombinedRule {
    pub ast: Arc<AstNode>,
    pub operator: DominantOp,
}

/// Count of AND/OR operator nodes in a tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperatorTally {
    pub and: usize,
    pub or: usize,
}

impl OperatorTally {
    fn add(&mut self, other: OperatorTally) {
        self.and += other.and;
        self.or += other.or;
    }
}

/// Tally AND/OR nodes by full traversal
///
/// Comparisons and NOT do not count, but traversal still descends through
/// them.
pub fn tally_operators(ast: &AstNode) -> OperatorTally {
    let mut tally = OperatorTally::default();
    let mut stack: SmallVec<[&AstNode; 16]> = SmallVec::new();
    stack.push(ast);

    while let Some(node) = stack.pop() {
        if let AstNode::Operator { op, left, right } = node {
            match op {
                RuleOp::And => tally.and += 1,
                RuleOp::Or => tally.or += 1,
                _ => {}
            }
            stack.push(left);
            if let Some(right) = right {
                stack.push(right);
            }
        }
    }

    tally
}

/// Merge rule trees under the dominant operator
///
/// Ties favor AND. The fold is left-deep: combining [t1, t2, t3] under AND
/// yields AND(AND(t1, t2), t3). A single input comes back unchanged, shared
/// rather than copied.
pub fn combine(asts: &[Arc<AstNode>]) -> Result<CombinedRule> {
    let (first, rest) = match asts.split_first() {
        Some(split) => split,
        None => return Err(RuleError::EmptyCombineInput),
    };

    let mut tally = OperatorTally::default();
    for ast in asts {
        tally.add(tally_operators(ast));
    }

    let operator = if tally.and >= tally.or {
        DominantOp::And
    } else {
        DominantOp::Or
    };

    let mut combined = first.clone();
    for ast in rest {
        combined = Arc::new(AstNode::Operator {
            op: operator.into(),
            left: combined,
            right: Some(ast.clone()),
        });
    }

    Ok(CombinedRule {
        ast: combined,
        operator,
    })
}
