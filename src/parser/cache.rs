//! Rule parsing cache - keyed by rule string, with faster hashing
//!
//! Rules are evaluated far more often than they change, so compiled trees
//! are memoized process-wide. Trees are immutable and reference-counted;
//! a cache hit hands out a shared root.

use crate::ast::AstNode;
use crate::error::Result;
use crate::evaluator::{evaluate, DataRecord};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Global rule cache with fast hashing (ahash)
static RULE_CACHE: Lazy<RwLock<AHashMap<String, Arc<AstNode>>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(256);
    RwLock::new(map)
});

/// Get or compile a rule string, using the cache for repeated rules
///
/// Runs the full pipeline against the default catalog on a miss. Failed
/// compilations are not cached.
#[inline]
pub fn get_or_parse(rule: &str) -> Result<Arc<AstNode>> {
    // Fast path: check read lock first
    {
        let cache = RULE_CACHE.read();
        if let Some(ast) = cache.get(rule) {
            return Ok(ast.clone());
        }
    }

    // Slow path: compile and cache
    let ast = crate::create_rule(rule)?;

    {
        let mut cache = RULE_CACHE.write();
        cache.insert(rule.to_string(), ast.clone());
    }

    Ok(ast)
}

/// Evaluate a rule string against a data record, using the cached AST
#[inline]
pub fn check_rule(rule: &str, record: &DataRecord) -> Result<bool> {
    let ast = get_or_parse(rule)?;
    evaluate(&ast, record)
}

/// Clear the rule cache (useful for testing)
pub fn clear_cache() {
    let mut cache = RULE_CACHE.write();
    cache.clear();
}

/// Number of cached rules
pub fn cache_size() -> usize {
    let cache = RULE_CACHE.read();
    cache.len()
}
