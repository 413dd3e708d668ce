//! Attribute catalog - the closed set of field names a rule may reference

use crate::error::{Result, RuleError};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Attribute names available when no custom catalog is supplied
const DEFAULT_ATTRIBUTES: [&str; 5] = ["age", "department", "salary", "spend", "experience"];

/// Closed set of attribute names a rule may reference
///
/// Lookup is case-insensitive; names are stored lower-cased. The catalog is
/// injected into the parser, so swapping the attribute set never touches
/// parser logic.
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    names: HashSet<String>,
}

impl AttributeCatalog {
    /// Build a catalog from attribute names
    ///
    /// Rejects case-insensitive duplicates to keep the set unambiguous.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for name in names {
            let name = name.into().to_lowercase();
            if !set.insert(name.clone()) {
                return Err(RuleError::DuplicateAttribute(name));
            }
        }
        Ok(Self { names: set })
    }

    /// Check whether `name` is a valid attribute (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate the lower-cased attribute names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        default_catalog().clone()
    }
}

/// Global default catalog
static DEFAULT_CATALOG: Lazy<AttributeCatalog> = Lazy::new(|| {
    AttributeCatalog::new(DEFAULT_ATTRIBUTES).expect("default attribute names are unique")
});

/// The fixed production catalog: age, department, salary, spend, experience
pub fn default_catalog() -> &'static AttributeCatalog {
    &DEFAULT_CATALOG
}
