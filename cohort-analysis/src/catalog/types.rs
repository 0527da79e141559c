//! Catalog types — the rule function table and its container.

use std::fmt;

use rustc_hash::FxHashSet;

use cohort_core::errors::CatalogError;
use cohort_core::record::Record;

/// Type alias for rule check functions.
pub type RuleCheckFn = Box<dyn Fn(&Record) -> bool + Send + Sync>;

/// A named classification rule: one attribute category.
///
/// The name doubles as the attribute's graph node key and must be unique
/// across the catalog. The check is a pure function of one record.
pub struct AttributeRule {
    /// Unique attribute name, e.g. `Age_Young`.
    pub name: String,
    /// Human-readable statement of the rule.
    pub description: String,
    /// The predicate: returns true if the record belongs to the category.
    pub check: RuleCheckFn,
}

impl AttributeRule {
    /// Create a rule from a name, description, and check function.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        check: impl Fn(&Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            check: Box::new(check),
        }
    }

    /// Evaluate the rule against a record.
    pub fn matches(&self, record: &Record) -> bool {
        (self.check)(record)
    }
}

impl fmt::Debug for AttributeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeRule")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// The ordered, immutable collection of attribute rules.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<AttributeRule>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate attribute names.
    ///
    /// A duplicate would silently merge two categories into one graph node,
    /// so it is a fatal misconfiguration rather than a runtime condition.
    pub fn new(rules: Vec<AttributeRule>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: rule.name.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Rules in catalog order.
    pub fn rules(&self) -> &[AttributeRule] {
        &self.rules
    }

    /// Attribute names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the catalog holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let rules = vec![
            AttributeRule::new("Gender_Female", "a", |_| true),
            AttributeRule::new("Gender_Female", "b", |_| false),
        ];
        let err = Catalog::new(rules).unwrap_err();
        match err {
            CatalogError::DuplicateName { name } => assert_eq!(name, "Gender_Female"),
        }
    }

    #[test]
    fn catalog_preserves_rule_order() {
        let catalog = Catalog::new(vec![
            AttributeRule::new("b", "", |_| true),
            AttributeRule::new("a", "", |_| true),
        ])
        .unwrap();
        assert_eq!(catalog.names(), vec!["b", "a"]);
    }
}
