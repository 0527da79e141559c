//! Attribute catalog — the fixed, ordered set of named classification rules.
//!
//! Each rule is an independent `(name, predicate)` pair evaluated against one
//! record. Predicates are pure and total: malformed or missing fields yield
//! `false`, never an error. The catalog is an immutable value handed to the
//! graph builder, not module-level state.

pub mod rules;
pub mod types;

pub use rules::default_catalog;
pub use types::{AttributeRule, Catalog, RuleCheckFn};
