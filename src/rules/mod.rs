//! Rewrite rules for the stylesheet migration.
//!
//! This module handles:
//! - Literal and pattern-based substitution rules over a text buffer
//! - The fixed, ordered migration plan with its hardcoded replacement blocks

pub mod engine;
pub mod plan;

pub use engine::{Matcher, Rule, RuleOutcome, apply_rules};
pub use plan::migration_rules;
