//! Validation rules for entities
//!
//! Every entity type declares an ordered [`RuleSet`]: a list of
//! `(field, predicate, message)` triples. Validation evaluates every rule and
//! collects all violations; a single value may break several rules at once
//! (an empty currency code is both blank and not three characters long).

pub mod validators;

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use validator::{ValidationError, ValidationErrors};

/// A single broken rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One constraint on one field of `T`
pub struct Rule<T: 'static> {
    /// Field name as exposed over the wire
    pub field: &'static str,
    /// Message reported when `check` returns false
    pub message: &'static str,
    pub check: fn(&T) -> bool,
}

/// Ordered list of rules for an entity type
pub struct RuleSet<T: 'static> {
    rules: &'static [Rule<T>],
}

impl<T> RuleSet<T> {
    pub const fn new(rules: &'static [Rule<T>]) -> Self {
        Self { rules }
    }

    /// Evaluate every rule against `entity`, in declaration order
    pub fn validate(&self, entity: &T) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| !(rule.check)(entity))
            .map(|rule| Violation {
                field: rule.field,
                message: rule.message,
            })
            .collect()
    }

    /// Fields covered by at least one rule
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Convert collected violations into `validator`'s error structure.
///
/// Used by the `Validate` implementations generated by `impl_entity!`.
pub fn to_validation_errors(violations: &[Violation]) -> Result<(), ValidationErrors> {
    if violations.is_empty() {
        return Ok(());
    }

    let mut errors = ValidationErrors::new();
    for violation in violations {
        let error = ValidationError::new("constraint").with_message(Cow::Borrowed(violation.message));
        errors.add(violation.field, error);
    }
    Err(errors)
}
