//! Reusable field predicates
//!
//! Each predicate answers "does this value satisfy the constraint". They are
//! combined with a field name and a message into [`Rule`](super::Rule)s.
//!
//! Size predicates follow the usual bean-style semantics: an absent value
//! passes, only presence rules (`not_blank`, `not_null`) reject `None`.

/// Value is present and contains at least one non-whitespace character
pub fn not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Value is present
pub fn not_null<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Value is absent or has at most `max` characters
pub fn max_chars(value: Option<&str>, max: usize) -> bool {
    value.is_none_or(|s| s.chars().count() <= max)
}

/// Value is absent or has exactly `len` characters
pub fn exact_chars(value: Option<&str>, len: usize) -> bool {
    value.is_none_or(|s| s.chars().count() == len)
}

/// Value is absent or greater than or equal to `min`
pub fn at_least(value: Option<i32>, min: i32) -> bool {
    value.is_none_or(|v| v >= min)
}
