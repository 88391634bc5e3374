use crate::solver::{constraint::Constraint, value::Value, variable::Variable};

/// Builds a binary constraint requiring `a` and `b` to take different values.
pub fn not_equal<V: Value>(a: impl Into<Variable>, b: impl Into<Variable>) -> Constraint<V> {
    Constraint::binary(a, b, |x: &V, y: &V| x != y)
}
