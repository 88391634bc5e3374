use crate::solver::{constraint::Constraint, value::Value, variable::Variable};

/// Builds a unary constraint pinning `variable` to exactly `value`.
///
/// Useful for encoding puzzle givens. Because this is a unary constraint it
/// is discharged during 1-consistency, which narrows the variable's domain
/// to the singleton before search begins.
pub fn fixed<V: Value>(variable: impl Into<Variable>, value: V) -> Constraint<V> {
    Constraint::unary(variable, move |candidate: &V| *candidate == value)
}
