use std::fmt;
use std::slice;
use std::sync::Arc;

use crate::solver::{problem::Assignment, value::Value, variable::Variable};

/// Predicate over a single value. Must be pure and total over the
/// variable's domain type.
pub type UnaryPredicate<V> = Arc<dyn Fn(&V) -> bool>;

/// Predicate over a pair of values, applied in the constraint's declared
/// variable order.
pub type BinaryPredicate<V> = Arc<dyn Fn(&V, &V) -> bool>;

/// A restriction on the values one variable may take.
#[derive(Clone)]
pub struct UnaryConstraint<V: Value> {
    pub variable: Variable,
    predicate: UnaryPredicate<V>,
}

impl<V: Value> UnaryConstraint<V> {
    pub fn new(variable: impl Into<Variable>, predicate: impl Fn(&V) -> bool + 'static) -> Self {
        Self {
            variable: variable.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Whether `value` is acceptable for this constraint's variable.
    pub fn is_satisfied(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl<V: Value> fmt::Debug for UnaryConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryConstraint")
            .field("variable", &self.variable)
            .finish_non_exhaustive()
    }
}

/// A restriction on the joint values of an ordered pair of distinct
/// variables.
///
/// The predicate receives the two values in the declared variable order, so
/// asymmetric relations such as `a < b` work no matter which endpoint
/// triggered the check; [`BinaryConstraint::holds_with`] routes the
/// arguments.
#[derive(Clone)]
pub struct BinaryConstraint<V: Value> {
    pub variables: [Variable; 2],
    predicate: BinaryPredicate<V>,
}

impl<V: Value> BinaryConstraint<V> {
    pub fn new(
        first: impl Into<Variable>,
        second: impl Into<Variable>,
        predicate: impl Fn(&V, &V) -> bool + 'static,
    ) -> Self {
        Self {
            variables: [first.into(), second.into()],
            predicate: Arc::new(predicate),
        }
    }

    /// Given one endpoint of the pair, returns the other; `None` if
    /// `variable` is not part of this constraint.
    pub fn other(&self, variable: &Variable) -> Option<&Variable> {
        if *variable == self.variables[0] {
            Some(&self.variables[1])
        } else if *variable == self.variables[1] {
            Some(&self.variables[0])
        } else {
            None
        }
    }

    /// Evaluates the predicate with `value` bound to `variable` and
    /// `other_value` bound to the opposite endpoint.
    pub fn holds_with(&self, variable: &Variable, value: &V, other_value: &V) -> bool {
        if *variable == self.variables[0] {
            (self.predicate)(value, other_value)
        } else {
            debug_assert_eq!(*variable, self.variables[1]);
            (self.predicate)(other_value, value)
        }
    }

    /// Checks the constraint against a (possibly partial) assignment.
    ///
    /// Vacuously true while either endpoint is unbound; the constraint only
    /// bites once both of its variables have values.
    pub fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        match (
            assignment.get(&self.variables[0]),
            assignment.get(&self.variables[1]),
        ) {
            (Some(first), Some(second)) => (self.predicate)(first, second),
            _ => true,
        }
    }
}

impl<V: Value> fmt::Debug for BinaryConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryConstraint")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

/// A rule a solution must satisfy: either a unary restriction on one
/// variable or a binary restriction on a pair.
///
/// The solver never inspects a predicate, it only invokes it. After
/// 1-consistency has run, a problem's constraint list contains only the
/// `Binary` variant.
#[derive(Debug, Clone)]
pub enum Constraint<V: Value> {
    Unary(UnaryConstraint<V>),
    Binary(BinaryConstraint<V>),
}

impl<V: Value> Constraint<V> {
    /// Shorthand for a closure-backed unary constraint.
    pub fn unary(variable: impl Into<Variable>, predicate: impl Fn(&V) -> bool + 'static) -> Self {
        Constraint::Unary(UnaryConstraint::new(variable, predicate))
    }

    /// Shorthand for a closure-backed binary constraint.
    pub fn binary(
        first: impl Into<Variable>,
        second: impl Into<Variable>,
        predicate: impl Fn(&V, &V) -> bool + 'static,
    ) -> Self {
        Constraint::Binary(BinaryConstraint::new(first, second, predicate))
    }

    /// The variables this constraint mentions.
    pub fn variables(&self) -> &[Variable] {
        match self {
            Constraint::Unary(unary) => slice::from_ref(&unary.variable),
            Constraint::Binary(binary) => &binary.variables,
        }
    }

    /// Checks the constraint against a (possibly partial) assignment;
    /// vacuously true while any mentioned variable is unbound.
    pub fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        match self {
            Constraint::Unary(unary) => assignment
                .get(&unary.variable)
                .map_or(true, |value| unary.is_satisfied(value)),
            Constraint::Binary(binary) => binary.is_satisfied(assignment),
        }
    }
}
