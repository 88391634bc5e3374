use std::collections::HashSet;

use im::HashMap;

use crate::{
    error::{Result, SolverError},
    solver::{constraint::Constraint, domain::Domains, value::Value, variable::Variable},
};

/// A mapping from variables to chosen values, built up incrementally during
/// search. A *complete* assignment binds every variable of the problem.
pub type Assignment<V> = HashMap<Variable, V>;

/// A constraint satisfaction problem: an ordered set of variables, an
/// initial domain per variable, and the constraints a solution must
/// satisfy.
///
/// The declaration order of `variables` is significant: it is the
/// tie-break order used by the variable-ordering heuristics. The solver
/// treats a `Problem` as read-only except for the one-time 1-consistency
/// normalization at the top of
/// [`SolverEngine::solve`](crate::solver::engine::SolverEngine::solve),
/// which prunes `domains` and strips the unary constraints in place.
#[derive(Debug, Clone)]
pub struct Problem<V: Value> {
    /// Every decision variable, in declaration order.
    pub variables: Vec<Variable>,
    /// Initial candidate values for each declared variable.
    pub domains: Domains<V>,
    /// Unary and binary constraints, initially mixed; only binary
    /// constraints remain once 1-consistency has run.
    pub constraints: Vec<Constraint<V>>,
}

impl<V: Value> Problem<V> {
    pub fn new(
        variables: Vec<Variable>,
        domains: Domains<V>,
        constraints: Vec<Constraint<V>>,
    ) -> Self {
        Self {
            variables,
            domains,
            constraints,
        }
    }

    /// The problem's completeness predicate: does `assignment` bind every
    /// declared variable?
    ///
    /// The search engine consults this exactly once per assignment state it
    /// reaches, which makes the call count a useful measure of explored
    /// nodes (see [`SearchStats`](crate::solver::engine::SearchStats)).
    pub fn is_complete(&self, assignment: &Assignment<V>) -> bool {
        self.variables
            .iter()
            .all(|variable| assignment.contains_key(variable))
    }

    /// Rejects malformed problems: duplicate declarations, declared
    /// variables without a domain, constraints naming undeclared variables,
    /// and binary constraints whose endpoints coincide.
    ///
    /// These are caller programming errors, not search outcomes, and
    /// [`SolverEngine::solve`](crate::solver::engine::SolverEngine::solve)
    /// surfaces them before doing any work.
    pub fn validate(&self) -> Result<()> {
        let mut declared: HashSet<&Variable> = HashSet::with_capacity(self.variables.len());
        for variable in &self.variables {
            if !declared.insert(variable) {
                return Err(SolverError::DuplicateVariable(variable.clone()).into());
            }
            if !self.domains.contains_key(variable) {
                return Err(SolverError::MissingDomain(variable.clone()).into());
            }
        }
        for constraint in &self.constraints {
            for variable in constraint.variables() {
                if !declared.contains(variable) {
                    return Err(SolverError::UnknownVariable(variable.clone()).into());
                }
            }
            if let Constraint::Binary(binary) = constraint {
                if binary.variables[0] == binary.variables[1] {
                    return Err(
                        SolverError::DegenerateConstraint(binary.variables[0].clone()).into(),
                    );
                }
            }
        }
        Ok(())
    }
}
