use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    solver::{
        domain::Domains,
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        problem::{Assignment, Problem},
        propagation::{forward_check, one_consistency},
        value::Value,
    },
};

/// Counters describing how much work a single [`SolverEngine::solve`] call
/// did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// How many assignment states the search reached. The completeness
    /// predicate runs exactly once per reached state, so this is the
    /// explored-node count; it stays at zero when 1-consistency alone
    /// proves the problem unsolvable.
    pub completeness_checks: u64,
    /// Candidate values that were tried and abandoned, either because
    /// forward checking rejected them or because the subtree below them
    /// was exhausted.
    pub backtracks: u64,
    /// Forward-checking narrowings that removed at least one value from
    /// some neighbour's domain.
    pub prunings: u64,
}

/// The main engine for solving constraint satisfaction problems.
///
/// The `SolverEngine` takes a problem definition (variables, their domains
/// and the constraints over them) and finds an assignment that satisfies
/// all constraints.
///
/// It discharges the unary constraints up front with a 1-consistency pass,
/// then runs a depth-first backtracking search in which every tentative
/// assignment is propagated one step through the binary constraints
/// (forward checking). Which variable to branch on and in which order to
/// try its values are delegated to a pair of pluggable heuristics; the
/// default pairing is minimum-remaining-values with least-constraining-value.
pub struct SolverEngine<V: Value> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
}

impl<V: Value> SolverEngine<V> {
    /// Creates an engine branching with the given heuristic pair.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// The problem is taken by value because solving begins with a
    /// destructive normalization: unary constraints are folded into the
    /// domains and removed. Callers that still need the original keep a
    /// clone, which is cheap thanks to the persistent domain maps.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem definition to solve.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` with the first complete assignment
    ///   found, if one exists.
    /// * `Ok((None, stats))` if the problem is proven unsolvable.
    /// * `Err(error)` if the problem definition itself is malformed.
    pub fn solve(&self, mut problem: Problem<V>) -> Result<(Option<Assignment<V>>, SearchStats)> {
        let mut stats = SearchStats::default();

        problem.validate()?;
        if !one_consistency(&mut problem)? {
            debug!("1-consistency proved the problem unsolvable");
            return Ok((None, stats));
        }

        let domains = problem.domains.clone();
        let mut assignment = Assignment::new();
        let solution = self.search(&problem, &mut assignment, &domains, &mut stats);

        debug!(
            solved = solution.is_some(),
            completeness_checks = stats.completeness_checks,
            backtracks = stats.backtracks,
            prunings = stats.prunings,
            "search finished"
        );

        Ok((solution, stats))
    }

    /// Depth-first search over `domains`, which holds the candidate values
    /// of the variables `assignment` has not bound yet.
    fn search(
        &self,
        problem: &Problem<V>,
        assignment: &mut Assignment<V>,
        domains: &Domains<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.completeness_checks += 1;
        if problem.is_complete(assignment) {
            return Some(assignment.clone());
        }

        let variable = self.variable_heuristic.select_variable(problem, domains)?;
        let ordered_values = self
            .value_heuristic
            .order_values(problem, &variable, domains);

        for value in ordered_values {
            assignment.insert(variable.clone(), value.clone());

            // Branch on a copy of the domains so sibling branches stay
            // isolated; the assigned variable's entry is dropped because
            // the maps track unassigned variables only.
            let mut narrowed = domains.clone();
            narrowed.remove(&variable);

            if forward_check(problem, &variable, &value, &mut narrowed, stats) {
                if let Some(solution) = self.search(problem, assignment, &narrowed, stats) {
                    return Some(solution);
                }
            }

            // The tentative assignment is reverted whether propagation
            // rejected it or the subtree below it was exhausted.
            assignment.remove(&variable);
            stats.backtracks += 1;
        }

        None
    }
}

impl<V: Value> Default for SolverEngine<V> {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
