//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use std::cell::RefCell;

use rand::{seq::IteratorRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::solver::{domain::Domains, problem::Problem, value::Value, variable::Variable};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can dramatically
/// improve solver performance.
pub trait VariableSelectionHeuristic<V: Value> {
    /// Selects the next variable to be assigned.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved; its variable declaration order
    ///   is the canonical tie-break order.
    /// * `domains`: The current domains of the *unassigned* variables only.
    ///
    /// # Returns
    ///
    /// * `Some(Variable)` of the chosen variable, if any variable is still
    ///   unassigned.
    /// * `None` if `domains` is empty.
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<Variable>;
}

/// A simple heuristic that selects the first unassigned variable in
/// declaration order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<V: Value> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<Variable> {
        problem
            .variables
            .iter()
            .find(|variable| domains.contains_key(*variable))
            .cloned()
    }
}

/// A heuristic that selects the variable with the Minimum Remaining Values
/// (MRV) in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable. The idea is to tackle the most difficult parts of the problem
/// early, which leads to faster pruning of the search space. Ties are broken
/// by declaration order, which keeps the search fully deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl<V: Value> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<Variable> {
        problem
            .variables
            .iter()
            .enumerate()
            .filter_map(|(index, variable)| {
                domains.get(variable).map(|domain| (domain.len(), index, variable))
            })
            // Primary criterion: domain size (ascending)
            // Secondary criterion: declaration index (ascending, for tie-breaking)
            .min_by_key(|(size, index, _)| (*size, *index))
            .map(|(_, _, variable)| variable.clone())
    }
}

/// A heuristic that selects an unassigned variable at random.
///
/// Mostly useful as a baseline when benchmarking the informed heuristics.
/// The generator is owned by the heuristic, so a seeded instance replays the
/// same selection sequence on the same problem.
pub struct RandomVariableHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomVariableHeuristic {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomVariableHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> VariableSelectionHeuristic<V> for RandomVariableHeuristic {
    fn select_variable(&self, problem: &Problem<V>, domains: &Domains<V>) -> Option<Variable> {
        let mut rng = self.rng.borrow_mut();
        problem
            .variables
            .iter()
            .filter(|variable| domains.contains_key(*variable))
            .choose(&mut *rng)
            .cloned()
    }
}
