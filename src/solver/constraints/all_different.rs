use crate::solver::{constraint::Constraint, value::Value, variable::Variable};

use super::not_equal::not_equal;

/// Builds the pairwise decomposition of an all-different constraint over
/// the given variables.
///
/// This is the common global constraint behind puzzles like sudoku and
/// cryptarithmetic. The decomposition into one [`not_equal`] constraint per
/// unordered pair keeps propagation binary, which is exactly what forward
/// checking can exploit. Stronger global filtering algorithms exist, but
/// the pairwise form is simple and effective here.
///
/// `n` variables produce `n * (n - 1) / 2` constraints; zero or one
/// variables produce none.
pub fn all_different<V, I, T>(variables: I) -> Vec<Constraint<V>>
where
    V: Value,
    I: IntoIterator<Item = T>,
    T: Into<Variable>,
{
    let variables: Vec<Variable> = variables.into_iter().map(Into::into).collect();
    let pair_count = variables.len() * variables.len().saturating_sub(1) / 2;
    let mut constraints = Vec::with_capacity(pair_count);
    for (i, a) in variables.iter().enumerate() {
        for b in &variables[i + 1..] {
            constraints.push(not_equal(a.clone(), b.clone()));
        }
    }
    constraints
}
