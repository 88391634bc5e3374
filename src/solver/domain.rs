use im::{HashMap, HashSet};

use crate::solver::{value::Value, variable::Variable};

/// The set of values still considered possible for one variable.
pub type Domain<V> = HashSet<V>;

/// A mapping from variables to their current domains.
///
/// Two distinct lifetimes share this shape: the initial domains stored on a
/// [`Problem`](crate::solver::problem::Problem), and the search-local map of
/// *unassigned* variables that the engine narrows as it descends. Because
/// `im` maps are persistent, cloning a `Domains` at a branch point is O(1)
/// and sibling branches can never observe each other's pruning.
pub type Domains<V> = HashMap<Variable, Domain<V>>;

/// Builds a domain from any value sequence. Convenience for frontends.
pub fn domain<V: Value>(values: impl IntoIterator<Item = V>) -> Domain<V> {
    values.into_iter().collect()
}
