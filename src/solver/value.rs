use std::fmt::Debug;
use std::hash::Hash;

/// The bound for any type that can live in a variable's domain.
///
/// A value must be cloneable and hashable so that it can sit in a domain
/// set, and totally ordered so that value-ordering heuristics have a
/// deterministic tie-break. This is a marker trait: any type satisfying
/// the bounds implements `Value` automatically, so a frontend can use
/// plain integers or its own enum without extra ceremony.
pub trait Value: Clone + Debug + Eq + Hash + Ord + 'static {}
impl<T> Value for T where T: Clone + Debug + Eq + Hash + Ord + 'static {}
