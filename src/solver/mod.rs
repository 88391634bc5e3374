//! The generic solving core: the problem model, the propagation passes,
//! the branching heuristics, and the backtracking engine itself.

pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod problem;
pub mod propagation;
pub mod stats;
pub mod value;
pub mod variable;
