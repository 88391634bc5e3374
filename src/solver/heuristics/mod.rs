//! Pluggable variable-selection and value-ordering strategies for the
//! backtracking engine.

pub mod value;
pub mod variable;
