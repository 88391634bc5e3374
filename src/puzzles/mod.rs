//! Ready-made puzzle frontends built on the generic solver.
//!
//! Each submodule translates a familiar puzzle into a
//! [`Problem`](crate::solver::problem::Problem) and offers helpers for
//! reading the solved assignment back in the puzzle's own terms.

pub mod cryptarithmetic;
pub mod map_colouring;
pub mod sudoku;
