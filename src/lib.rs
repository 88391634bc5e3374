//! Necto is a generic, reusable constraint satisfaction problem (CSP) solver.
//!
//! Problems are stated declaratively as a set of named variables, a finite
//! domain of candidate values per variable, and a list of unary and binary
//! constraints over those variables. The engine is problem-agnostic: the
//! same solver core drives the bundled map colouring, sudoku, and
//! cryptarithmetic frontends.
//!
//! # Core Concepts
//!
//! - **[`Problem`](solver::problem::Problem)**: The declarative problem
//!   statement: variables in declaration order, their domains, and the
//!   constraints a solution must satisfy.
//! - **[`Constraint`](solver::constraint::Constraint)**: A unary or binary
//!   rule over the variables, carrying an opaque predicate. The
//!   [`constraints`](solver::constraints) module provides builders for the
//!   common shapes like [`not_equal`](solver::constraints::not_equal()) and
//!   [`all_different`](solver::constraints::all_different()).
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: The engine that
//!   takes a problem and finds a satisfying assignment. It normalizes the
//!   problem with a 1-consistency pass, then runs a backtracking search
//!   with forward checking, branching as directed by a pluggable pair of
//!   [`heuristics`](solver::heuristics).
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `a != b` where `a` can be `1` or
//! `2`, and `b` can only be `1`. The solver should deduce that `a` must be
//! `2`.
//!
//! ```
//! use necto::solver::constraint::Constraint;
//! use necto::solver::domain::domain;
//! use necto::solver::engine::SolverEngine;
//! use necto::solver::problem::Problem;
//! use necto::solver::variable::Variable;
//!
//! let problem = Problem::new(
//!     vec![Variable::from("a"), Variable::from("b")],
//!     im::hashmap! {
//!         Variable::from("a") => domain([1, 2]),
//!         Variable::from("b") => domain([1]),
//!     },
//!     vec![Constraint::binary("a", "b", |x, y| x != y)],
//! );
//!
//! let engine = SolverEngine::default();
//! let (solution, stats) = engine.solve(problem)?;
//!
//! let solution = solution.expect("a != b is satisfiable here");
//! assert_eq!(solution[&Variable::from("a")], 2);
//! assert_eq!(solution[&Variable::from("b")], 1);
//! assert!(stats.completeness_checks > 0);
//! # Ok::<(), necto::error::Error>(())
//! ```
pub mod error;
pub mod puzzles;
pub mod solver;
