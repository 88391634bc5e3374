//! Map colouring as a constraint problem: one variable per region, one
//! `not_equal` constraint per border.

use serde::Serialize;

use crate::solver::{
    constraints::not_equal,
    domain::{Domain, Domains},
    problem::Problem,
    variable::Variable,
};

/// The palette available to a colouring problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Builds a colouring problem over the given regions.
///
/// Every region may take any colour from `colours`; every border pair must
/// end up with different colours. Region declaration order is preserved,
/// so the heuristics break ties the same way on every run.
pub fn colouring_problem(
    regions: &[&str],
    borders: &[(&str, &str)],
    colours: &[Colour],
) -> Problem<Colour> {
    let variables: Vec<Variable> = regions.iter().map(|region| Variable::from(*region)).collect();
    let palette: Domain<Colour> = colours.iter().copied().collect();
    let domains: Domains<Colour> = variables
        .iter()
        .map(|variable| (variable.clone(), palette.clone()))
        .collect();
    let constraints = borders
        .iter()
        .map(|(first, second)| not_equal(*first, *second))
        .collect();

    Problem::new(variables, domains, constraints)
}

/// The textbook map of Australia: the mainland states and territories plus
/// Tasmania, which borders nothing.
pub fn australia(colours: &[Colour]) -> Problem<Colour> {
    colouring_problem(
        &["WA", "NT", "SA", "Q", "NSW", "V", "T"],
        &[
            ("WA", "NT"),
            ("WA", "SA"),
            ("NT", "SA"),
            ("NT", "Q"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("Q", "NSW"),
            ("NSW", "V"),
        ],
        colours,
    )
}
