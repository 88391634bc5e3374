//! Classic 9x9 sudoku as a constraint problem.
//!
//! Each cell is a variable over the digits 1 to 9. The 27 row, column, and
//! box groups are pairwise all-different, and the puzzle's givens are
//! pinned with unary constraints so the 1-consistency pass narrows them to
//! singletons before the search starts.

use crate::solver::{
    constraint::Constraint,
    constraints::{all_different, fixed},
    domain::Domains,
    problem::{Assignment, Problem},
    variable::Variable,
};

/// A puzzle or solution grid in row-major order; `0` marks an empty cell.
pub type Grid = [[u8; 9]; 9];

fn cell_variable(row: usize, col: usize) -> Variable {
    Variable::from(format!("r{row}c{col}"))
}

/// Builds the constraint problem for a sudoku grid.
pub fn sudoku_problem(grid: &Grid) -> Problem<u8> {
    let mut variables = Vec::with_capacity(81);
    let mut domains = Domains::new();
    let mut constraints: Vec<Constraint<u8>> = Vec::new();

    for row in 0..9 {
        for col in 0..9 {
            let cell = cell_variable(row, col);
            variables.push(cell.clone());
            domains.insert(cell.clone(), (1..=9).collect());
            if grid[row][col] != 0 {
                constraints.push(fixed(cell, grid[row][col]));
            }
        }
    }

    for row in 0..9 {
        constraints.extend(all_different((0..9).map(|col| cell_variable(row, col))));
    }
    for col in 0..9 {
        constraints.extend(all_different((0..9).map(|row| cell_variable(row, col))));
    }
    for band in 0..3 {
        for stack in 0..3 {
            constraints.extend(all_different((0..9).map(|index| {
                cell_variable(band * 3 + index / 3, stack * 3 + index % 3)
            })));
        }
    }

    Problem::new(variables, domains, constraints)
}

/// Reads a complete assignment back into a grid.
///
/// Returns `None` if any cell is unbound, which only happens when the
/// assignment does not come from solving a [`sudoku_problem`].
pub fn solved_grid(assignment: &Assignment<u8>) -> Option<Grid> {
    let mut grid: Grid = [[0; 9]; 9];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = *assignment.get(&cell_variable(row, col))?;
        }
    }
    Some(grid)
}
