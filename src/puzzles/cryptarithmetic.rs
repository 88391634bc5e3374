//! Cryptarithmetic (verbal arithmetic) puzzles of the form
//! `SEND + MORE = MONEY`: assign a distinct digit to every letter so the
//! equation holds, with no multi-digit word starting in zero.
//!
//! The encoding works column by column, right to left. Besides one
//! variable per letter (domain 0 to 9) there is a carry variable per
//! column (domain 0 or 1) and a column variable whose values are
//! `(addend, addend, carry-in)` triples. Binary constraints wire each
//! triple's components to the letters and carries it summarizes, and the
//! triple's digit sum ties the column to its result letter and carry-out.
//! Everything lands on unary and binary constraints, which is the shape
//! forward checking propagates well.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        constraints::all_different,
        domain::Domains,
        problem::{Assignment, Problem},
        variable::Variable,
    },
};

/// A value in a cryptarithmetic problem: a digit for letter and carry
/// variables, or an `(addend, addend, carry-in)` triple for a column
/// variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CryptValue {
    Digit(u8),
    Column(u8, u8, u8),
}

fn letter_variable(letter: char) -> Variable {
    Variable::from(letter.to_string())
}

fn carry_variable(index: usize) -> Variable {
    Variable::from(format!("c{index}"))
}

fn column_variable(index: usize) -> Variable {
    Variable::from(format!("p{index}"))
}

/// A parsed `FIRST + SECOND = SUM` puzzle.
#[derive(Debug, Clone)]
pub struct CryptarithmeticPuzzle {
    first: String,
    second: String,
    sum: String,
}

impl CryptarithmeticPuzzle {
    /// Parses a puzzle from text like `"SEND + MORE = MONEY"`.
    ///
    /// Words are case-insensitive and must be purely alphabetic; the sum
    /// must be at least as wide as each addend, otherwise the equation
    /// cannot hold and the encoding would silently drop columns.
    pub fn from_text(text: &str) -> Result<Self> {
        let (addends, sum_text) = text
            .split_once('=')
            .ok_or_else(|| SolverError::InvalidPuzzle(format!("missing `=` in {text:?}")))?;
        let (first_text, second_text) = addends
            .split_once('+')
            .ok_or_else(|| SolverError::InvalidPuzzle(format!("missing `+` in {text:?}")))?;

        let parse_word = |raw: &str| -> Result<String> {
            let word = raw.trim();
            if word.is_empty() || !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
                return Err(SolverError::InvalidPuzzle(format!("{raw:?} is not a word")).into());
            }
            Ok(word.to_ascii_uppercase())
        };

        let first = parse_word(first_text)?;
        let second = parse_word(second_text)?;
        let sum = parse_word(sum_text)?;
        if sum.len() < first.len() || sum.len() < second.len() {
            return Err(SolverError::InvalidPuzzle(format!(
                "the sum {sum} is shorter than an addend"
            ))
            .into());
        }

        Ok(Self { first, second, sum })
    }

    fn letters(&self) -> BTreeSet<char> {
        self.first
            .chars()
            .chain(self.second.chars())
            .chain(self.sum.chars())
            .collect()
    }

    /// Builds the constraint problem for this puzzle.
    ///
    /// Variables are declared letters first (sorted), then the carries
    /// right to left, then the column triples right to left.
    pub fn problem(&self) -> Problem<CryptValue> {
        let mut variables = Vec::new();
        let mut domains = Domains::new();
        let mut constraints: Vec<Constraint<CryptValue>> = Vec::new();

        let letters = self.letters();
        for &letter in &letters {
            let variable = letter_variable(letter);
            variables.push(variable.clone());
            domains.insert(variable, (0..10).map(CryptValue::Digit).collect());
        }
        constraints.extend(all_different(letters.iter().map(|&letter| {
            letter_variable(letter)
        })));

        // A multi-digit word cannot start with zero.
        for word in [&self.first, &self.second, &self.sum] {
            let mut chars = word.chars();
            if let (Some(leading), Some(_)) = (chars.next(), chars.next()) {
                constraints.push(Constraint::unary(
                    letter_variable(leading),
                    |value: &CryptValue| !matches!(value, CryptValue::Digit(0)),
                ));
            }
        }

        let width = self.sum.len();
        for index in 0..width {
            let carry = carry_variable(index);
            variables.push(carry.clone());
            domains.insert(carry, (0..2).map(CryptValue::Digit).collect());
        }

        // Column index 0 is the rightmost column; addends shorter than the
        // sum contribute nothing to their missing columns.
        let first_letters = padded_column_letters(&self.first, width);
        let second_letters = padded_column_letters(&self.second, width);
        let sum_letters: Vec<char> = self.sum.chars().rev().collect();

        for index in 0..width {
            let column = column_variable(index);
            variables.push(column.clone());
            domains.insert(
                column.clone(),
                (0..10u8)
                    .flat_map(|a| {
                        (0..10u8).flat_map(move |b| {
                            (0..2u8).map(move |carry| CryptValue::Column(a, b, carry))
                        })
                    })
                    .collect(),
            );

            match first_letters[index] {
                Some(letter) => constraints.push(Constraint::binary(
                    column.clone(),
                    letter_variable(letter),
                    |column, digit| match (column, digit) {
                        (CryptValue::Column(a, _, _), CryptValue::Digit(digit)) => a == digit,
                        _ => false,
                    },
                )),
                None => constraints.push(Constraint::unary(
                    column.clone(),
                    |value: &CryptValue| matches!(value, CryptValue::Column(0, _, _)),
                )),
            }
            match second_letters[index] {
                Some(letter) => constraints.push(Constraint::binary(
                    column.clone(),
                    letter_variable(letter),
                    |column, digit| match (column, digit) {
                        (CryptValue::Column(_, b, _), CryptValue::Digit(digit)) => b == digit,
                        _ => false,
                    },
                )),
                None => constraints.push(Constraint::unary(
                    column.clone(),
                    |value: &CryptValue| matches!(value, CryptValue::Column(_, 0, _)),
                )),
            }

            constraints.push(Constraint::binary(
                column.clone(),
                carry_variable(index),
                |column, digit| match (column, digit) {
                    (CryptValue::Column(_, _, carry), CryptValue::Digit(digit)) => carry == digit,
                    _ => false,
                },
            ));
            if index == 0 {
                // Nothing carries into the rightmost column.
                constraints.push(Constraint::unary(column.clone(), |value: &CryptValue| {
                    matches!(value, CryptValue::Column(_, _, 0))
                }));
            }

            constraints.push(Constraint::binary(
                column.clone(),
                letter_variable(sum_letters[index]),
                |column, digit| match (column, digit) {
                    (CryptValue::Column(a, b, carry), CryptValue::Digit(digit)) => {
                        (a + b + carry) % 10 == *digit
                    }
                    _ => false,
                },
            ));

            if index + 1 < width {
                constraints.push(Constraint::binary(
                    column,
                    carry_variable(index + 1),
                    |column, digit| match (column, digit) {
                        (CryptValue::Column(a, b, carry), CryptValue::Digit(digit)) => {
                            (a + b + carry) / 10 == *digit
                        }
                        _ => false,
                    },
                ));
            } else {
                // The leftmost column must not overflow the sum.
                constraints.push(Constraint::unary(column, |value: &CryptValue| {
                    matches!(value, CryptValue::Column(a, b, carry) if a + b + carry < 10)
                }));
            }
        }

        Problem::new(variables, domains, constraints)
    }

    /// Extracts the letter-to-digit mapping from a solver assignment, or
    /// `None` if some letter is unbound.
    pub fn digits(&self, assignment: &Assignment<CryptValue>) -> Option<BTreeMap<char, u8>> {
        let mut digits = BTreeMap::new();
        for letter in self.letters() {
            match assignment.get(&letter_variable(letter)) {
                Some(CryptValue::Digit(digit)) => {
                    digits.insert(letter, *digit);
                }
                _ => return None,
            }
        }
        Some(digits)
    }

    /// Renders the equation with every assigned letter replaced by its
    /// digit, e.g. `"9567 + 1085 = 10652"`.
    pub fn format_assignment(&self, assignment: &Assignment<CryptValue>) -> String {
        let equation = format!("{} + {} = {}", self.first, self.second, self.sum);
        equation
            .chars()
            .map(|letter| match assignment.get(&letter_variable(letter)) {
                Some(CryptValue::Digit(digit)) => char::from(b'0' + digit),
                _ => letter,
            })
            .collect()
    }

    /// Checks an assignment against the puzzle itself: distinct digits,
    /// no leading zeros, and the arithmetic actually holding.
    ///
    /// This is independent of the constraint encoding, which makes it the
    /// right oracle for tests.
    pub fn is_valid_solution(&self, assignment: &Assignment<CryptValue>) -> bool {
        let Some(digits) = self.digits(assignment) else {
            return false;
        };

        let distinct: HashSet<u8> = digits.values().copied().collect();
        if distinct.len() != digits.len() {
            return false;
        }

        for word in [&self.first, &self.second, &self.sum] {
            let mut chars = word.chars();
            if let (Some(leading), Some(_)) = (chars.next(), chars.next()) {
                if digits.get(&leading) == Some(&0) {
                    return false;
                }
            }
        }

        let value_of = |word: &str| -> Option<u64> {
            word.chars().try_fold(0u64, |total, letter| {
                digits.get(&letter).map(|digit| total * 10 + u64::from(*digit))
            })
        };

        match (
            value_of(&self.first),
            value_of(&self.second),
            value_of(&self.sum),
        ) {
            (Some(first), Some(second), Some(sum)) => first + second == sum,
            _ => false,
        }
    }
}

/// The word's letters by column, rightmost first, padded with `None` up to
/// `width`.
fn padded_column_letters(word: &str, width: usize) -> Vec<Option<char>> {
    let mut letters: Vec<Option<char>> = word.chars().rev().map(Some).collect();
    letters.resize(width, None);
    letters
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CryptValue, CryptarithmeticPuzzle};
    use crate::{
        error::SolverError,
        solver::{engine::SolverEngine, problem::Assignment, variable::Variable},
    };

    #[test]
    fn parses_and_normalizes_the_equation() {
        let puzzle = CryptarithmeticPuzzle::from_text("  send + more =  money ").unwrap();
        assert_eq!(puzzle.first, "SEND");
        assert_eq!(puzzle.second, "MORE");
        assert_eq!(puzzle.sum, "MONEY");
    }

    #[test]
    fn rejects_malformed_equations() {
        for text in [
            "SEND + MORE",
            "SEND MORE = MONEY",
            "SEND + M0RE = MONEY",
            " + MORE = MONEY",
            "AB + CD = E",
        ] {
            let error = CryptarithmeticPuzzle::from_text(text).unwrap_err();
            assert!(
                matches!(error.inner(), SolverError::InvalidPuzzle(_)),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn the_encoding_declares_letters_then_carries_then_columns() {
        let puzzle = CryptarithmeticPuzzle::from_text("AB + C = DE").unwrap();
        let problem = puzzle.problem();

        let names: Vec<&str> = problem.variables.iter().map(Variable::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "c0", "c1", "p0", "p1"]);

        assert_eq!(problem.domains[&Variable::from("A")].len(), 10);
        assert_eq!(problem.domains[&Variable::from("c0")].len(), 2);
        assert_eq!(problem.domains[&Variable::from("p0")].len(), 200);

        // 10 pairwise letter constraints, 2 leading-digit constraints, 6
        // for the rightmost column (two addend wirings, carry-in, the zero
        // carry-in rule, result digit, carry-out) and 5 for the leftmost
        // (addend wiring, the pad rule, carry-in, result digit, no
        // overflow).
        assert_eq!(problem.constraints.len(), 23);
    }

    #[test]
    fn solves_send_more_money_to_the_unique_solution() {
        let _ = tracing_subscriber::fmt::try_init();

        let puzzle = CryptarithmeticPuzzle::from_text("SEND + MORE = MONEY").unwrap();
        let (solution, stats) = SolverEngine::default().solve(puzzle.problem()).unwrap();
        let solution = solution.unwrap();

        assert!(puzzle.is_valid_solution(&solution));
        assert_eq!(
            puzzle.format_assignment(&solution),
            "9567 + 1085 = 10652"
        );

        let digits = puzzle.digits(&solution).unwrap();
        assert_eq!(digits[&'S'], 9);
        assert_eq!(digits[&'E'], 5);
        assert_eq!(digits[&'N'], 6);
        assert_eq!(digits[&'D'], 7);
        assert_eq!(digits[&'M'], 1);
        assert_eq!(digits[&'O'], 0);
        assert_eq!(digits[&'R'], 8);
        assert_eq!(digits[&'Y'], 2);

        assert!(stats.completeness_checks >= 1);
    }

    #[test]
    fn solves_two_two_four_to_some_valid_assignment() {
        let puzzle = CryptarithmeticPuzzle::from_text("TWO + TWO = FOUR").unwrap();
        let (solution, _) = SolverEngine::default().solve(puzzle.problem()).unwrap();
        let solution = solution.unwrap();

        // This puzzle has several solutions, so only validity is pinned.
        assert!(puzzle.is_valid_solution(&solution));
    }

    #[test]
    fn an_impossible_equation_has_no_solution() {
        // A + B = AB forces A to be zero, which the leading-digit rule
        // forbids for the two-letter sum.
        let puzzle = CryptarithmeticPuzzle::from_text("A + B = AB").unwrap();
        let (solution, _) = SolverEngine::default().solve(puzzle.problem()).unwrap();
        assert_eq!(solution, None);
    }

    #[test]
    fn validity_checking_needs_distinct_digits_and_no_leading_zero() {
        let puzzle = CryptarithmeticPuzzle::from_text("AB + C = DE").unwrap();

        assert!(!puzzle.is_valid_solution(&Assignment::new()));

        // 13 + 2 = 15 holds numerically but A and D share the digit 1.
        let mut assignment: Assignment<CryptValue> = Assignment::new();
        assignment.insert(Variable::from("A"), CryptValue::Digit(1));
        assignment.insert(Variable::from("B"), CryptValue::Digit(3));
        assignment.insert(Variable::from("C"), CryptValue::Digit(2));
        assignment.insert(Variable::from("D"), CryptValue::Digit(1));
        assignment.insert(Variable::from("E"), CryptValue::Digit(5));
        assert!(!puzzle.is_valid_solution(&assignment));

        // 18 + 9 = 27 uses five distinct digits and adds up.
        assignment.insert(Variable::from("B"), CryptValue::Digit(8));
        assignment.insert(Variable::from("C"), CryptValue::Digit(9));
        assignment.insert(Variable::from("D"), CryptValue::Digit(2));
        assignment.insert(Variable::from("E"), CryptValue::Digit(7));
        assert!(puzzle.is_valid_solution(&assignment));

        // 08 + 9 = 17 still adds up with distinct digits, but AB now
        // starts with zero.
        assignment.insert(Variable::from("A"), CryptValue::Digit(0));
        assignment.insert(Variable::from("D"), CryptValue::Digit(1));
        assert!(!puzzle.is_valid_solution(&assignment));
    }

    #[test]
    fn formatting_leaves_unassigned_letters_in_place() {
        let puzzle = CryptarithmeticPuzzle::from_text("AB + C = DE").unwrap();

        let mut assignment: Assignment<CryptValue> = Assignment::new();
        assignment.insert(Variable::from("A"), CryptValue::Digit(7));
        assignment.insert(Variable::from("C"), CryptValue::Digit(3));

        assert_eq!(puzzle.format_assignment(&assignment), "7B + 3 = DE");
        assert_eq!(puzzle.digits(&assignment), None);
    }
}
