//! Constraint propagation passes.
//!
//! Two passes are implemented: a one-time 1-consistency normalization that
//! discharges unary constraints before search begins, and the one-step
//! forward-checking filter the engine runs after every tentative
//! assignment.

use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        constraint::Constraint,
        domain::{Domain, Domains},
        engine::SearchStats,
        problem::Problem,
        value::Value,
        variable::Variable,
    },
};

/// Makes `problem` 1-consistent in place.
///
/// Every unary constraint is folded into its variable's domain: values that
/// fail the predicate are removed, and the constraint itself is then
/// dropped from the problem, leaving only binary constraints behind. All
/// unary constraints are processed even after some domain has been emptied,
/// so the surviving domains are always the full 1-consistent narrowing.
///
/// Returns `Ok(false)` if any domain was emptied, in which case the problem
/// has no solution and search should not start at all. Running the pass
/// again on its own output changes nothing.
///
/// # Errors
///
/// Returns [`SolverError::UnknownVariable`] if a unary constraint names a
/// variable with no domain entry.
pub fn one_consistency<V: Value>(problem: &mut Problem<V>) -> Result<bool> {
    let mut solvable = true;

    for constraint in &problem.constraints {
        let Constraint::Unary(unary) = constraint else {
            continue;
        };
        let Some(current) = problem.domains.get(&unary.variable) else {
            return Err(SolverError::UnknownVariable(unary.variable.clone()).into());
        };
        let narrowed: Domain<V> = current
            .iter()
            .filter(|value| unary.is_satisfied(value))
            .cloned()
            .collect();
        if narrowed.is_empty() {
            debug!(variable = %unary.variable, "unary constraint emptied a domain");
            solvable = false;
        }
        problem.domains.insert(unary.variable.clone(), narrowed);
    }

    problem
        .constraints
        .retain(|constraint| matches!(constraint, Constraint::Binary(_)));

    Ok(solvable)
}

/// Propagates a tentative assignment one step through the binary
/// constraints.
///
/// `domains` holds the candidate values of the *unassigned* variables only;
/// the assigned ones have had their entries removed. For each binary
/// constraint touching `assigned_variable` whose other endpoint is still
/// unassigned, the other endpoint's domain is narrowed to the values
/// compatible with `assigned_value`. Later constraints see the narrowing
/// applied by earlier ones.
///
/// Returns `false` as soon as some domain would become empty. The emptied
/// domain is not written back and earlier narrowings are not rolled back:
/// the caller branches on a scratch copy of `domains` and discards it
/// wholesale when this function fails.
pub fn forward_check<V: Value>(
    problem: &Problem<V>,
    assigned_variable: &Variable,
    assigned_value: &V,
    domains: &mut Domains<V>,
    stats: &mut SearchStats,
) -> bool {
    for constraint in &problem.constraints {
        let Constraint::Binary(binary) = constraint else {
            continue;
        };
        let Some(other) = binary.other(assigned_variable) else {
            continue;
        };
        let Some(current) = domains.get(other) else {
            // No domain entry means the other endpoint is already assigned.
            continue;
        };

        let narrowed: Domain<V> = current
            .iter()
            .filter(|candidate| binary.holds_with(assigned_variable, assigned_value, candidate))
            .cloned()
            .collect();

        if narrowed.is_empty() {
            return false;
        }
        if narrowed.len() < current.len() {
            stats.prunings += 1;
            domains.insert(other.clone(), narrowed);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{forward_check, one_consistency};
    use crate::{
        error::SolverError,
        solver::{
            constraint::Constraint,
            domain::{domain, Domains},
            engine::SearchStats,
            problem::Problem,
            variable::Variable,
        },
    };

    fn var(name: &str) -> Variable {
        Variable::from(name)
    }

    #[test]
    fn one_consistency_narrows_domains_and_strips_unary_constraints() {
        let mut problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([1, 2, 3, 4]),
                var("b") => domain([1, 2]),
            },
            vec![
                Constraint::unary("a", |value: &i64| value % 2 == 0),
                Constraint::binary("a", "b", |x, y| x != y),
            ],
        );

        assert!(one_consistency(&mut problem).unwrap());
        assert_eq!(problem.domains[&var("a")], domain([2, 4]));
        assert_eq!(problem.domains[&var("b")], domain([1, 2]));
        assert_eq!(problem.constraints.len(), 1);
        assert!(matches!(problem.constraints[0], Constraint::Binary(_)));
    }

    #[test]
    fn one_consistency_reports_a_wipeout_but_keeps_narrowing() {
        let mut problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([1, 3]),
                var("b") => domain([1, 2, 3]),
            },
            vec![
                Constraint::unary("a", |value: &i64| value % 2 == 0),
                Constraint::unary("b", |value: &i64| *value > 1),
            ],
        );

        assert!(!one_consistency(&mut problem).unwrap());
        // The wipeout on `a` does not stop `b` from being narrowed.
        assert!(problem.domains[&var("a")].is_empty());
        assert_eq!(problem.domains[&var("b")], domain([2, 3]));
        assert!(problem.constraints.is_empty());
    }

    #[test]
    fn one_consistency_is_idempotent_on_its_own_output() {
        let mut problem = Problem::new(
            vec![var("a")],
            im::hashmap! { var("a") => domain([1, 2, 3]) },
            vec![Constraint::unary("a", |value: &i64| *value != 2)],
        );

        assert!(one_consistency(&mut problem).unwrap());
        let domains_after_first = problem.domains.clone();

        assert!(one_consistency(&mut problem).unwrap());
        assert_eq!(problem.domains, domains_after_first);
        assert!(problem.constraints.is_empty());
    }

    #[test]
    fn one_consistency_rejects_a_constraint_on_a_missing_domain() {
        let mut problem = Problem::new(
            vec![var("a")],
            im::hashmap! { var("a") => domain([1]) },
            vec![Constraint::unary("ghost", |_: &i64| true)],
        );

        let error = one_consistency(&mut problem).unwrap_err();
        assert!(matches!(
            error.inner(),
            SolverError::UnknownVariable(v) if v.as_str() == "ghost"
        ));
    }

    fn chain_problem() -> Problem<i64> {
        // a != b and a != c, with a about to be assigned.
        Problem::new(
            vec![var("a"), var("b"), var("c")],
            im::hashmap! {
                var("a") => domain([1]),
                var("b") => domain([1, 2]),
                var("c") => domain([1, 2, 3]),
            },
            vec![
                Constraint::binary("a", "b", |x, y| x != y),
                Constraint::binary("a", "c", |x, y| x != y),
            ],
        )
    }

    #[test]
    fn forward_check_narrows_neighbours_and_counts_each_narrowing() {
        let problem = chain_problem();
        let mut domains: Domains<i64> = problem.domains.clone();
        domains.remove(&var("a"));
        let mut stats = SearchStats::default();

        assert!(forward_check(&problem, &var("a"), &1, &mut domains, &mut stats));
        assert_eq!(domains[&var("b")], domain([2]));
        assert_eq!(domains[&var("c")], domain([2, 3]));
        assert_eq!(stats.prunings, 2);
    }

    #[test]
    fn forward_check_fails_fast_and_leaves_the_emptied_domain_unwritten() {
        let problem = Problem::new(
            vec![var("a"), var("b"), var("c")],
            im::hashmap! {
                var("a") => domain([5]),
                var("b") => domain([1, 5]),
                var("c") => domain([5]),
            },
            vec![
                Constraint::binary("a", "b", |x, y| x != y),
                Constraint::binary("a", "c", |x, y| x != y),
            ],
        );
        let mut domains: Domains<i64> = problem.domains.clone();
        domains.remove(&var("a"));
        let mut stats = SearchStats::default();

        assert!(!forward_check(&problem, &var("a"), &5, &mut domains, &mut stats));
        // The narrowing of `b` stays; the wipeout on `c` is not written back.
        assert_eq!(domains[&var("b")], domain([1]));
        assert_eq!(domains[&var("c")], domain([5]));
        assert_eq!(stats.prunings, 1);
    }

    #[test]
    fn forward_check_skips_constraints_whose_other_endpoint_is_assigned() {
        let problem = chain_problem();
        let mut domains: Domains<i64> = problem.domains.clone();
        domains.remove(&var("a"));
        domains.remove(&var("b"));
        let mut stats = SearchStats::default();

        assert!(forward_check(&problem, &var("a"), &1, &mut domains, &mut stats));
        assert!(!domains.contains_key(&var("b")));
        assert_eq!(domains[&var("c")], domain([2, 3]));
        assert_eq!(stats.prunings, 1);
    }

    #[test]
    fn forward_check_counts_nothing_when_no_value_is_removed() {
        let problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([1]),
                var("b") => domain([2, 3]),
            },
            vec![Constraint::binary("a", "b", |x, y| x != y)],
        );
        let mut domains: Domains<i64> = problem.domains.clone();
        domains.remove(&var("a"));
        let mut stats = SearchStats::default();

        assert!(forward_check(&problem, &var("a"), &1, &mut domains, &mut stats));
        assert_eq!(domains[&var("b")], domain([2, 3]));
        assert_eq!(stats.prunings, 0);
    }
}
