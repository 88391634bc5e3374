use crate::solver::{
    constraint::{BinaryConstraint, Constraint},
    domain::Domains,
    problem::Problem,
    value::Value,
    variable::Variable,
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic<V: Value> {
    /// Given the variable being branched on, returns its remaining candidate
    /// values in the order they should be tried.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem being solved, consulted for its constraints.
    /// * `variable`: The variable about to be assigned.
    /// * `domains`: The current domains of the *unassigned* variables only.
    ///
    /// # Returns
    ///
    /// The values of `variable`'s current domain, ordered; empty if the
    /// variable has no domain entry.
    fn order_values(&self, problem: &Problem<V>, variable: &Variable, domains: &Domains<V>)
        -> Vec<V>;
}

/// A simple heuristic that tries values in ascending order.
pub struct AscendingValueHeuristic;

impl<V: Value> ValueOrderingHeuristic<V> for AscendingValueHeuristic {
    fn order_values(
        &self,
        problem: &Problem<V>,
        variable: &Variable,
        domains: &Domains<V>,
    ) -> Vec<V> {
        let _ = problem;
        let Some(domain) = domains.get(variable) else {
            return Vec::new();
        };
        let mut values: Vec<V> = domain.iter().cloned().collect();
        values.sort();
        values
    }
}

/// A heuristic that tries the Least Constraining Value (LCV) first.
///
/// Each candidate value is scored by how many values would survive in the
/// domains of the variable's unassigned neighbours if it were chosen, summed
/// over the binary constraints touching the variable. Higher scores leave
/// the neighbours more room, so values are tried in descending score order.
/// Ties are broken by ascending value, which keeps the ordering fully
/// deterministic.
pub struct LeastConstrainingValueHeuristic;

impl<V: Value> ValueOrderingHeuristic<V> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        problem: &Problem<V>,
        variable: &Variable,
        domains: &Domains<V>,
    ) -> Vec<V> {
        let Some(own_domain) = domains.get(variable) else {
            return Vec::new();
        };

        let related: Vec<&BinaryConstraint<V>> = problem
            .constraints
            .iter()
            .filter_map(|constraint| match constraint {
                Constraint::Binary(binary) if binary.other(variable).is_some() => Some(binary),
                _ => None,
            })
            .collect();

        let mut scored: Vec<(V, usize)> = own_domain
            .iter()
            .map(|value| {
                let surviving: usize = related
                    .iter()
                    .filter_map(|binary| {
                        let other = binary.other(variable)?;
                        // An absent entry means the neighbour is assigned
                        // already; it contributes nothing to the score.
                        let neighbour = domains.get(other)?;
                        Some(
                            neighbour
                                .iter()
                                .filter(|candidate| binary.holds_with(variable, value, candidate))
                                .count(),
                        )
                    })
                    .sum();
                (value.clone(), surviving)
            })
            .collect();

        scored.sort_by(|(value_a, score_a), (value_b, score_b)| {
            score_b.cmp(score_a).then_with(|| value_a.cmp(value_b))
        });

        scored.into_iter().map(|(value, _)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{AscendingValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
    use crate::solver::{
        constraint::Constraint,
        domain::{domain, Domains},
        problem::Problem,
        variable::Variable,
    };

    fn var(name: &str) -> Variable {
        Variable::from(name)
    }

    #[test]
    fn ascending_sorts_the_domain() {
        let problem = Problem::new(
            vec![var("a")],
            im::hashmap! { var("a") => domain([3, 1, 2]) },
            Vec::new(),
        );

        let heuristic = AscendingValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &var("a"), &problem.domains),
            vec![1, 2, 3]
        );
        assert!(heuristic
            .order_values(&problem, &var("missing"), &problem.domains)
            .is_empty());
    }

    #[test]
    fn lcv_tries_the_least_constraining_value_first() {
        // Assigning a = 2 would strip b's only value, so 2 goes last.
        let problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([1, 2, 3]),
                var("b") => domain([2]),
            },
            vec![Constraint::binary("a", "b", |x, y| x != y)],
        );

        let heuristic = LeastConstrainingValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &var("a"), &problem.domains),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn lcv_sums_scores_across_all_touching_constraints() {
        // a = 1 collides with b's single value; a = 2 collides with nothing.
        let problem = Problem::new(
            vec![var("a"), var("b"), var("c")],
            im::hashmap! {
                var("a") => domain([1, 2]),
                var("b") => domain([1]),
                var("c") => domain([1, 2]),
            },
            vec![
                Constraint::binary("a", "b", |x, y| x != y),
                Constraint::binary("a", "c", |x, y| x != y),
            ],
        );

        let heuristic = LeastConstrainingValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &var("a"), &problem.domains),
            vec![2, 1]
        );
    }

    #[test]
    fn lcv_falls_back_to_ascending_order_when_scores_tie() {
        let problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([3, 1, 2]),
                var("b") => domain([7, 8]),
            },
            vec![Constraint::binary("a", "b", |x, y| x != y)],
        );

        let heuristic = LeastConstrainingValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &var("a"), &problem.domains),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn lcv_ignores_neighbours_that_are_already_assigned() {
        let problem = Problem::new(
            vec![var("a"), var("b")],
            im::hashmap! {
                var("a") => domain([2, 1]),
                var("b") => domain([1]),
            },
            vec![Constraint::binary("a", "b", |x, y| x != y)],
        );
        let mut domains: Domains<i64> = problem.domains.clone();
        domains.remove(&var("b"));

        let heuristic = LeastConstrainingValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &var("a"), &domains),
            vec![1, 2]
        );
    }
}
