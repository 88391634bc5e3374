use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the search counters as a small text table, ready to print from
/// a demo or a benchmark harness.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Completeness Checks"),
        Cell::new("Backtracks"),
        Cell::new("Prunings"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.completeness_checks.to_string()),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(&stats.prunings.to_string()),
    ]));

    table.to_string()
}
