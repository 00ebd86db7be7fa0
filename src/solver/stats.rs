use std::collections::HashMap;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::{csp::Csp, engine::ConstraintId, value::ValueEquality};

/// Counters for one constraint, keyed by constraint id in [`SearchStats`].
#[derive(Debug, Default, Clone, Serialize)]
pub struct PerConstraintStats {
    /// `check` and `has_support` queries evaluated against this constraint.
    pub checks: u64,
    /// Values pruned while propagating this constraint.
    pub prunings: u64,
}

/// Counters accumulated over one solve call.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub values_pruned: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

impl SearchStats {
    pub fn on_check(&mut self, constraint_id: ConstraintId) {
        self.constraint_stats
            .entry(constraint_id)
            .or_default()
            .checks += 1;
    }

    pub fn on_prune(&mut self, constraint_id: ConstraintId) {
        self.constraint_stats
            .entry(constraint_id)
            .or_default()
            .prunings += 1;
        self.values_pruned += 1;
    }
}

/// Renders a per-constraint breakdown of the search statistics.
pub fn render_stats_table<V: ValueEquality>(stats: &SearchStats, csp: &Csp<V>) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Support Checks"),
        Cell::new("Prunings"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|(id, _)| **id);

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = csp.con(*constraint_id).descriptor();
        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.checks.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
        ]));
    }

    table.to_string()
}
