//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{csp::Csp, engine::VariableId, value::ValueEquality};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the solver should branch on next. A good heuristic
/// can dramatically improve solver performance.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Selects the next variable to be assigned.
    ///
    /// Only unassigned variables are candidates; returns `None` once every
    /// variable is assigned.
    fn select_variable(&self, csp: &Csp<V>) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable, in
/// construction order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(&self, csp: &Csp<V>) -> Option<VariableId> {
        csp.all_vars()
            .find(|(_, var)| !var.is_assigned())
            .map(|(vid, _)| vid)
    }
}

/// A heuristic that selects an unassigned variable at random.
pub struct RandomVariableHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for RandomVariableHeuristic {
    fn select_variable(&self, csp: &Csp<V>) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        csp.all_vars()
            .filter(|(_, var)| !var.is_assigned())
            .map(|(vid, _)| vid)
            .choose(&mut rand::thread_rng())
    }
}

/// A heuristic that selects the variable with the Minimum Remaining Values
/// (MRV) in its current domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable. Already-assigned variables are never candidates, even though
/// their visible domain is a singleton. In case of a tie, the variable
/// first added to the problem is chosen to ensure determinism.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, csp: &Csp<V>) -> Option<VariableId> {
        csp.all_vars()
            .filter(|(_, var)| !var.is_assigned())
            // Primary criterion: domain size (ascending)
            // Secondary criterion: variable id (ascending, for tie-breaking)
            .min_by_key(|(vid, var)| (var.cur_domain_size(), *vid))
            .map(|(vid, _)| vid)
    }
}
