use tracing::debug;

use crate::{
    error::Result,
    solver::{
        csp::Csp,
        heuristics::variable::VariableSelectionHeuristic,
        propagators::{Propagator, PruneLog},
        solution::Solution,
        stats::SearchStats,
        value::ValueEquality,
    },
};

pub type VariableId = usize;
pub type ConstraintId = usize;

/// The depth-first backtracking search driver.
///
/// The engine owns the two strategy choices of a solve: which propagator
/// runs after each tentative assignment, and which unassigned variable is
/// branched on next. Values are tried in current-domain order.
///
/// Each propagation call returns the exact prunes it performed; the engine
/// is the sole owner of those logs and replays them in reverse when the
/// branch is abandoned, so the CSP's domains are restored bit-for-bit on
/// every backtrack. A failed solve leaves the problem exactly as it was
/// given; a successful solve leaves the winning assignment in place
/// (readable through each variable) and also returns a [`Solution`]
/// snapshot.
pub struct BacktrackingSearch<V: ValueEquality> {
    propagator: Box<dyn Propagator<V>>,
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
}

impl<V: ValueEquality> BacktrackingSearch<V> {
    pub fn new(
        propagator: Box<dyn Propagator<V>>,
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    ) -> Self {
        Self {
            propagator,
            variable_heuristic,
        }
    }

    /// Searches for one satisfying assignment.
    ///
    /// Returns `Ok((None, stats))` when the search space is exhausted
    /// without a solution; that is the only way unsatisfiability is
    /// reported. `Err` means the model itself is malformed.
    pub fn solve(&self, csp: &mut Csp<V>) -> Result<(Option<Solution<V>>, SearchStats)> {
        let mut stats = SearchStats::default();

        // Initial propagation, before any assignment has been made.
        let root = self.propagator.propagate(csp, None, &mut stats)?;
        if !root.consistent {
            debug!(csp = csp.name(), "contradiction at the root");
            restore(csp, &root.pruned)?;
            return Ok((None, stats));
        }

        if self.search(csp, &mut stats)? {
            let solution = Solution::snapshot(csp)?;
            Ok((Some(solution), stats))
        } else {
            restore(csp, &root.pruned)?;
            Ok((None, stats))
        }
    }

    fn search(&self, csp: &mut Csp<V>, stats: &mut SearchStats) -> Result<bool> {
        stats.nodes_visited += 1;

        let Some(vid) = self.variable_heuristic.select_variable(csp) else {
            // Every variable is assigned and no propagator objected.
            return Ok(true);
        };

        for value in csp.var(vid).cur_domain() {
            csp.var_mut(vid).assign(&value)?;
            let prop = self.propagator.propagate(csp, Some(vid), stats)?;
            if prop.consistent && self.search(csp, stats)? {
                return Ok(true);
            }
            restore(csp, &prop.pruned)?;
            csp.var_mut(vid).unassign()?;
            stats.backtracks += 1;
        }

        debug!(variable = csp.var(vid).name(), "values exhausted, backtracking");
        Ok(false)
    }

    /// Enumerates every satisfying assignment.
    ///
    /// The search runs to exhaustion, recording a snapshot at each complete
    /// assignment and then backtracking as if it had failed. The CSP is
    /// returned to the exact state it was given in.
    pub fn solve_all(&self, csp: &mut Csp<V>) -> Result<(Vec<Solution<V>>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut found = Vec::new();

        let root = self.propagator.propagate(csp, None, &mut stats)?;
        if root.consistent {
            self.search_all(csp, &mut stats, &mut found)?;
        }
        restore(csp, &root.pruned)?;
        Ok((found, stats))
    }

    fn search_all(
        &self,
        csp: &mut Csp<V>,
        stats: &mut SearchStats,
        found: &mut Vec<Solution<V>>,
    ) -> Result<()> {
        stats.nodes_visited += 1;

        let Some(vid) = self.variable_heuristic.select_variable(csp) else {
            found.push(Solution::snapshot(csp)?);
            return Ok(());
        };

        for value in csp.var(vid).cur_domain() {
            csp.var_mut(vid).assign(&value)?;
            let prop = self.propagator.propagate(csp, Some(vid), stats)?;
            if prop.consistent {
                self.search_all(csp, stats, found)?;
            }
            restore(csp, &prop.pruned)?;
            csp.var_mut(vid).unassign()?;
            stats.backtracks += 1;
        }
        Ok(())
    }
}

/// Replays a prune log in reverse, exactly undoing one propagation call.
fn restore<V: ValueEquality>(csp: &mut Csp<V>, pruned: &PruneLog<V>) -> Result<()> {
    for (vid, value) in pruned.iter().rev() {
        csp.var_mut(*vid).restore_value(value)?;
    }
    Ok(())
}
