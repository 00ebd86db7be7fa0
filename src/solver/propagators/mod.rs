//! Pluggable pruning strategies invoked by the search engine.
//!
//! A propagator is called once before any assignment (`new_var = None`) to
//! establish whatever initial consistency it maintains, and then after every
//! tentative assignment with the newly assigned variable. It reports whether
//! the state is still consistent together with the exact list of values it
//! pruned, which the engine replays in reverse to restore the domains when
//! the branch is abandoned.

pub mod forward_checking;
pub mod gac;
pub mod plain;

pub use forward_checking::ForwardChecking;
pub use gac::GeneralizedArcConsistency;
pub use plain::PlainBacktracking;

use crate::{
    error::Result,
    solver::{csp::Csp, engine::VariableId, stats::SearchStats, value::ValueEquality},
};

/// The values removed from current domains by one propagation call, in the
/// order they were pruned. Owned by the search engine's call stack and used
/// solely for restoration.
pub type PruneLog<V> = Vec<(VariableId, V)>;

/// The outcome of one propagation call.
///
/// `pruned` is complete on both outcomes: a propagator that detects a dead
/// end still reports every prune it performed on the way there, so the
/// engine can restore the domains bit-for-bit.
#[derive(Debug)]
pub struct Propagation<V: ValueEquality> {
    pub consistent: bool,
    pub pruned: PruneLog<V>,
}

impl<V: ValueEquality> Propagation<V> {
    pub fn consistent(pruned: PruneLog<V>) -> Self {
        Self {
            consistent: true,
            pruned,
        }
    }

    pub fn dead_end(pruned: PruneLog<V>) -> Self {
        Self {
            consistent: false,
            pruned,
        }
    }
}

/// A constraint propagation strategy.
///
/// Implementations must never prune a value that is already absent, and
/// must record every prune exactly once in the returned log. Failure
/// (domain wipeout, violated constraint) is a normal search signal reported
/// through [`Propagation::consistent`]; `Err` is reserved for malformed
/// models.
pub trait Propagator<V: ValueEquality> {
    fn name(&self) -> &'static str;

    fn propagate(
        &self,
        csp: &mut Csp<V>,
        new_var: Option<VariableId>,
        stats: &mut SearchStats,
    ) -> Result<Propagation<V>>;
}
