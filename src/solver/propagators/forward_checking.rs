use tracing::debug;

use crate::{
    error::Result,
    solver::{
        csp::Csp,
        engine::{ConstraintId, VariableId},
        propagators::{Propagation, Propagator},
        stats::SearchStats,
        value::ValueEquality,
    },
};

/// Forward checking: prunes through constraints with exactly one unassigned
/// variable.
///
/// For each such frontier constraint, every value of the sole open variable
/// that has no support is pruned. Only constraints touching the newly
/// assigned variable are examined (all constraints on the initial call) —
/// pruning does not cascade, which is what separates forward checking from
/// full arc consistency.
#[derive(Debug, Clone, Default)]
pub struct ForwardChecking;

impl<V: ValueEquality> Propagator<V> for ForwardChecking {
    fn name(&self) -> &'static str {
        "forward-checking"
    }

    fn propagate(
        &self,
        csp: &mut Csp<V>,
        new_var: Option<VariableId>,
        stats: &mut SearchStats,
    ) -> Result<Propagation<V>> {
        let cids: Vec<ConstraintId> = match new_var {
            None => (0..csp.num_cons()).collect(),
            Some(v) => csp.cons_with_var(v).to_vec(),
        };

        let mut pruned = Vec::new();
        for cid in cids {
            let open = csp.con(cid).unassigned_vars(csp);
            let &[vid] = open.as_slice() else {
                continue;
            };
            for value in csp.var(vid).cur_domain() {
                stats.on_check(cid);
                if !csp.con(cid).has_support(csp, vid, &value) {
                    csp.var_mut(vid).prune_value(&value)?;
                    stats.on_prune(cid);
                    pruned.push((vid, value));
                }
            }
            if csp.var(vid).cur_domain_size() == 0 {
                debug!(variable = csp.var(vid).name(), "forward check wiped out a domain");
                return Ok(Propagation::dead_end(pruned));
            }
        }
        Ok(Propagation::consistent(pruned))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::propagators::test_support::{domain_snapshot, not_equal_chain};

    #[test]
    fn prunes_the_assigned_value_from_the_frontier_variable() {
        let mut csp = not_equal_chain();
        csp.var_mut(0).assign(&1).unwrap();
        let mut stats = SearchStats::default();
        let prop = ForwardChecking
            .propagate(&mut csp, Some(0), &mut stats)
            .unwrap();
        assert!(prop.consistent);
        assert_eq!(prop.pruned, vec![(1, 1)]);
        assert_eq!(csp.var(1).cur_domain(), vec![2, 3]);
        // c is two constraints away; forward checking does not reach it.
        assert_eq!(csp.var(2).cur_domain(), vec![1, 2, 3]);
    }

    #[test]
    fn skips_constraints_with_more_than_one_open_variable() {
        let mut csp = not_equal_chain();
        let before = domain_snapshot(&csp);
        let mut stats = SearchStats::default();
        let prop = ForwardChecking
            .propagate(&mut csp, None, &mut stats)
            .unwrap();
        assert!(prop.consistent);
        assert!(prop.pruned.is_empty());
        assert_eq!(domain_snapshot(&csp), before);
    }

    #[test]
    fn wipeout_reports_the_prunes_made_so_far() {
        let mut csp = not_equal_chain();
        // Leave b only the value 2, then assign a = 2: b wipes out.
        csp.var_mut(1).prune_value(&1).unwrap();
        csp.var_mut(1).prune_value(&3).unwrap();
        csp.var_mut(0).assign(&2).unwrap();
        let mut stats = SearchStats::default();
        let prop = ForwardChecking
            .propagate(&mut csp, Some(0), &mut stats)
            .unwrap();
        assert!(!prop.consistent);
        assert_eq!(prop.pruned, vec![(1, 2)]);
        assert_eq!(csp.var(1).cur_domain_size(), 0);
    }

    #[test]
    fn initial_call_handles_singleton_peers() {
        let mut csp = not_equal_chain();
        // Shrink a to a singleton without assigning it: the a != b frontier
        // has one open variable only once a is assigned, so the initial
        // call must not touch b yet.
        csp.var_mut(0).prune_value(&2).unwrap();
        csp.var_mut(0).prune_value(&3).unwrap();
        let mut stats = SearchStats::default();
        let prop = ForwardChecking
            .propagate(&mut csp, None, &mut stats)
            .unwrap();
        assert!(prop.consistent);
        assert!(prop.pruned.is_empty());
    }
}
