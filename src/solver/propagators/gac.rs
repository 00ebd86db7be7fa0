use tracing::debug;

use crate::{
    error::Result,
    solver::{
        csp::Csp,
        engine::VariableId,
        propagators::{Propagation, Propagator},
        stats::SearchStats,
        value::ValueEquality,
        work_list::WorkList,
    },
};

/// Generalized arc consistency.
///
/// Maintains a worklist of constraints to (re)check, seeded with every
/// constraint on the initial call or with the constraints touching the
/// newly assigned variable afterwards. Popping a constraint prunes every
/// unsupported value of each of its unassigned scope variables; any prune
/// re-enqueues all constraints touching the pruned variable, so pruning
/// cascades transitively until the worklist drains (fixpoint) or a domain
/// wipes out.
///
/// At fixpoint, every value remaining in every unassigned variable's domain
/// has support in every constraint touching that variable — strictly
/// stronger than forward checking.
#[derive(Debug, Clone, Default)]
pub struct GeneralizedArcConsistency;

impl<V: ValueEquality> Propagator<V> for GeneralizedArcConsistency {
    fn name(&self) -> &'static str {
        "gac"
    }

    fn propagate(
        &self,
        csp: &mut Csp<V>,
        new_var: Option<VariableId>,
        stats: &mut SearchStats,
    ) -> Result<Propagation<V>> {
        let mut worklist = WorkList::new();
        match new_var {
            None => {
                for cid in 0..csp.num_cons() {
                    worklist.push_back(cid);
                }
            }
            Some(v) => {
                for &cid in csp.cons_with_var(v) {
                    worklist.push_back(cid);
                }
            }
        }

        let mut pruned = Vec::new();
        while let Some(cid) = worklist.pop_front() {
            for vid in csp.con(cid).unassigned_vars(csp) {
                let mut pruned_here = false;
                for value in csp.var(vid).cur_domain() {
                    stats.on_check(cid);
                    if !csp.con(cid).has_support(csp, vid, &value) {
                        csp.var_mut(vid).prune_value(&value)?;
                        stats.on_prune(cid);
                        pruned.push((vid, value));
                        pruned_here = true;
                    }
                }
                if csp.var(vid).cur_domain_size() == 0 {
                    debug!(variable = csp.var(vid).name(), "arc consistency wiped out a domain");
                    return Ok(Propagation::dead_end(pruned));
                }
                if pruned_here {
                    for &dep in csp.cons_with_var(vid) {
                        worklist.push_back(dep);
                    }
                }
            }
        }
        Ok(Propagation::consistent(pruned))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::TableConstraint,
        propagators::test_support::{domain_snapshot, not_equal_chain},
        variable::Variable,
    };

    #[test]
    fn pruning_cascades_through_the_constraint_graph() {
        let mut csp = not_equal_chain();
        // Shrink b to {2}. Enforcing the first constraint prunes nothing
        // until b's own arcs run: 2 leaves both neighbours' domains.
        csp.var_mut(1).prune_value(&1).unwrap();
        csp.var_mut(1).prune_value(&3).unwrap();
        let mut stats = SearchStats::default();
        let prop = GeneralizedArcConsistency
            .propagate(&mut csp, None, &mut stats)
            .unwrap();
        assert!(prop.consistent);
        assert_eq!(csp.var(0).cur_domain(), vec![1, 3]);
        assert_eq!(csp.var(2).cur_domain(), vec![1, 3]);
        assert_eq!(prop.pruned.len(), 2);
    }

    #[test]
    fn fixpoint_leaves_every_remaining_value_supported() {
        let mut csp = not_equal_chain();
        csp.var_mut(0).assign(&1).unwrap();
        let mut stats = SearchStats::default();
        let prop = GeneralizedArcConsistency
            .propagate(&mut csp, Some(0), &mut stats)
            .unwrap();
        assert!(prop.consistent);
        for (vid, var) in csp.all_vars() {
            if var.is_assigned() {
                continue;
            }
            for value in var.cur_domain() {
                for &cid in csp.cons_with_var(vid) {
                    assert!(
                        csp.con(cid).has_support(&csp, vid, &value),
                        "value {value} of variable {vid} lacks support under constraint {cid}",
                    );
                }
            }
        }
    }

    #[test]
    fn wipeout_reports_all_prunes_for_restoration() {
        // x != y over a shared singleton domain is unsatisfiable.
        let mut csp = Csp::new("tight");
        let x = csp.add_var(Variable::new("x", [1]).unwrap());
        let y = csp.add_var(Variable::new("y", [1]).unwrap());
        csp.add_constraint(TableConstraint::new("x != y", vec![x, y], vec![]).unwrap())
            .unwrap();
        let before = domain_snapshot(&csp);
        let mut stats = SearchStats::default();
        let prop = GeneralizedArcConsistency
            .propagate(&mut csp, None, &mut stats)
            .unwrap();
        assert!(!prop.consistent);
        // Restoring the reported prunes recovers the original domains.
        for (vid, value) in prop.pruned.iter().rev() {
            csp.var_mut(*vid).restore_value(value).unwrap();
        }
        assert_eq!(domain_snapshot(&csp), before);
    }

    #[test]
    fn subsumes_forward_checking_on_the_same_state() {
        use crate::solver::propagators::ForwardChecking;

        let mut fc_csp = not_equal_chain();
        let mut gac_csp = not_equal_chain();
        for csp in [&mut fc_csp, &mut gac_csp] {
            csp.var_mut(1).prune_value(&1).unwrap();
            csp.var_mut(1).prune_value(&3).unwrap();
        }
        let mut stats = SearchStats::default();
        let fc = ForwardChecking
            .propagate(&mut fc_csp, None, &mut stats)
            .unwrap();
        let gac = GeneralizedArcConsistency
            .propagate(&mut gac_csp, None, &mut stats)
            .unwrap();
        assert!(fc.consistent && gac.consistent);
        assert!(gac.pruned.len() >= fc.pruned.len());
    }
}
