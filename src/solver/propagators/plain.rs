use crate::{
    error::Result,
    solver::{
        csp::Csp,
        engine::VariableId,
        propagators::{Propagation, Propagator},
        stats::SearchStats,
        value::ValueEquality,
    },
};

/// No propagation at all: only rejects assignments that violate a fully
/// instantiated constraint.
///
/// Before the first assignment there is nothing to do. After an assignment,
/// every constraint touching the new variable whose scope is now fully
/// assigned is checked against its table. This propagator never prunes, so
/// its prune log is always empty.
#[derive(Debug, Clone, Default)]
pub struct PlainBacktracking;

impl<V: ValueEquality> Propagator<V> for PlainBacktracking {
    fn name(&self) -> &'static str {
        "plain-backtracking"
    }

    fn propagate(
        &self,
        csp: &mut Csp<V>,
        new_var: Option<VariableId>,
        stats: &mut SearchStats,
    ) -> Result<Propagation<V>> {
        let Some(new_var) = new_var else {
            return Ok(Propagation::consistent(Vec::new()));
        };
        for &cid in csp.cons_with_var(new_var) {
            let con = csp.con(cid);
            let mut values = Vec::with_capacity(con.scope().len());
            for &vid in con.scope() {
                match csp.var(vid).assigned_value() {
                    Some(value) => values.push(value.clone()),
                    None => break,
                }
            }
            if values.len() < con.scope().len() {
                continue;
            }
            stats.on_check(cid);
            if !con.check(&values)? {
                return Ok(Propagation::dead_end(Vec::new()));
            }
        }
        Ok(Propagation::consistent(Vec::new()))
    }
}
