use crate::{
    error::{ModelError, Result},
    solver::{
        constraint::TableConstraint,
        engine::{ConstraintId, VariableId},
        value::ValueEquality,
        variable::Variable,
    },
};

/// A constraint satisfaction problem: the variables, the constraints, and an
/// index from each variable to the constraints whose scope contains it.
///
/// Variables and constraints are added at model-build time and never removed.
/// During search only the variables' current domains and assignments mutate,
/// and every such mutation is undone when the branch that made it is
/// abandoned, so one `Csp` value serves any number of solve calls.
///
/// The `&mut Csp` borrow taken by propagation and search is the ownership
/// rule for shared state: exactly one search can mutate a given problem at a
/// time, enforced by the borrow checker rather than by convention.
#[derive(Debug, Clone)]
pub struct Csp<V: ValueEquality> {
    name: String,
    vars: Vec<Variable<V>>,
    cons: Vec<TableConstraint<V>>,
    cons_of: Vec<Vec<ConstraintId>>,
}

impl<V: ValueEquality> Csp<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            cons: Vec::new(),
            cons_of: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a variable, returning its id. Ids are dense and stable: the
    /// n-th added variable has id n.
    pub fn add_var(&mut self, var: Variable<V>) -> VariableId {
        self.vars.push(var);
        self.cons_of.push(Vec::new());
        self.vars.len() - 1
    }

    /// Adds a constraint, validating it against the model.
    ///
    /// Fails with a [`ModelError`] if the scope references an unknown
    /// variable or a tuple draws a value from outside the corresponding
    /// variable's original domain.
    pub fn add_constraint(&mut self, con: TableConstraint<V>) -> Result<ConstraintId> {
        for &vid in con.scope() {
            if vid >= self.vars.len() {
                return Err(ModelError::UnknownVariable {
                    constraint: con.name().to_string(),
                    variable: vid,
                }
                .into());
            }
        }
        for pos in 0..con.scope().len() {
            let vid = con.scope()[pos];
            let var = &self.vars[vid];
            for value in con.projection(pos) {
                if !var.original_domain().contains(value) {
                    return Err(ModelError::ValueOutsideDomain {
                        constraint: con.name().to_string(),
                        variable: var.name().to_string(),
                        value: format!("{value:?}"),
                    }
                    .into());
                }
            }
        }
        let cid = self.cons.len();
        for &vid in con.scope() {
            self.cons_of[vid].push(cid);
        }
        self.cons.push(con);
        Ok(cid)
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn num_cons(&self) -> usize {
        self.cons.len()
    }

    pub fn var(&self, id: VariableId) -> &Variable<V> {
        &self.vars[id]
    }

    pub fn var_mut(&mut self, id: VariableId) -> &mut Variable<V> {
        &mut self.vars[id]
    }

    pub fn con(&self, id: ConstraintId) -> &TableConstraint<V> {
        &self.cons[id]
    }

    pub fn all_vars(&self) -> impl Iterator<Item = (VariableId, &Variable<V>)> {
        self.vars.iter().enumerate()
    }

    pub fn all_cons(&self) -> impl Iterator<Item = (ConstraintId, &TableConstraint<V>)> {
        self.cons.iter().enumerate()
    }

    /// The constraints whose scope contains `var`, via the index built at
    /// model-construction time.
    pub fn cons_with_var(&self, var: VariableId) -> &[ConstraintId] {
        &self.cons_of[var]
    }

    /// Resets every variable to its original domain and clears all
    /// assignments, returning the problem to its freshly built state.
    pub fn reset(&mut self) {
        for var in &mut self.vars {
            var.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn constraint_index_is_consistent_with_scopes() {
        let mut csp = Csp::new("index");
        let a = csp.add_var(Variable::new("a", [1, 2]).unwrap());
        let b = csp.add_var(Variable::new("b", [1, 2]).unwrap());
        let c = csp.add_var(Variable::new("c", [1, 2]).unwrap());

        let ab = csp
            .add_constraint(
                TableConstraint::new("ab", vec![a, b], vec![vec![1, 2], vec![2, 1]]).unwrap(),
            )
            .unwrap();
        let bc = csp
            .add_constraint(
                TableConstraint::new("bc", vec![b, c], vec![vec![1, 2], vec![2, 1]]).unwrap(),
            )
            .unwrap();

        assert_eq!(csp.cons_with_var(a), &[ab]);
        assert_eq!(csp.cons_with_var(b), &[ab, bc]);
        assert_eq!(csp.cons_with_var(c), &[bc]);
        assert_eq!(csp.num_vars(), 3);
        assert_eq!(csp.num_cons(), 2);
    }

    #[test]
    fn unknown_scope_variable_is_rejected() {
        let mut csp = Csp::new("bad-scope");
        let a = csp.add_var(Variable::new("a", [1, 2]).unwrap());
        let con = TableConstraint::new("oops", vec![a, 7], vec![vec![1, 2]]).unwrap();
        assert!(csp.add_constraint(con).is_err());
    }

    #[test]
    fn tuple_value_outside_original_domain_is_rejected() {
        let mut csp = Csp::new("bad-tuple");
        let a = csp.add_var(Variable::new("a", [1, 2]).unwrap());
        let b = csp.add_var(Variable::new("b", [1, 2]).unwrap());
        let con = TableConstraint::new("oops", vec![a, b], vec![vec![1, 9]]).unwrap();
        assert!(csp.add_constraint(con).is_err());
    }

    #[test]
    fn reset_returns_the_problem_to_its_built_state() {
        let mut csp = Csp::new("reset");
        let a = csp.add_var(Variable::new("a", [1, 2, 3]).unwrap());
        csp.var_mut(a).prune_value(&2).unwrap();
        csp.var_mut(a).assign(&1).unwrap();
        csp.reset();
        assert!(!csp.var(a).is_assigned());
        assert_eq!(csp.var(a).cur_domain(), vec![1, 2, 3]);
    }
}
