use std::collections::{HashMap, HashSet};

use crate::{
    error::{ModelError, Result},
    solver::{
        csp::Csp,
        engine::VariableId,
        value::ValueEquality,
    },
};

/// A human-readable summary of a constraint, used in statistics output.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// An extensional (table) constraint over an ordered scope of variables.
///
/// The constraint is defined by explicit enumeration: a tuple of values, one
/// per scope position, satisfies the constraint iff it appears in the table.
/// Alongside the table, the constraint keeps a support index mapping each
/// (scope position, value) pair to the tuples containing that value at that
/// position. [`TableConstraint::has_support`] walks only those candidate
/// tuples, checking each against the *current* domains of the scope — the
/// table is fixed at construction, but support is always evaluated against
/// the mutable state of the variables.
#[derive(Debug, Clone)]
pub struct TableConstraint<V: ValueEquality> {
    name: String,
    scope: Vec<VariableId>,
    tuples: Vec<Vec<V>>,
    tuple_set: HashSet<Vec<V>>,
    supports: HashMap<(usize, V), Vec<usize>>,
}

impl<V: ValueEquality> TableConstraint<V> {
    /// Creates a table constraint from its scope and satisfying tuples.
    ///
    /// Every tuple must have the same arity as the scope; a mismatch is a
    /// [`ModelError`]. Tuple values are validated against the variables'
    /// original domains when the constraint is added to a
    /// [`Csp`](crate::solver::csp::Csp).
    pub fn new(
        name: impl Into<String>,
        scope: Vec<VariableId>,
        tuples: Vec<Vec<V>>,
    ) -> Result<Self> {
        let name = name.into();
        for tuple in &tuples {
            if tuple.len() != scope.len() {
                return Err(ModelError::TupleArity {
                    constraint: name,
                    expected: scope.len(),
                    actual: tuple.len(),
                }
                .into());
            }
        }
        let tuple_set: HashSet<Vec<V>> = tuples.iter().cloned().collect();
        let mut supports: HashMap<(usize, V), Vec<usize>> = HashMap::new();
        for (t, tuple) in tuples.iter().enumerate() {
            for (pos, value) in tuple.iter().enumerate() {
                supports.entry((pos, value.clone())).or_default().push(t);
            }
        }
        Ok(Self {
            name,
            scope,
            tuples,
            tuple_set,
            supports,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered scope. Tuple positions align with this ordering.
    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    /// Distinct values appearing at scope position `pos` across the table.
    pub fn projection(&self, pos: usize) -> impl Iterator<Item = &V> {
        self.supports
            .keys()
            .filter(move |(p, _)| *p == pos)
            .map(|(_, v)| v)
    }

    pub fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .scope
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "TableConstraint".to_string(),
            description: format!("{}({}) [{} tuples]", self.name, vars_str, self.tuples.len()),
        }
    }

    /// Whether the fully instantiated `values` tuple satisfies the
    /// constraint. Fails with a [`ModelError`] on arity mismatch.
    pub fn check(&self, values: &[V]) -> Result<bool> {
        if values.len() != self.scope.len() {
            return Err(ModelError::TupleArity {
                constraint: self.name.clone(),
                expected: self.scope.len(),
                actual: values.len(),
            }
            .into());
        }
        Ok(self.tuple_set.contains(values))
    }

    /// Whether `var = value` has support: some satisfying tuple assigns
    /// `value` to `var` and draws every other position from that variable's
    /// current domain. Returns `false` if `var` is not in the scope.
    pub fn has_support(&self, csp: &Csp<V>, var: VariableId, value: &V) -> bool {
        let Some(pos) = self.scope.iter().position(|&v| v == var) else {
            return false;
        };
        let Some(candidates) = self.supports.get(&(pos, value.clone())) else {
            return false;
        };
        candidates
            .iter()
            .any(|&t| self.tuple_is_valid(csp, &self.tuples[t]))
    }

    /// Whether every position of `tuple` is in the corresponding variable's
    /// current domain.
    fn tuple_is_valid(&self, csp: &Csp<V>, tuple: &[V]) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(&vid, value)| csp.var(vid).in_cur_domain(value))
    }

    /// Scope variables not yet assigned by the search.
    pub fn unassigned_vars(&self, csp: &Csp<V>) -> Vec<VariableId> {
        self.scope
            .iter()
            .copied()
            .filter(|&vid| !csp.var(vid).is_assigned())
            .collect()
    }

    pub fn num_unassigned(&self, csp: &Csp<V>) -> usize {
        self.scope
            .iter()
            .filter(|&&vid| !csp.var(vid).is_assigned())
            .count()
    }
}
