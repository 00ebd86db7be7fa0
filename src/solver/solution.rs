use crate::{
    error::{ModelError, Result},
    solver::{csp::Csp, engine::VariableId, value::ValueEquality},
};

/// A complete assignment, snapshotted off a solved [`Csp`].
///
/// The solved CSP also keeps its assignments readable through each
/// variable, but a `Solution` survives resetting or re-solving the problem.
#[derive(Debug, Clone)]
pub struct Solution<V: ValueEquality> {
    assignments: Vec<(String, V)>,
}

impl<V: ValueEquality> Solution<V> {
    /// Captures the current assignment of every variable. Fails with a
    /// [`ModelError`] if any variable is unassigned.
    pub fn snapshot(csp: &Csp<V>) -> Result<Self> {
        let mut assignments = Vec::with_capacity(csp.num_vars());
        for (_, var) in csp.all_vars() {
            let value = var.assigned_value().ok_or_else(|| ModelError::NotAssigned {
                variable: var.name().to_string(),
            })?;
            assignments.push((var.name().to_string(), value.clone()));
        }
        Ok(Self { assignments })
    }

    /// The assigned value of a variable, by id.
    pub fn value(&self, var: VariableId) -> &V {
        &self.assignments[var].1
    }

    /// The assigned value of a variable, by name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.assignments.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<V: ValueEquality> PartialEq for Solution<V> {
    fn eq(&self, other: &Self) -> bool {
        self.assignments == other.assignments
    }
}

impl<V: ValueEquality> Eq for Solution<V> {}
