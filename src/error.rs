use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A precondition violation in the model or in prune/restore bookkeeping.
///
/// These are programmer errors, not search outcomes: a domain wipeout or an
/// unsatisfiable instance is reported through the propagation result, never
/// through this type. Offending values are captured in their `Debug` form so
/// the error type stays independent of the model's value type.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("domain of `{variable}` contains duplicate value {value}")]
    DuplicateDomainValue { variable: String, value: String },

    #[error("constraint `{constraint}` references unknown variable id {variable}")]
    UnknownVariable { constraint: String, variable: usize },

    #[error("constraint `{constraint}` expects tuples of arity {expected}, got {actual}")]
    TupleArity {
        constraint: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "constraint `{constraint}` has a tuple value {value} outside the original domain of `{variable}`"
    )]
    ValueOutsideDomain {
        constraint: String,
        variable: String,
        value: String,
    },

    #[error("cannot prune {value}: not in the current domain of `{variable}`")]
    PruneAbsentValue { variable: String, value: String },

    #[error("cannot restore {value}: not currently pruned from `{variable}`")]
    RestoreUnprunedValue { variable: String, value: String },

    #[error("cannot assign {value}: not in the current domain of `{variable}`")]
    AssignOutsideDomain { variable: String, value: String },

    #[error("variable `{variable}` is already assigned")]
    AlreadyAssigned { variable: String },

    #[error("variable `{variable}` is not assigned")]
    NotAssigned { variable: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Model: {inner}\n{backtrace}")]
    Model {
        inner: Box<ModelError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ModelError> for Error {
    fn from(inner: ModelError) -> Self {
        Error::Model {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
