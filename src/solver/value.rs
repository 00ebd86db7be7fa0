use serde::{Deserialize, Serialize};

/// The base trait for any value that can appear in a variable's domain.
///
/// This trait establishes the minimum requirements for a value: it must be
/// cloneable, debuggable, equatable, and hashable. This is a marker trait,
/// so any type that satisfies these bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// A concrete enum providing a stock value type for the common cases.
///
/// Problem-specific value types can be used directly wherever a
/// [`ValueEquality`] type is expected; `StandardValue` exists so that
/// integer and boolean domains do not need a bespoke wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardValue {
    /// A 64-bit integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
}

impl StandardValue {
    /// Returns the contained integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StandardValue::Int(i) => Some(*i),
            StandardValue::Bool(_) => None,
        }
    }
}

impl From<i64> for StandardValue {
    fn from(i: i64) -> Self {
        StandardValue::Int(i)
    }
}

impl From<bool> for StandardValue {
    fn from(b: bool) -> Self {
        StandardValue::Bool(b)
    }
}
