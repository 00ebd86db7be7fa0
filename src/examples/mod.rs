//! Ready-made problem models built on the generic solver.
//!
//! These modules play the role of the external model builder: they only
//! construct variables and table constraints and hand back a [`Csp`]
//! (plus enough structure to read the solution out again). The solver
//! itself knows nothing about grids or maps.
//!
//! [`Csp`]: crate::solver::csp::Csp

pub mod futoshiki;
pub mod map_colouring;
