//! Tabula is a finite-domain constraint satisfaction problem (CSP) engine.
//!
//! A problem is modelled as a set of variables with discrete value domains
//! and a set of [`TableConstraint`]s — extensional relations listing the
//! tuples that satisfy them — and solved by depth-first backtracking search
//! augmented with pluggable constraint propagation.
//!
//! # Core Concepts
//!
//! - **[`Csp`]**: owns the variables and constraints and indexes the
//!   constraints by the variables they touch.
//! - **[`Propagator`]**: a pruning strategy invoked as variables are
//!   assigned. Three are provided, in increasing strength:
//!   [`PlainBacktracking`], [`ForwardChecking`], and
//!   [`GeneralizedArcConsistency`].
//! - **[`BacktrackingSearch`]**: the search driver, parameterised by a
//!   propagator and a variable-ordering heuristic such as
//!   [`MinimumRemainingValuesHeuristic`].
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `a != b` where `a` can be `1` or
//! `2`, and `b` can only be `1`. The solver should deduce that `a` must be
//! `2`.
//!
//! ```
//! use tabula::solver::constraint::TableConstraint;
//! use tabula::solver::csp::Csp;
//! use tabula::solver::engine::BacktrackingSearch;
//! use tabula::solver::heuristics::variable::MinimumRemainingValuesHeuristic;
//! use tabula::solver::propagators::ForwardChecking;
//! use tabula::solver::variable::Variable;
//!
//! let mut csp = Csp::new("two-variable");
//! let a = csp.add_var(Variable::new("a", [1i64, 2]).unwrap());
//! let b = csp.add_var(Variable::new("b", [1i64]).unwrap());
//!
//! // a != b, enumerated over the two original domains.
//! csp.add_constraint(
//!     TableConstraint::new("a != b", vec![a, b], vec![vec![2, 1]]).unwrap(),
//! )
//! .unwrap();
//!
//! let engine = BacktrackingSearch::new(
//!     Box::new(ForwardChecking),
//!     Box::new(MinimumRemainingValuesHeuristic),
//! );
//! let (solution, _stats) = engine.solve(&mut csp).unwrap();
//! let solution = solution.unwrap();
//!
//! assert_eq!(*solution.value(a), 2);
//! assert_eq!(csp.var(a).assigned_value(), Some(&2));
//! ```
//!
//! [`TableConstraint`]: solver::constraint::TableConstraint
//! [`Csp`]: solver::csp::Csp
//! [`Propagator`]: solver::propagators::Propagator
//! [`PlainBacktracking`]: solver::propagators::PlainBacktracking
//! [`ForwardChecking`]: solver::propagators::ForwardChecking
//! [`GeneralizedArcConsistency`]: solver::propagators::GeneralizedArcConsistency
//! [`BacktrackingSearch`]: solver::engine::BacktrackingSearch
//! [`MinimumRemainingValuesHeuristic`]: solver::heuristics::variable::MinimumRemainingValuesHeuristic

pub mod error;
pub mod examples;
pub mod solver;
