//! Map colouring over a symbolic value type.
//!
//! Adjacent regions must receive different colours. The model is a single
//! binary not-equal table per border, and doubles as a demonstration that
//! the solver is generic over any [`ValueEquality`] type, not just
//! integers.
//!
//! [`ValueEquality`]: crate::solver::value::ValueEquality

use crate::{
    error::Result,
    solver::{
        constraint::TableConstraint, csp::Csp, engine::VariableId, variable::Variable,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Builds a map-colouring model: one variable per region over `palette`,
/// one not-equal table per adjacency.
pub fn map_colouring_model(
    num_regions: usize,
    adjacencies: &[(usize, usize)],
    palette: &[Colour],
) -> Result<(Csp<Colour>, Vec<VariableId>)> {
    let mut csp = Csp::new("map-colouring");
    let mut regions = Vec::with_capacity(num_regions);
    for i in 0..num_regions {
        regions.push(csp.add_var(Variable::new(
            format!("region{i}"),
            palette.iter().copied(),
        )?));
    }

    let mut tuples = Vec::new();
    for &a in palette {
        for &b in palette {
            if a != b {
                tuples.push(vec![a, b]);
            }
        }
    }
    for &(u, v) in adjacencies {
        csp.add_constraint(TableConstraint::new(
            format!("region{u} != region{v}"),
            vec![regions[u], regions[v]],
            tuples.clone(),
        )?)?;
    }
    Ok((csp, regions))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        engine::BacktrackingSearch,
        heuristics::variable::MinimumRemainingValuesHeuristic,
        propagators::GeneralizedArcConsistency,
    };

    #[test]
    fn colours_the_mainland_states() {
        let _ = tracing_subscriber::fmt::try_init();

        // WA, NT, SA, Q and their shared borders.
        let adjacencies = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)];
        let palette = [Colour::Red, Colour::Green, Colour::Blue];
        let (mut csp, regions) = map_colouring_model(4, &adjacencies, &palette).unwrap();

        let engine = BacktrackingSearch::new(
            Box::new(GeneralizedArcConsistency),
            Box::new(MinimumRemainingValuesHeuristic),
        );
        let (solution, _stats) = engine.solve(&mut csp).unwrap();
        let solution = solution.unwrap();

        assert_eq!(solution.len(), regions.len());
        for &(u, v) in &adjacencies {
            assert_ne!(solution.value(regions[u]), solution.value(regions[v]));
        }
    }

    #[test]
    fn two_regions_one_colour_is_unsatisfiable() {
        let (mut csp, _) = map_colouring_model(2, &[(0, 1)], &[Colour::Red]).unwrap();
        let engine = BacktrackingSearch::new(
            Box::new(GeneralizedArcConsistency),
            Box::new(MinimumRemainingValuesHeuristic),
        );
        let (solution, _stats) = engine.solve(&mut csp).unwrap();
        assert!(solution.is_none());
    }

    mod prop_tests {
        use std::collections::HashSet;

        use proptest::prelude::*;

        use super::*;
        use crate::solver::propagators::{
            ForwardChecking, PlainBacktracking, Propagator,
        };

        fn generate_map_colouring_problem() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
            (2..10usize).prop_flat_map(|num_regions| {
                let edges_strategy = proptest::collection::vec(
                    (0..num_regions, 0..num_regions)
                        .prop_filter("edges must be between different regions", |(a, b)| a != b)
                        .prop_map(|(a, b)| if a < b { (a, b) } else { (b, a) }),
                    0..=(num_regions * (num_regions - 1) / 2).min(16),
                )
                .prop_map(|edges| {
                    let unique_edges: HashSet<(usize, usize)> = edges.into_iter().collect();
                    unique_edges.into_iter().collect::<Vec<_>>()
                });

                (Just(num_regions), edges_strategy)
            })
        }

        proptest! {
            #[test]
            fn all_propagators_agree_on_random_maps(
                (num_regions, adjacencies) in generate_map_colouring_problem()
            ) {
                let palette = [Colour::Red, Colour::Green, Colour::Blue];
                let mut verdicts = Vec::new();

                for propagator in [
                    Box::new(PlainBacktracking) as Box<dyn Propagator<Colour>>,
                    Box::new(ForwardChecking),
                    Box::new(GeneralizedArcConsistency),
                ] {
                    let (mut csp, regions) =
                        map_colouring_model(num_regions, &adjacencies, &palette).unwrap();
                    let engine = BacktrackingSearch::new(
                        propagator,
                        Box::new(MinimumRemainingValuesHeuristic),
                    );
                    let (solution, _stats) = engine.solve(&mut csp).unwrap();

                    if let Some(solution) = &solution {
                        for &(u, v) in &adjacencies {
                            prop_assert_ne!(
                                solution.value(regions[u]),
                                solution.value(regions[v]),
                                "adjacent regions {} and {} share a colour",
                                u,
                                v
                            );
                        }
                    }
                    verdicts.push(solution.is_some());
                }

                // Propagation strength must never change satisfiability.
                prop_assert!(verdicts.iter().all(|&v| v == verdicts[0]));
            }
        }
    }
}
