use tracing_subscriber::EnvFilter;

use tabula::{
    error::Result,
    examples::map_colouring::{map_colouring_model, Colour},
    solver::{
        engine::BacktrackingSearch,
        heuristics::variable::MinimumRemainingValuesHeuristic,
        propagators::ForwardChecking,
    },
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Mainland Australia plus Tasmania.
    let names = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
    let adjacencies = [
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 5),
    ];
    let palette = [Colour::Red, Colour::Green, Colour::Blue];

    let (mut csp, regions) = map_colouring_model(names.len(), &adjacencies, &palette)?;
    let engine = BacktrackingSearch::new(
        Box::new(ForwardChecking),
        Box::new(MinimumRemainingValuesHeuristic),
    );

    let (solution, stats) = engine.solve(&mut csp)?;
    match solution {
        Some(solution) => {
            for (name, &region) in names.iter().zip(&regions) {
                println!("{name}: {:?}", solution.value(region));
            }
        }
        None => println!("no colouring exists"),
    }
    println!(
        "nodes: {}, backtracks: {}",
        stats.nodes_visited, stats.backtracks
    );
    Ok(())
}
