use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tabula::{
    error::Result,
    examples::futoshiki::{
        futoshiki_model_1, futoshiki_model_2, solved_grid, FutoshikiBoard, Sign,
    },
    solver::{
        engine::BacktrackingSearch,
        heuristics::variable::MinimumRemainingValuesHeuristic,
        propagators::{ForwardChecking, GeneralizedArcConsistency, PlainBacktracking, Propagator},
        stats::render_stats_table,
        value::StandardValue,
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PropagatorChoice {
    /// Check fully instantiated constraints only.
    Bt,
    /// Forward checking.
    Fc,
    /// Generalized arc consistency.
    Gac,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelChoice {
    /// Binary not-equal constraints for rows and columns.
    Binary,
    /// N-ary all-different constraints for rows and columns.
    AllDiff,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid size.
    #[arg(long, default_value_t = 5)]
    size: usize,

    #[arg(long, value_enum, default_value = "gac")]
    propagator: PropagatorChoice,

    #[arg(long, value_enum, default_value = "binary")]
    model: ModelChoice,

    /// Print the per-constraint statistics table.
    #[arg(long)]
    stats: bool,

    /// Print the search statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    if args.size == 0 {
        println!("nothing to solve");
        return Ok(());
    }

    // An instance with a given corner and one inequality, so every
    // propagator has something to chew on.
    let mut board = FutoshikiBoard::open(args.size).with_given(0, 0, 1);
    if args.size > 1 {
        board = board.with_sign(0, 0, Sign::LessThan);
    }

    let (mut csp, grid) = match args.model {
        ModelChoice::Binary => futoshiki_model_1(&board)?,
        ModelChoice::AllDiff => futoshiki_model_2(&board)?,
    };

    let propagator: Box<dyn Propagator<StandardValue>> = match args.propagator {
        PropagatorChoice::Bt => Box::new(PlainBacktracking),
        PropagatorChoice::Fc => Box::new(ForwardChecking),
        PropagatorChoice::Gac => Box::new(GeneralizedArcConsistency),
    };
    let engine = BacktrackingSearch::new(propagator, Box::new(MinimumRemainingValuesHeuristic));

    let (solution, stats) = engine.solve(&mut csp)?;
    match solution {
        Some(solution) => {
            for row in solved_grid(&solution, &grid) {
                let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("{}", line.join(" "));
            }
        }
        None => println!("no solution"),
    }

    println!(
        "nodes: {}, backtracks: {}, values pruned: {}",
        stats.nodes_visited, stats.backtracks, stats.values_pruned
    );
    if args.stats {
        println!("{}", render_stats_table(&stats, &csp));
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats).unwrap());
    }
    Ok(())
}
