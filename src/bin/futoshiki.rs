use clap::Parser;
use futoshiki::{
    notation::parse_fufen,
    render,
    solver::{
        engine::{Outcome, SolverEngine, DEFAULT_DEPTH_CAP},
        state::SolveState,
        stats::render_stats_table,
    },
};
use tracing_subscriber::EnvFilter;

/// Solve a Futoshiki puzzle given in fufen notation.
#[derive(Parser, Debug)]
#[command(name = "futoshiki", version, about)]
struct Args {
    /// The puzzle, e.g. "3...^/....<" — `.` blank, digits givens, `/` ends a
    /// row, `^ V < >` mark inequalities.
    fufen: String,

    /// Ceiling for the iterative-deepening guess budget.
    #[arg(long, default_value_t = DEFAULT_DEPTH_CAP)]
    depth_cap: usize,

    /// Print the parsed puzzle with all candidate values before solving.
    #[arg(long)]
    show_candidates: bool,

    /// Print a per-rule statistics table after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the result as a JSON document instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let level = match parse_fufen(&args.fufen) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let mut state = SolveState::from_parsed(&level);
    if args.show_candidates {
        println!("{}", render::render_candidates(&state));
    }

    let engine = SolverEngine::with_depth_cap(args.depth_cap);
    let (outcome, stats) = engine.solve(&mut state);

    if args.json {
        let grid: Vec<Vec<Vec<u8>>> = (0..state.size())
            .map(|row| {
                (0..state.size())
                    .map(|col| {
                        state
                            .grid
                            .domain(futoshiki::solver::grid::Cell::new(row, col))
                            .iter()
                            .collect()
                    })
                    .collect()
            })
            .collect();
        let document = serde_json::json!({ "outcome": outcome, "grid": grid });
        println!(
            "{}",
            serde_json::to_string_pretty(&document).expect("result serializes")
        );
    } else {
        match outcome {
            Outcome::Solved => print!("{}", render::render_solved(&state.grid)),
            Outcome::Exhausted => {
                eprintln!("no solution found within the depth cap; best narrowing:");
                print!("{}", render::render_candidates(&state));
            }
            Outcome::Contradiction => eprintln!("puzzle is contradictory"),
        }
    }
    if args.stats {
        println!("{}", render_stats_table(&stats));
    }

    std::process::exit(match outcome {
        Outcome::Solved => 0,
        Outcome::Exhausted => 1,
        Outcome::Contradiction => 2,
    });
}
