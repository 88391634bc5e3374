use clap::Parser;
use necto::{
    error::Result,
    puzzles::cryptarithmetic::CryptarithmeticPuzzle,
    solver::{engine::SolverEngine, stats::render_stats_table},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The equation to solve.
    #[arg(default_value = "SEND + MORE = MONEY")]
    equation: String,

    /// Emit the solution and search statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let puzzle = CryptarithmeticPuzzle::from_text(&args.equation)?;
    if !args.json {
        println!("Solving {}...", args.equation.trim());
    }

    let (solution, stats) = SolverEngine::default().solve(puzzle.problem())?;
    match solution {
        Some(assignment) if args.json => {
            let report = serde_json::json!({
                "equation": puzzle.format_assignment(&assignment),
                "digits": puzzle.digits(&assignment),
                "stats": stats,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("the report serializes")
            );
        }
        Some(assignment) => {
            println!("Solution found!");
            println!("{}", puzzle.format_assignment(&assignment));
            println!("{}", render_stats_table(&stats));
        }
        None if args.json => {
            let report = serde_json::json!({ "digits": null, "stats": stats });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("the report serializes")
            );
        }
        None => println!("No solution found."),
    }

    Ok(())
}
