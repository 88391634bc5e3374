use necto::{
    puzzles::map_colouring::{australia, Colour},
    solver::engine::SolverEngine,
};

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving the map colouring problem...");

    let problem = australia(&[Colour::Red, Colour::Green, Colour::Blue]);
    let result = SolverEngine::default().solve(problem);

    match result {
        Ok((Some(solution), stats)) => {
            println!("Solution found!");
            let mut regions: Vec<_> = solution.iter().collect();
            regions.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (region, colour) in regions {
                println!("Region {region}: {colour:?}");
            }
            println!("\nStats:\n{stats:#?}");
        }
        Ok((None, _)) => println!("No solution found."),
        Err(e) => eprintln!("An error occurred: {}", e),
    }
}
