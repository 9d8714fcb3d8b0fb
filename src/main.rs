//! CLI for maze solving

use std::io::{self, BufRead};

use bfs_maze::{maze_generator::seeded_rng, search, GeneratorConfig, Grid};
use clap::Parser;

/// Generate a random maze and find the shortest way through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width, clamped to 9..=100
    #[arg(long, default_value_t = 51)]
    width: usize,

    /// Grid height, clamped to 9..=100
    #[arg(long, default_value_t = 51)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Probability threshold above which a corridor is walled
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_WALL_THRESHOLD)]
    wall_threshold: f64,

    /// Give up after this many unsolvable mazes and exit with an error
    /// status. Without it, generation retries until solved and the exit
    /// status is always 0.
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Exit without waiting for a line on stdin
    #[arg(long)]
    no_pause: bool,
}

/// Generate until solvable, print the maze before and after solving
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut rng = seeded_rng(args.seed);
    let config = GeneratorConfig {
        wall_threshold: args.wall_threshold,
    };
    let mut grid = Grid::new(args.width, args.height);

    let solution = search::solve(&mut grid, &mut rng, &config, args.max_attempts, |_| {
        println!("Generated grid - no path")
    })?;

    print!("{}", grid);
    println!("Goal found");

    search::mark_path(&mut grid, &solution.path);
    print!("{}", grid);
    solution.print_report();

    if !args.no_pause {
        io::stdin().lock().read_line(&mut String::new())?;
    }
    Ok(())
}
