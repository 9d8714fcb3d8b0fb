//! CLI for maze generation

use bfs_maze::{maze_generator::seeded_rng, GeneratorConfig, Grid};
use clap::Parser;

/// Print a generated maze without solving it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field width
    #[arg(long, default_value_t = 51)]
    width: usize,

    /// Generated field height
    #[arg(long, default_value_t = 51)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Probability threshold above which a corridor is walled
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_WALL_THRESHOLD)]
    wall_threshold: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut grid = Grid::new(args.width, args.height);
    grid.generate_with(
        &mut seeded_rng(args.seed),
        &GeneratorConfig {
            wall_threshold: args.wall_threshold,
        },
    );
    print!("{}", grid);
    Ok(())
}
