//! Runs the scripted greedy policy on the warehouse environment.
//!
//! The greedy policy walks straight to the pickup cell, acquires the item
//! and carries it to the destination; its return is an upper baseline for
//! learned policies on this task.
use anyhow::Result;
use clap::Parser;
use depot_core::{DefaultEvaluator, Evaluator};
use depot_env::{DepotEnv, DepotEnvConfig, GreedyPolicy, RenderConfig};

#[derive(Parser, Debug)]
#[command(about = "Greedy scripted policy on the warehouse pickup-and-delivery task")]
struct Args {
    /// Side length of the grid.
    #[arg(long, default_value_t = 5)]
    grid_size: u32,

    /// Step-count limit per episode.
    #[arg(long, default_value_t = 100)]
    max_steps: u32,

    /// Number of episodes to evaluate.
    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Render episodes on the terminal.
    #[arg(long)]
    render: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = DepotEnvConfig::default()
        .grid_size(args.grid_size)
        .max_steps(args.max_steps)
        .render(if args.render {
            Some(RenderConfig::default())
        } else {
            None
        });

    let mut evaluator = DefaultEvaluator::<DepotEnv>::new(&config, args.seed, args.episodes)?;
    let record = evaluator.evaluate(&mut GreedyPolicy)?;
    println!(
        "Mean return over {} episodes: {:.2}",
        args.episodes,
        record.get_scalar("Episode return")?
    );

    Ok(())
}
