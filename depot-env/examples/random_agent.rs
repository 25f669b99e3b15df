//! Runs a uniform random policy on the warehouse environment.
//!
//! The baseline from which any learned policy should improve.
use anyhow::Result;
use clap::Parser;
use depot_core::{Env, Policy};
use depot_env::{DepotEnv, DepotEnvConfig, RandomPolicy, RenderConfig};

#[derive(Parser, Debug)]
#[command(about = "Random policy on the warehouse pickup-and-delivery task")]
struct Args {
    /// Side length of the grid.
    #[arg(long, default_value_t = 5)]
    grid_size: u32,

    /// Step-count limit per episode.
    #[arg(long, default_value_t = 100)]
    max_steps: u32,

    /// Number of episodes to run.
    #[arg(long, default_value_t = 1)]
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
    let mut env = DepotEnv::build(&config, args.seed)?;
    let mut policy = RandomPolicy::new(args.seed);

    for episode in 0..args.episodes {
        let mut obs = env.reset()?;
        let mut ret = 0f32;
        loop {
            let a = policy.sample(&obs);
            let (step, _) = env.step(&a)?;
            ret += step.reward;
            if step.is_done() {
                break;
            }
            obs = step.obs;
        }
        println!("Episode {}: return = {:.2}", episode, ret);
    }

    Ok(())
}
