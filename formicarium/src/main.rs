//! # Formicarium Runner
//!
//! Entry point for the Formicarium rollout binary.
//!
//! Builds the reference ant world once, makes `Formicarium-v0` through the
//! environment registry and drives it with random actions. Set `RUST_LOG`
//! to control log verbosity (defaults to `info`).

use anyhow::Result;
use clap::Parser;
use formicarium::app::{self, RunOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Random-policy rollout in the Formicarium ant environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for the first episode's terrain and the action sampler
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Environment steps to run
    #[arg(long, default_value_t = 1000)]
    steps: usize,
    /// Physics sub-steps per environment step
    #[arg(long)]
    skip_frames: Option<usize>,
    /// JSON environment config
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON ant config for the reference simulator
    #[arg(long)]
    ant_config: Option<PathBuf>,
    /// Log progress every N steps (0 to disable)
    #[arg(long, default_value_t = 50)]
    log_every: usize,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            seed: cli.seed,
            steps: cli.steps,
            skip_frames: cli.skip_frames,
            config: cli.config,
            ant_config: cli.ant_config,
            log_every: cli.log_every,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = RunOptions::from(Cli::parse());
    let summary = app::run(&options)?;
    println!(
        "{} steps, {} episodes finished ({} reached the goal), total reward {:.3}",
        summary.steps,
        summary.episodes_finished(),
        summary.terminated,
        summary.total_reward
    );
    Ok(())
}
