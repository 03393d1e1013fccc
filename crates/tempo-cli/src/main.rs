//! Tempo CLI - Runs the demo game loop

mod commands;
mod settings;
mod states;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, states as list_states};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Fixed-timestep game loop driven by named game states", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo states until they ask to quit
    Run {
        /// Path to config file (defaults to ./tempo.toml when present)
        #[arg(long)]
        config: Option<String>,

        /// Name of the state to start in
        #[arg(long)]
        initial: Option<String>,

        /// Target frame rate
        #[arg(long)]
        fps: Option<u32>,

        /// Maximum frame rate (sets the per-frame delta ceiling)
        #[arg(long)]
        fps_max: Option<u32>,

        /// Use a simulated clock instead of sleeping between frames
        #[arg(long)]
        headless: bool,
    },

    /// List the registered demo states
    States {
        /// Path to config file (defaults to ./tempo.toml when present)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            initial,
            fps,
            fps_max,
            headless,
        } => run::run(run::RunArgs {
            config,
            initial,
            fps,
            fps_max,
            headless,
        }),
        Commands::States { config } => list_states::run(config.as_deref()),
    }
}
