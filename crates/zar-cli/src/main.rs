//! CLI frontend for the zar dice board.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zar_core::DieType;

use crate::commands::Options;

#[derive(Parser)]
#[command(
    name = "zar",
    about = "Polyhedral dice with animated rolls and a persistent history",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding roll history
    #[arg(long, global = true, default_value = ".zar")]
    data_dir: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Milliseconds a die spins before its result settles (default: 1300)
    #[arg(long, global = true)]
    settle_ms: Option<u64>,

    /// Milliseconds to wait after a multi-roll before reporting (default: 600)
    #[arg(long, global = true)]
    batch_delay_ms: Option<u64>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a single die (d4, d6, d8, d10, d12, d20)
    Roll {
        /// Die to roll
        die: DieType,
    },

    /// Roll several dice at once and print the total
    Multi {
        /// Dice to roll together
        dice: Vec<DieType>,
    },

    /// Show roll history per die
    Stats {
        /// Limit to one die and show its face frequencies
        die: Option<DieType>,
    },

    /// Describe a die's mesh
    Mesh {
        /// Die to build
        die: DieType,

        /// Print the full mesh as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget stored roll history
    Reset {
        /// Die to reset (default: all)
        die: Option<DieType>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = Options {
        data_dir: cli.data_dir,
        seed: cli.seed,
        settle_ms: cli.settle_ms,
        batch_delay_ms: cli.batch_delay_ms,
    };

    let result = match cli.command {
        Commands::Roll { die } => commands::roll::run(&opts, die).await,
        Commands::Multi { dice } => commands::multi::run(&opts, &dice).await,
        Commands::Stats { die } => commands::stats::run(&opts, die),
        Commands::Mesh { die, json } => commands::mesh::run(die, json),
        Commands::Reset { die } => commands::reset::run(&opts, die),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
