//! CLI frontend for the delve dungeon crawler.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use delve_play::PlayConfig;

#[derive(Parser)]
#[command(
    name = "delve",
    about = "delve - a small text-adventure dungeon crawler",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter (e.g. debug, delve_play=trace). Overrides RUST_LOG
    #[arg(long, global = true, env = "DELVE_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore the dungeon, reading one command per line from stdin
    Play {
        /// Name of the starting location (default: the cave)
        #[arg(short, long, env = "DELVE_START")]
        start: Option<String>,

        /// Prompt printed before each command
        #[arg(long, env = "DELVE_PROMPT", default_value = "> ")]
        prompt: String,
    },

    /// Print a location with its NPCs, items and exits
    Show {
        /// Location name (case-insensitive). Shows every location if omitted
        name: Option<String>,
    },

    /// List every location and where its exits lead
    Map,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Play { start, prompt } => {
            let mut config = PlayConfig::default().with_prompt(prompt);
            config.start = start;
            commands::play::run(&config)
        }
        Commands::Show { name } => commands::show::run(name.as_deref()),
        Commands::Map => commands::map::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
