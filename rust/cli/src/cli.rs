//! Command-line argument definitions for the tripoker CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tripoker",
    version,
    about = "Three-card poker decision bot: classify a two-hole-plus-table hand and pick FOLD, CALL, or RAISE"
)]
pub struct TripokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a game state as JSON on stdin and print the chosen action as JSON
    Decide {
        /// Strategy to use (overrides configuration)
        #[arg(long)]
        strategy: Option<String>,
        /// Append a DecisionRecord to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Classify a three-card hand without making a decision
    Classify {
        /// The two hole card tokens (e.g. AH KD)
        #[arg(long, num_args = 2, value_names = ["CARD", "CARD"])]
        hole: Vec<String>,
        /// The table card token (e.g. QS)
        #[arg(long, value_name = "CARD")]
        table: String,
    },
    /// Print the high-card action chart as JSON
    Chart,
    /// Display current configuration settings and their sources
    Cfg,
}
