use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "soilsense", version, about = "Soil fertility prediction and diagnosis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the model artifact path
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate config and model artifact
    Check,
    /// Evaluate one soil sample
    Predict {
        /// JSON file of parameter -> value pairs; prompts interactively if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}
