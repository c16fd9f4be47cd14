use clap::{Parser, Subcommand};

/// CLI arguments for tripgeo-cli
#[derive(Debug, Parser)]
#[command(
    name = "tripgeo",
    version,
    about = "CLI for querying a tripgeo destination dataset"
)]
pub struct CliArgs {
    /// Path to the input JSON file (an array of destination records)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded destination pool
    Stats,

    /// Run a ranked destination search
    Search {
        /// Free-text query (minimum 2 characters)
        query: String,

        /// Maximum number of results
        #[arg(short = 'l', long = "limit", default_value_t = 10)]
        limit: usize,

        /// Restrict to a category tag (e.g. "place")
        #[arg(long = "category")]
        category: Option<String>,

        /// Restrict to a type tag (e.g. "city")
        #[arg(long = "type")]
        kind: Option<String>,
    },
}
