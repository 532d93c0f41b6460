use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "donghua")]
#[command(author, version, about = "Episode title normalizer and renamer for Chinese animated series")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename downloaded episode files in a directory
    Rename {
        /// Directory containing downloaded files
        #[arg(required = true)]
        dir: PathBuf,

        /// Show what would be renamed without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve a single raw title and print the result
    Resolve {
        /// Raw title or file path to resolve
        #[arg(required = true)]
        title: String,

        /// Series name to resolve against (skips library matching)
        #[arg(short, long)]
        series: Option<String>,
    },

    /// List the series known from the library directory and config
    Series,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
