//! CLI argument definitions using clap.
//!
//! Running `msgcat` without a subcommand is the same as `msgcat extract` with
//! defaults, so the tool still works as a zero-argument report generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Directory the configured area roots are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,

    /// Output file path (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output (per-file read warnings)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the configured areas and write the message catalog (the default)
    Extract(ExtractArgs),
    /// Initialize a new .msgcatrc.json configuration file
    Init,
}
