//! Command-line interface definitions for snap-tester.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `snap-tester` binary.
#[derive(Parser, Debug)]
#[command(
    name = "snap-tester",
    about = "Scenario diagnostics for window snapping",
    version
)]
pub struct Cli {
    /// Logging controls shared across winsnap binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which diagnostic to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level tester commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode action flags and print the resulting operation shape.
    Classify(ClassifyArgs),
    /// Apply actions to the window described by a scenario file.
    Run(RunArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Actions such as `fullscreen`, `left_half+next_display`, or a raw value like `0x0a`.
    #[arg(value_name = "ACTION", num_args = 1..)]
    pub actions: Vec<String>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scenario file (RON) describing displays and the focused window.
    #[arg(long, value_name = "PATH")]
    pub scenario: PathBuf,

    /// Optional resolver settings file (RON).
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Emit one JSON object per step instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Actions to apply in order.
    #[arg(value_name = "ACTION", num_args = 1..)]
    pub actions: Vec<String>,
}
