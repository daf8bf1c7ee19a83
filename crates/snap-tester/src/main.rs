#![warn(missing_docs)]

//! Entry point for the `snap-tester` binary.

mod cli;
mod error;
mod run;
mod scenario;

use std::{io, process};

use clap::Parser;
use tracing::error;

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    logging::init(&log.spec());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Classify(args) => run::classify(&args, &mut out),
        Commands::Run(args) => run::run(&args, &mut out),
    }
}
