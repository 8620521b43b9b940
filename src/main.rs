//! astrodb CLI - referential-integrity checker for the astrology dataset
//!
//! Usage: astrodb [--data-dir <DIR>] [--extended] [--json] [-v]
//!
//! Exit status:
//!   0  every check passed
//!   1  one or more violations were reported
//!   2  the configuration or a table could not be loaded

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use commands::validate::{cmd_validate, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cmd_validate(&cli) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Violations) => ExitCode::from(1),
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::from(2)
        }
    }
}
