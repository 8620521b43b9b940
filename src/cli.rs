use std::path::PathBuf;

use clap::Parser;

/// astrodb - check referential integrity of the astrology dataset
#[derive(Parser, Debug)]
#[command(name = "astrodb")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status: 0 when every check passes, 1 on violations, 2 when the data cannot be loaded.")]
pub struct Cli {
    /// Directory holding the table files (default: the dataset shipped with the tool)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Also check colors, tags, sources, decan rulers, house sign hints and enumerated fields
    #[arg(long)]
    pub extended: bool,

    /// Output format for CI (NDJSON events on stdout)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
