//! CLI argument structure using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drydoc")]
#[command(version, about = "Render DRY documents", long_about = None)]
pub struct Cli {
    /// Input file; reads standard input when omitted
    pub filename: Option<PathBuf>,

    /// Encoding of the input file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Output file; writes standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Engine pair to render with; defaults to the most capable pair
    #[arg(long)]
    pub engine: Option<String>,

    /// List registered engine pairs and exit
    #[arg(long)]
    pub list_engines: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
