//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "archer", version, about = "Animated terminal loading panel")]
pub struct Args {
    /// Color theme (see --list-themes)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Frames per second
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=120))]
    pub fps: Option<u16>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is not set, e.g. "debug" or "archer_core=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the built-in themes and exit
    #[arg(long)]
    pub list_themes: bool,
}
