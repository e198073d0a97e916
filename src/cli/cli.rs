use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};

/// Print a flat list of delimited paths as a tree
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// File with one path per line. Reads standard input when omitted or "-"
    pub input: Option<PathBuf>,

    /// Single character separating path segments
    #[clap(long, short, default_value = "/")]
    pub delimiter: String,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,

    /// Text printed on the first line, in place of the unnamed root
    #[clap(long, default_value = ".")]
    pub root_label: String,
}
