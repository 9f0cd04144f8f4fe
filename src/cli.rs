use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "readmap")]
#[command(about = "Text readability analyzer with reader-age estimates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the ASCII text file to analyze
    pub path: PathBuf,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
