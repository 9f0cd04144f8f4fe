use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use readmap::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    readmap::commands::analyze::analyze_file(&cli.path)
}

fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(verbosity_filter(verbosity))
        .init();
}
