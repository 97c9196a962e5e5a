mod decorator;
mod ingest;
mod input;

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};
use std::io;

use crate::decorator::RappDecoration;

#[derive(Parser)]
#[command(name = "cdeco", version)]
#[command(
    about = "Wraps each file listed on stdin with the RApp license header and vim trailer",
    long_about = None
)]
struct Cli {
    /// Verbose logging (debug level), including the per-file and final
    /// "Decorated" reports. Default is error only, so a successful run is silent.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    };

    builder.filter_level(level);
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let stdin = io::stdin();
    let decorated = ingest::ingest(stdin.lock(), &RappDecoration)?;

    info!("Decorated {decorated} files");

    Ok(())
}
