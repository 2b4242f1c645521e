// src/bin/cli.rs
use clap::Parser;

use crn_outlines::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(args.verbose);

    match cli::run(&args) {
        Ok(()) => Ok(()),
        Err(e) if e.is_usage() => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
