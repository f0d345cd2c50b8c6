//! bitfn - slugs, ASCII folding and escape decoding from the command line

use clap::Parser;
use colored::Colorize;
use std::process;

use bitfn::cli::commands;
use bitfn::cli::Cli;

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    if let Some(path) = &cli.config {
        log::debug!("Using config file {}", path.display());
    }

    if let Err(e) = commands::execute(cli.command, cli.config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
