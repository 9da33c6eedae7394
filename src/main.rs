//! offline-sitemap - build a sitemap.xml from a local directory tree.

mod cli;
mod config;
mod generator;
mod logger;
mod scan;
mod utils;

use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = cli::generate::run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}
