//! sphinxfeed - Sphinx xmlpipe2 search feed generator for static sites.

mod cli;
mod config;
mod content;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::search::xmlpipe;
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Build { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::build::build_feed(&config).map(|_| ())
        }
        Commands::Check { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::check::check_feed(&config).map(|_| ())
        }
        Commands::Schema => print_schema(),
    }
}

/// Print the schema preamble, e.g. to paste into `sphinx.conf` tooling.
fn print_schema() -> Result<()> {
    let mut stdout = stdout().lock();
    stdout.write_all(xmlpipe::schema().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
