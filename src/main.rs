//! Folio - post layout and scroll-spy table of contents for static blogs.

#![allow(dead_code)]

mod cli;
mod config;
mod embed;
mod layout;
mod logger;
mod outline;
mod render;
mod spy;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Init { force } = &cli.command {
        let path = cli.config.as_deref().unwrap_or(Path::new(config::CONFIG_FILE));
        return cli::init::write_config(path, *force);
    }

    let config = SiteConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Outline { args } => cli::outline::run_outline(args),
        Commands::Spy { args } => cli::spy::run_spy(args, &config),
    }
}
