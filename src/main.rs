//! Keiro - a sitemap route generator for multilingual markdown blogs.
//!
//! Scans per-locale article directories, enumerates the public blog
//! routes (unprefixed for the default locale, `<code>/`-prefixed for the
//! rest), and writes a sitemap.xml for search engines.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod generator;
mod logger;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_project(&config),
        Commands::Generate { .. } => cli::generate::run_generate(&config),
        Commands::Routes { args } => cli::routes::run_routes(args, &config),
    }
}
