use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// The root folder containing the icons' `src` directory
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,
    /// Disable the listing of icons as they're parsed. Use this as a speed-up
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parses the cli arguments and configures the logger
pub fn init_cli() -> anyhow::Result<CliArgs> {
    let args = CliArgs::try_parse().context("Failed to parse CLI arguments")?;

    let level = if args.quiet {
        LevelFilter::Info
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buffer, record| writeln!(buffer, "{}", record.args()))
        .init();

    Ok(args)
}
