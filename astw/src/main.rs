mod commands;
mod config;
mod logging;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init_tracing();

    Cli::parse().run()
}
