use std::io;

use anyhow::Result;
use clap::Parser;

use cyclegpx_core::cli::{run, Cli};
use cyclegpx_core::metrics::gather_text;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;

    if cli.metrics {
        eprint!("{}", gather_text()?);
    }
    Ok(())
}
