use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use goed_core::commands::{self, Command};
use goed_core::config;
use goed_core::error::CommandError;
use goed_core::selection::Selection;

mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("goed: {err:#}");
        let code = err
            .downcast_ref::<CommandError>()
            .map(CommandError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(args: cli::Args) -> anyhow::Result<()> {
    let cfg = config::load(args.config.as_deref())?;

    let mut stdin = std::io::stdin().lock();
    let sel = Selection::read_from(&mut stdin)?;
    tracing::debug!(file = %sel.filename, start = sel.start, end = sel.end, "selection");

    let output = commands::dispatch(Command::from(args.command), &sel, &cfg).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
