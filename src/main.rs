use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "acctgen",
    about = "Generate mock account files for the backend simulation",
    version
)]
struct Cli {
    /// Directory the account files are written to
    #[arg(short = 'o', long = "output-dir", default_value = acctgen::config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Log generation details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "acctgen=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = acctgen::config::Config::default().with_output_dir(cli.output_dir);
    let now = acctgen::timestamp::local_now()?;
    let mut rng = rand::thread_rng();

    let mut out = io::stdout().lock();
    let mut write_err = None;
    acctgen::run(&config, now, &mut rng, |path| {
        if write_err.is_none() {
            if let Err(e) = writeln!(out, "Generated account file: {}", path.display()) {
                write_err = Some(e);
            }
        }
    })?;
    if let Some(e) = write_err {
        return Err(e).context("failed to write to stdout");
    }
    out.flush()?;

    Ok(())
}
