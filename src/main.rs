use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use clickflat::pipeline;

/// Flatten NDJSON click-stream logs into per-file CSV tables.
#[derive(Parser, Debug)]
#[command(name = "clickflat", version, about)]
struct Args {
    /// Input directory containing `*.json` NDJSON files
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the CSV artifacts, created if missing
    #[arg(short, long)]
    output: PathBuf,

    /// Keep timestamps in UNIX epoch format
    #[arg(short, long)]
    unix: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        unix = args.unix,
        "startup"
    );

    let artifacts = pipeline::process_dir(&args.input, &args.output, args.unix)?;
    info!("{} files processed", artifacts.len());
    Ok(())
}
