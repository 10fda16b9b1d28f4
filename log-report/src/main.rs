mod ingest;
mod invariants;
mod models;
mod parser;
mod report;
mod summary;

use std::path::PathBuf;

use clap::Parser;
use ingest::IngestError;
use summary::Summary;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log files to summarize, processed in the order given.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), IngestError> {
    let args = Args::parse();

    // Diagnostics go to stderr so the report owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Reading data and calculating... Wait for a moment...");

    let mut summary = Summary::default();
    ingest::scan_files(&args.files, &mut summary).await?;
    print!("{}", report::render(&summary));

    Ok(())
}
