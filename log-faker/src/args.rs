use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "log-faker")]
#[command(about = "Generate fake access log files for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "dummy-data")]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 3)]
    files: u32,

    #[arg(long, default_value_t = 1000)]
    lines: u64,

    #[arg(long, value_enum, default_value_t = LogFormat::Access)]
    format: LogFormat,

    /// Seed the generator for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Access,
    Json,
}
