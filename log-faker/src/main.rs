mod args;
mod generator;
mod writer;

use args::CliArgs;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tokio::fs;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::io::Result<()> {
    let args = CliArgs::parse();
    println!(
        "Writing {} files with {} lines each to {}",
        args.files(),
        args.lines(),
        args.out_dir().display()
    );

    fs::create_dir_all(args.out_dir()).await?;
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    for n in 0..*args.files() {
        let path = args.out_dir().join(format!("api-{n:02}.log"));
        writer::write_log_file(&path, *args.lines(), *args.format(), &mut rng).await?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
