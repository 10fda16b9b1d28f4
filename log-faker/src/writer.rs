use std::io;
use std::path::Path;

use chrono::{Duration, Local};
use rand::Rng;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::args::LogFormat;
use crate::generator::{access_line, json_line};

const FLUSH_BYTES: usize = 1 << 20;

pub async fn write_log_file<R: Rng + ?Sized>(
    path: &Path,
    lines: u64,
    format: LogFormat,
    rng: &mut R,
) -> io::Result<()> {
    let mut file = File::create(path).await?;
    // Start in the recent past so the clock can walk forward line by line.
    let mut at = Local::now() - Duration::seconds(2 * lines as i64);
    let mut buffer = String::with_capacity(FLUSH_BYTES + 128);

    for _ in 0..lines {
        let line = match format {
            LogFormat::Access => access_line(rng, at),
            LogFormat::Json => json_line(rng, at),
        };
        buffer.push_str(&line);
        buffer.push('\n');
        at = at + Duration::seconds(rng.random_range(0..3));

        if buffer.len() >= FLUSH_BYTES {
            file.write_all(buffer.as_bytes()).await?;
            buffer.clear();
        }
    }

    file.write_all(buffer.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[tokio::test]
    async fn writes_the_requested_number_of_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("api-00.log");
        let mut rng = StdRng::seed_from_u64(11);

        write_log_file(&path, 25, LogFormat::Access, &mut rng).await.expect("write log file");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents.lines().count(), 25);
        assert!(contents.lines().all(|l| l.contains("HTTP/1.1\"")));
    }

    #[tokio::test]
    async fn timestamps_never_run_backwards() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("api-00.log");
        let mut rng = StdRng::seed_from_u64(3);

        write_log_file(&path, 100, LogFormat::Access, &mut rng).await.expect("write log file");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let stamps: Vec<String> = contents.lines().map(|l| l.chars().take(19).collect()).collect();
        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(stamps, sorted);
    }
}
