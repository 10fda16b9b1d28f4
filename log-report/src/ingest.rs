use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::parser::parse_line;
use crate::summary::Summary;

// Any failed open or read aborts the whole run; no partial report.
#[derive(Debug, Display, Error)]
pub enum IngestError {
    #[display("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("read failed on {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

// Each file is fully drained, in list order, before the next is opened.
pub async fn scan_files(paths: &[PathBuf], summary: &mut Summary) -> Result<(), IngestError> {
    for path in paths {
        scan_file(path, summary).await?;
    }
    Ok(())
}

async fn scan_file(path: &Path, summary: &mut Summary) -> Result<(), IngestError> {
    let file = File::open(path).await.map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines();

    let mut seen = 0u64;
    while let Some(line) = lines.next_line().await.map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })? {
        summary.record(parse_line(&line));
        seen += 1;
    }
    tracing::info!(file = %path.display(), lines = seen, "file scanned");
    Ok(())
}
