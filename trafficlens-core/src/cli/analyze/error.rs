use crate::ingest::IngestError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("log file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is a directory, expected a log file", path.display())]
    IsDirectory { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Ingest {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}
