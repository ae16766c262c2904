use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// `job_size * 2 + 4` overflowed or was not positive.
    #[error("job size {job_size} does not yield a positive chunk size")]
    InvalidChunkSize { job_size: i64 },

    #[error("failed to read input file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write chunk file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;
