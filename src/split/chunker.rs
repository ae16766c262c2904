use std::ops::Range;

use crate::error::{Result, SplitError};

/// Number of lines placed in every output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize(usize);

impl ChunkSize {
    /// Derives the chunk size from a job size as `job_size * 2 + 4`.
    pub fn from_job_size(job_size: i64) -> Result<Self> {
        let size = job_size
            .checked_mul(2)
            .and_then(|n| n.checked_add(4))
            .ok_or(SplitError::InvalidChunkSize { job_size })?;

        if size <= 0 {
            return Err(SplitError::InvalidChunkSize { job_size });
        }

        usize::try_from(size)
            .map(ChunkSize)
            .map_err(|_| SplitError::InvalidChunkSize { job_size })
    }

    pub fn get(self) -> usize {
        self.0
    }
}

pub struct Chunker;

impl Chunker {
    /// Line ranges of every complete chunk. Trailing lines that do not fill
    /// a whole chunk get no range.
    pub fn plan(total_lines: usize, chunk_size: ChunkSize) -> Vec<Range<usize>> {
        let size = chunk_size.get();
        (0..total_lines / size)
            .map(|i| i * size..(i + 1) * size)
            .collect()
    }

    pub fn chunk<'a, T>(lines: &'a [T], chunk_size: ChunkSize) -> impl Iterator<Item = &'a [T]> {
        lines.chunks_exact(chunk_size.get())
    }
}
