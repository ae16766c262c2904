pub mod chunker;
pub mod document;
pub mod writer;

use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use chunker::{ChunkSize, Chunker};
use document::InputDocument;
use writer::ChunkWriter;

/// One output file that a split will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChunk {
    pub index: usize,
    pub path: PathBuf,
    pub lines: Range<usize>,
}

#[derive(Debug)]
pub struct SplitPlan {
    pub chunk_size: ChunkSize,
    pub total_lines: usize,
    pub chunks: Vec<PlannedChunk>,
}

impl SplitPlan {
    /// Lines past the last full chunk, written to no file.
    pub fn dropped_lines(&self) -> usize {
        self.total_lines - self.chunks.len() * self.chunk_size.get()
    }
}

#[derive(Debug)]
pub struct SplitReport {
    pub chunk_size: ChunkSize,
    pub total_lines: usize,
    pub dropped_lines: usize,
    pub written: Vec<PathBuf>,
}

pub struct Splitter {
    output_dir: PathBuf,
}

impl Splitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Computes what `run` would write, without touching the output directory.
    pub fn plan_for(&self, input_path: &Path, job_size: i64) -> Result<SplitPlan> {
        let chunk_size = ChunkSize::from_job_size(job_size)?;
        let doc = InputDocument::read(input_path)?;
        Ok(self.plan_document(&doc, chunk_size))
    }

    fn plan_document(&self, doc: &InputDocument, chunk_size: ChunkSize) -> SplitPlan {
        let stem = doc.stem();
        let writer = ChunkWriter::new(&self.output_dir, &stem);
        let total_lines = doc.lines().len();

        let chunks = Chunker::plan(total_lines, chunk_size)
            .into_iter()
            .enumerate()
            .map(|(index, lines)| PlannedChunk {
                index,
                path: writer.path_for(index),
                lines,
            })
            .collect();

        SplitPlan {
            chunk_size,
            total_lines,
            chunks,
        }
    }

    /// Reads `input_path` and writes every full chunk in index order.
    /// The first failing write aborts; chunks already written stay on disk.
    pub fn run(&self, input_path: &Path, job_size: i64) -> Result<SplitReport> {
        let chunk_size = ChunkSize::from_job_size(job_size)?;
        let doc = InputDocument::read(input_path)?;
        let lines = doc.lines();
        let stem = doc.stem();
        let writer = ChunkWriter::new(&self.output_dir, &stem);

        let mut written = Vec::new();
        for (index, chunk) in Chunker::chunk(&lines, chunk_size).enumerate() {
            let path = writer.write(index, chunk)?;
            debug!(index, path = %path.display(), "chunk written");
            written.push(path);
        }

        let dropped_lines = lines.len() - written.len() * chunk_size.get();
        if dropped_lines > 0 {
            warn!(
                dropped_lines,
                chunk_size = chunk_size.get(),
                "trailing lines do not fill a chunk and were dropped"
            );
        }
        info!(
            input = %doc.path().display(),
            total_lines = lines.len(),
            chunks = written.len(),
            "split complete"
        );

        Ok(SplitReport {
            chunk_size,
            total_lines: lines.len(),
            dropped_lines,
            written,
        })
    }
}

/// Splits `input_path` into `<stem>_<i>.txt` files in the current directory.
pub fn split(input_path: &Path, job_size: i64) -> Result<SplitReport> {
    Splitter::new(".").run(input_path, job_size)
}
