use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

pub struct ChunkWriter<'a> {
    output_dir: &'a Path,
    stem: &'a str,
}

impl<'a> ChunkWriter<'a> {
    pub fn new(output_dir: &'a Path, stem: &'a str) -> Self {
        Self { output_dir, stem }
    }

    pub fn file_name(&self, index: usize) -> String {
        format!("{}_{}.txt", self.stem, index)
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.output_dir.join(self.file_name(index))
    }

    /// Creates (or truncates) the file for `index` and writes `lines` verbatim.
    pub fn write(&self, index: usize, lines: &[&str]) -> Result<PathBuf> {
        let path = self.path_for(index);
        let to_err = |source| SplitError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(to_err)?;
        let mut out = BufWriter::new(file);
        for line in lines {
            out.write_all(line.as_bytes()).map_err(to_err)?;
        }
        out.flush().map_err(to_err)?;

        Ok(path)
    }
}
