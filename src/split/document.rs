use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// A text file held in memory as newline-terminated lines.
#[derive(Debug)]
pub struct InputDocument {
    path: PathBuf,
    content: String,
}

impl InputDocument {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SplitError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_content(path, content))
    }

    pub fn from_content(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines with their terminator kept. `\n`, `\r\n` and a lone `\r` each end
    /// a line. A last line without terminator still counts.
    pub fn lines(&self) -> Vec<&str> {
        let bytes = self.content.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let end = match bytes[i] {
                b'\n' => Some(i + 1),
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 2),
                b'\r' => Some(i + 1),
                _ => None,
            };
            match end {
                Some(end) => {
                    lines.push(&self.content[start..end]);
                    start = end;
                    i = end;
                }
                None => i += 1,
            }
        }
        if start < bytes.len() {
            lines.push(&self.content[start..]);
        }
        lines
    }

    /// File name minus its last four characters (`problem.txt` -> `problem`).
    pub fn stem(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let keep = name.chars().count().saturating_sub(4);
        name.chars().take(keep).collect()
    }
}
