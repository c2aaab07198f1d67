//! Verbatim schema source lookup

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Supplies the original text of a schema file by its input path
pub trait SourceReader {
    /// Read the source for `input_path` (e.g. `shop/v1/order.proto`)
    fn read_source(&self, input_path: &str) -> Result<String>;
}

/// Reads sources from a directory on disk
#[derive(Debug, Clone)]
pub struct FsSourceReader {
    root: PathBuf,
}

impl FsSourceReader {
    /// Create a reader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory sources are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceReader for FsSourceReader {
    fn read_source(&self, input_path: &str) -> Result<String> {
        let path = self.root.join(input_path);
        trace!(path = %path.display(), "Reading schema source");
        std::fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })
    }
}

/// In-memory sources, keyed by input path
#[derive(Debug, Clone, Default)]
pub struct MemorySourceReader {
    sources: BTreeMap<String, String>,
}

impl MemorySourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text for `input_path`
    pub fn with_source(mut self, input_path: impl Into<String>, text: impl Into<String>) -> Self {
        self.sources.insert(input_path.into(), text.into());
        self
    }
}

impl SourceReader for MemorySourceReader {
    fn read_source(&self, input_path: &str) -> Result<String> {
        self.sources
            .get(input_path)
            .cloned()
            .ok_or_else(|| Error::SourceRead {
                path: PathBuf::from(input_path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such source"),
            })
    }
}
