//! Output sinks receiving rendered documents

use crate::error::{Error, Result};
use crate::types::{GeneratedDocument, IndexDocument};
use std::path::PathBuf;
use tracing::debug;

/// Persists generated documents
pub trait OutputSink {
    /// Accept one per-unit document
    fn write_document(&mut self, document: &GeneratedDocument) -> Result<()>;

    /// Accept the aggregated index
    fn write_index(&mut self, index: &IndexDocument) -> Result<()>;
}

/// Collects everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub documents: Vec<GeneratedDocument>,
    pub index: Option<IndexDocument>,
}

impl OutputSink for MemorySink {
    fn write_document(&mut self, document: &GeneratedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn write_index(&mut self, index: &IndexDocument) -> Result<()> {
        self.index = Some(index.clone());
        Ok(())
    }
}

/// Writes documents below a root directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::output(relative, e))?;
        }
        std::fs::write(&path, content).map_err(|e| Error::output(relative, e))?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote document");
        Ok(path)
    }
}

impl OutputSink for DirectorySink {
    fn write_document(&mut self, document: &GeneratedDocument) -> Result<()> {
        self.write(&document.path, &document.content).map(|_| ())
    }

    fn write_index(&mut self, index: &IndexDocument) -> Result<()> {
        let path = self.write(&index.path, &index.content)?;
        set_mode(&path, index.mode).map_err(|e| Error::output(&index.path, e))
    }
}

/// Apply unix permission bits; a no-op elsewhere
#[cfg(unix)]
pub fn set_mode(path: &std::path::Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

/// Apply unix permission bits; a no-op elsewhere
#[cfg(not(unix))]
pub fn set_mode(_path: &std::path::Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
