//! Aggregated index with YAML front matter
//!
//! Slate's `index.html.md` pulls in every generated fragment through the
//! `Includes` list of its front matter. The index only makes sense when it
//! sees every unit of a run at once.
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{IndexDocument, IndexFrontMatter, INDEX_FILE_MODE};
use std::collections::BTreeSet;

const FRONT_MATTER_FENCE: &str = "---\n";

/// Collects document paths and renders the index
#[derive(Debug, Clone, Default)]
pub struct IndexAggregator {
    includes: BTreeSet<String>,
}

impl IndexAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated document path
    pub fn add(&mut self, path: impl Into<String>) {
        self.includes.insert(path.into());
    }

    /// Recorded paths in byte order
    pub fn includes(&self) -> Vec<String> {
        self.includes.iter().cloned().collect()
    }

    /// Front matter for the recorded paths
    pub fn front_matter(&self, languages: &[String]) -> IndexFrontMatter {
        IndexFrontMatter {
            includes: self.includes(),
            language_tabs: languages.to_vec(),
            search: true,
            code_clipboard: true,
        }
    }

    /// Render the index document written to `path`
    pub fn finish(&self, path: &str, languages: &[String]) -> Result<IndexDocument> {
        let content = render_front_matter(&self.front_matter(languages))?;
        Ok(IndexDocument {
            path: path.to_string(),
            content,
            mode: INDEX_FILE_MODE,
        })
    }
}

impl<S: Into<String>> Extend<S> for IndexAggregator {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.add(path);
        }
    }
}

/// Serialize front matter between `---` fences
pub fn render_front_matter(front_matter: &IndexFrontMatter) -> Result<String> {
    let yaml = serde_yaml::to_string(front_matter).map_err(|source| Error::Serialization {
        message: "failed to encode index front matter".to_string(),
        source,
    })?;
    Ok(format!("{FRONT_MATTER_FENCE}{yaml}{FRONT_MATTER_FENCE}"))
}
