//! Values produced by the documentation pipeline

use serde::{Deserialize, Serialize};

/// Permission bits used for the aggregated index file
pub const INDEX_FILE_MODE: u32 = 0o777;

/// A link to the documentation of an imported file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLink {
    /// Display name, e.g. `Payment`
    pub name: String,
    /// In-document anchor, e.g. `#shop-v1-payment`
    pub url: String,
}

/// One rendered code sample for a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTab {
    pub language: String,
    pub code_example: String,
}

/// A rendered markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub path: String,
    pub content: String,
}

/// The aggregated index with its front matter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub path: String,
    pub content: String,
    pub mode: u32,
}

/// Front matter consumed by Slate's `index.html.md`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFrontMatter {
    #[serde(rename = "Includes")]
    pub includes: Vec<String>,
    pub language_tabs: Vec<String>,
    #[serde(rename = "Search")]
    pub search: bool,
    pub code_clipboard: bool,
}

/// Everything one generator run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    pub documents: Vec<GeneratedDocument>,
    pub index: Option<IndexDocument>,
}
