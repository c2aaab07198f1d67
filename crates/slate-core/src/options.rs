//! Plugin parameters
//!
//! protoc hands plugins a single parameter string (`--slate_opt` values joined
//! with commas). It is parsed once per run into [`PluginOptions`] and then
//! passed explicitly to everything that needs it.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Default root for verbatim schema sources
pub const DEFAULT_SOURCE_DIR: &str = "schemas";

/// What a generated document covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// One document per package
    #[default]
    Package,
    /// One document per schema file
    File,
}

impl FromStr for UnitKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "package" => Ok(Self::Package),
            "file" => Ok(Self::File),
            other => Err(Error::invalid_parameter(
                "unit",
                format!("expected 'package' or 'file', got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Package => write!(f, "package"),
            UnitKind::File => write!(f, "file"),
        }
    }
}

/// Parsed generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Language tabs in display order
    pub languages: Vec<String>,
    /// Aggregated index output path; enables `_` prefixed fragments
    #[serde(deserialize_with = "deserialize_index_path")]
    pub index_path: Option<String>,
    /// Root directory for verbatim schema sources
    pub source_dir: PathBuf,
    /// Document granularity
    pub unit: UnitKind,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            index_path: None,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            unit: UnitKind::Package,
        }
    }
}

/// An empty or blank index path leaves the index disabled
fn non_empty_path(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

fn deserialize_index_path<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(non_empty_path))
}

/// Split a `;` separated language list, dropping empty entries
pub fn parse_languages(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

impl PluginOptions {
    /// Parse a protoc parameter string such as
    /// `languages=protobuf;ruby,index_path=index.md`
    pub fn parse(parameter: &str) -> Result<Self> {
        let mut options = Self::default();
        options.apply(parameter)?;
        Ok(options)
    }

    /// Apply a parameter string on top of the current values
    pub fn apply(&mut self, parameter: &str) -> Result<()> {
        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                Error::invalid_parameter(pair, "expected key=value")
            })?;
            let value = value.trim();

            match key.trim() {
                "languages" => self.languages = parse_languages(value),
                "index_path" => self.index_path = non_empty_path(value),
                "source_dir" => self.source_dir = PathBuf::from(value),
                "unit" => self.unit = value.parse()?,
                other => warn!(parameter = other, "Ignoring unknown plugin parameter"),
            }
        }
        Ok(())
    }

    /// Whether the aggregated index is enabled
    pub fn has_index(&self) -> bool {
        self.index_path.is_some()
    }
}
