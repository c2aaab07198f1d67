//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Plugin parameters and command-line flags, which take precedence

use crate::error::{Error, Result};
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use slate_core::PluginOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generator defaults; plugin parameters are applied on top
    pub generator: PluginOptions,

    /// Logging settings
    pub logging: LogSettings,
}

/// Logging settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when no `-v` flag is given
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: LogFormat,
}

/// On-disk configuration formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
    Toml,
}

impl FileFormat {
    /// Format for `path`; anything unrecognised is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_str_as(&content, FileFormat::from_path(path))
    }

    /// Parse configuration text in the given format
    pub fn from_str_as(content: &str, format: FileFormat) -> Result<Self> {
        let config = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        match Self::default_config_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".slate.yaml"),
            PathBuf::from(".slate.yml"),
            PathBuf::from(".slate.json"),
            PathBuf::from("slate.toml"),
        ];

        if let Some(path) = Self::user_config_path() {
            paths.push(path);
        }

        paths
    }

    /// User level configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("slate").join("config.yaml"))
    }

    /// Generator options with a protoc parameter string applied on top
    pub fn plugin_options(&self, parameter: &str) -> Result<PluginOptions> {
        let mut options = self.generator.clone();
        options.apply(parameter)?;
        Ok(options)
    }

    /// Serialize in the given format
    pub fn to_string_as(&self, format: FileFormat) -> Result<String> {
        let content = match format {
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        };
        Ok(content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_as(FileFormat::from_path(path))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::UnitKind;

    #[test]
    fn test_yaml_config() {
        let config = Config::from_str_as(
            "generator:\n  languages: [protobuf, ruby]\n  index_path: index.md\nlogging:\n  format: json\n",
            FileFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.generator.languages, vec!["protobuf", "ruby"]);
        assert_eq!(config.generator.index_path.as_deref(), Some("index.md"));
        assert_eq!(config.generator.source_dir, PathBuf::from("schemas"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_toml_config() {
        let config = Config::from_str_as(
            "[generator]\nunit = \"file\"\nsource_dir = \"protos\"\n",
            FileFormat::Toml,
        )
        .unwrap();
        assert_eq!(config.generator.unit, UnitKind::File);
        assert_eq!(config.generator.source_dir, PathBuf::from("protos"));
    }

    #[test]
    fn test_empty_index_path_leaves_index_disabled() {
        for (text, format) in [
            ("generator:\n  index_path: \"\"\n", FileFormat::Yaml),
            ("[generator]\nindex_path = \"\"\n", FileFormat::Toml),
            (r#"{"generator": {"index_path": ""}}"#, FileFormat::Json),
        ] {
            let config = Config::from_str_as(text, format).unwrap();
            assert!(!config.generator.has_index(), "{format:?}");
        }
    }

    #[test]
    fn test_plugin_parameters_take_precedence() {
        let config = Config::from_str_as(
            r#"{"generator": {"languages": ["ruby"], "index_path": "index.md"}}"#,
            FileFormat::Json,
        )
        .unwrap();
        let options = config.plugin_options("languages=protobuf;python").unwrap();
        assert_eq!(options.languages, vec!["protobuf", "python"]);
        assert_eq!(options.index_path.as_deref(), Some("index.md"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.generator.languages = vec!["protobuf".to_string()];

        for name in ["nested/.slate.yaml", "slate.toml", "slate.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(Config::from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = Config::from_file(Path::new("/nonexistent/slate.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_file_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new(".slate.json")), FileFormat::Json);
    }
}
