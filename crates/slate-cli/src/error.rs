//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use slate_core::ErrorKind;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (stdin/stdout, file operations)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the slate-core library
    #[error("{0}")]
    Core(#[from] slate_core::Error),

    /// Malformed protobuf input
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    /// Protobuf response could not be encoded
    #[error("Failed to encode plugin response: {0}")]
    Encode(#[from] prost::EncodeError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a decode error for the named input
    pub fn decode(what: &'static str, source: prost::DecodeError) -> Self {
        Self::Decode { what, source }
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(e) => match e.kind() {
                ErrorKind::Configuration => 2,
                ErrorKind::Environment => 3,
                ErrorKind::Input => 4,
            },
            Self::Decode { .. } => 5,
            Self::Encode(_) => 6,
            Self::FileNotFound { .. } => 7,
            Self::Config(_) => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Hint printed below the error, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Core(slate_core::Error::UnknownLanguage { .. }) => {
                Some("Check the `languages` plugin option or the generator.languages config key")
            }
            Self::Core(slate_core::Error::SourceRead { .. }) => {
                Some("The protobuf tab reads schema sources below `source_dir` (default: schemas)")
            }
            Self::Decode { .. } => Some("Pass a binary FileDescriptorSet, e.g. from `buf build -o`"),
            _ => None,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    let mut message = if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    };

    if let Some(hint) = error.hint() {
        message.push_str("\n  hint: ");
        message.push_str(hint);
    }
    message
}
