//! Error types for the Slate core library
//!
//! Every failure the documentation pipeline can hit is fatal: the generator
//! never emits a partially rendered document set. The variants below carry
//! enough context for the CLI to report what went wrong and where.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for documentation generation
#[derive(Error, Debug)]
pub enum Error {
    /// A configured language has no registered example strategy
    #[error("Unknown language '{language}' (available: {})", available.join(", "))]
    UnknownLanguage {
        language: String,
        available: Vec<String>,
    },

    /// Verbatim schema source could not be read
    #[error("Failed to read schema source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Index front matter could not be encoded
    #[error("Serialization failed: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Plugin parameter string could not be understood
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    /// Descriptor input is structurally inconsistent
    #[error("Descriptor error in {file}: {message}")]
    Descriptor { file: String, message: String },

    /// The output sink rejected a document
    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used for logging and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration problems detected before rendering starts
    Configuration,
    /// Environment problems (missing files, unwritable outputs)
    Environment,
    /// Malformed input or internal encoding failures
    Input,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownLanguage { .. } | Self::InvalidParameter { .. } => {
                ErrorKind::Configuration
            }
            Self::SourceRead { .. } | Self::Output { .. } => ErrorKind::Environment,
            Self::Serialization { .. } | Self::Descriptor { .. } => ErrorKind::Input,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a descriptor error
    pub fn descriptor(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Descriptor {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Wrap a sink failure for the given output path
    pub fn output(path: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Output {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Environment => write!(f, "environment"),
            ErrorKind::Input => write!(f, "input"),
        }
    }
}
