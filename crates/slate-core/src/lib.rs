//! Slate Core - Markdown API documentation from protobuf descriptors
//!
//! This crate turns a compiled protobuf schema into documentation fragments
//! for the [Slate](https://github.com/slatedocs/slate) static site generator.
//!
//! # Main Components
//!
//! - **Descriptor Model**: read-only graph of packages, files and messages
//! - **Plugin Options**: the parsed `--slate_opt` parameter string
//! - **Example Synthesis**: per-language code tabs for every message
//! - **Document Assembly**: one markdown document per package or file
//! - **Index Aggregation**: YAML front matter listing every fragment
//!
//! # Example
//!
//! ```no_run
//! use slate_core::{DescriptorGraph, FsSourceReader, Generator, PluginOptions, Result};
//! use slate_core::sink::DirectorySink;
//!
//! fn example(graph: &DescriptorGraph) -> Result<()> {
//!     let options = PluginOptions::parse("languages=protobuf;ruby,index_path=index.md")?;
//!     let sources = FsSourceReader::new(&options.source_dir);
//!     let mut sink = DirectorySink::new("docs");
//!     Generator::new(options).run(graph, &sources, &mut sink)?;
//!     Ok(())
//! }
//! ```
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

pub mod descriptor;
pub mod error;
pub mod generation;
pub mod naming;
pub mod options;
pub mod sink;
pub mod source;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use descriptor::{DescriptorGraph, File, Message, Package};
pub use error::{Error, ErrorKind, Result};
pub use generation::{Generator, LanguageRegistry};
pub use options::{PluginOptions, UnitKind};
pub use sink::{DirectorySink, MemorySink, OutputSink};
pub use source::{FsSourceReader, MemorySourceReader, SourceReader};
pub use types::{
    GeneratedDocument, GenerationOutput, IndexDocument, IndexFrontMatter, LanguageTab,
    PackageLink,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = Error::invalid_parameter("unit", "expected 'package' or 'file'");
        assert!(err.to_string().contains("unit"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_default_options() {
        assert_eq!(PluginOptions::default().unit, UnitKind::Package);
    }
}
