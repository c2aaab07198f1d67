//! Documentation generation pipeline
//!
//! The [`Generator`] turns a [`DescriptorGraph`] into one markdown document per
//! unit plus an optional aggregated index:
//!
//! 1. resolve the configured languages against the [`LanguageRegistry`]
//! 2. split the graph into [`DocumentUnit`]s, skipping well-known types
//! 3. render every unit with the [`DocumentAssembler`]
//! 4. collect the document paths into the index
//!
//! Nothing reaches an [`OutputSink`] until every document rendered, so a
//! failed run leaves no partial output behind.
//!
//! # Examples
//!
//! ```
//! use slate_core::descriptor::{DescriptorGraph, File, Message};
//! use slate_core::generation::Generator;
//! use slate_core::options::PluginOptions;
//! use slate_core::sink::MemorySink;
//! use slate_core::source::MemorySourceReader;
//!
//! let mut file = File::new("shop/v1/order.proto", "shop.v1");
//! file.messages.push(Message::new("Order", "shop.v1.Order", vec![], vec![]));
//! let graph = DescriptorGraph::new(vec![file]);
//!
//! let options = PluginOptions::parse("languages=ruby,index_path=index.md").unwrap();
//! let mut sink = MemorySink::default();
//! let output = Generator::new(options)
//!     .run(&graph, &MemorySourceReader::new(), &mut sink)
//!     .unwrap();
//!
//! assert_eq!(output.documents[0].path, "_shop.v1_pb.md");
//! assert_eq!(sink.index.unwrap().path, "index.md");
//! ```
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

pub mod assembler;
pub mod examples;
pub mod index;
pub mod labels;
pub mod links;
pub mod markdown;
pub mod unit;

pub use assembler::DocumentAssembler;
pub use examples::{LanguageRegistry, ResolvedLanguages};
pub use index::IndexAggregator;
pub use unit::DocumentUnit;

use crate::descriptor::{DescriptorGraph, File};
use crate::error::Result;
use crate::options::PluginOptions;
use crate::sink::OutputSink;
use crate::source::SourceReader;
use crate::types::GenerationOutput;
use tracing::{debug, info, instrument};

/// Renders documentation for a descriptor graph
#[derive(Debug, Clone)]
pub struct Generator {
    options: PluginOptions,
    registry: LanguageRegistry,
}

impl Generator {
    /// Generator with the built-in language strategies
    pub fn new(options: PluginOptions) -> Self {
        Self {
            options,
            registry: LanguageRegistry::with_builtins(),
        }
    }

    /// Replace the language registry
    pub fn with_registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Render every file of the graph
    pub fn generate(
        &self,
        graph: &DescriptorGraph,
        sources: &dyn SourceReader,
    ) -> Result<GenerationOutput> {
        self.generate_selected(graph, sources, |_| true)
    }

    /// Render the files accepted by `selected`.
    ///
    /// The index covers exactly the units rendered here; callers must pass
    /// the whole unit set of a run in one call.
    #[instrument(skip_all, fields(unit = %self.options.unit))]
    pub fn generate_selected(
        &self,
        graph: &DescriptorGraph,
        sources: &dyn SourceReader,
        selected: impl Fn(&File) -> bool,
    ) -> Result<GenerationOutput> {
        let languages = self.registry.resolve(&self.options.languages)?;
        debug!(languages = ?languages.names().collect::<Vec<_>>(), "Resolved languages");

        let assembler = DocumentAssembler::new(graph, &languages, sources)
            .indexed(self.options.has_index());

        let units = unit::units(graph, self.options.unit, selected);
        let documents = units
            .iter()
            .map(|unit| assembler.render_unit(unit))
            .collect::<Result<Vec<_>>>()?;

        let index = match &self.options.index_path {
            Some(path) => {
                let mut aggregator = IndexAggregator::new();
                aggregator.extend(documents.iter().map(|d| d.path.clone()));
                Some(aggregator.finish(path, &self.options.languages)?)
            }
            None => None,
        };

        info!(
            documents = documents.len(),
            index = index.is_some(),
            "Generated documentation"
        );
        Ok(GenerationOutput { documents, index })
    }

    /// Render every file and hand the results to `sink`
    pub fn run(
        &self,
        graph: &DescriptorGraph,
        sources: &dyn SourceReader,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerationOutput> {
        let output = self.generate(graph, sources)?;
        emit(&output, sink)?;
        Ok(output)
    }
}

/// Write documents, then the index, to `sink`
pub fn emit(output: &GenerationOutput, sink: &mut dyn OutputSink) -> Result<()> {
    for document in &output.documents {
        sink.write_document(document)?;
    }
    if let Some(index) = &output.index {
        sink.write_index(index)?;
    }
    Ok(())
}
