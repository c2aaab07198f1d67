//! protoc plugin mode
//!
//! protoc writes an encoded `CodeGeneratorRequest` to stdin and expects an
//! encoded `CodeGeneratorResponse` on stdout. Documents travel back inside the
//! response; the aggregated index is written straight to disk so it can carry
//! its file mode.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File as ResponseFile};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use slate_core::generation::emit;
use slate_core::{
    DescriptorGraph, DirectorySink, FsSourceReader, GeneratedDocument, Generator, IndexDocument,
    OutputSink,
};
use std::collections::BTreeSet;
use std::io::{Read, Write};
use tracing::{debug, error, info};

/// Collects documents for the response and writes the index to disk
pub struct ResponseSink {
    files: Vec<ResponseFile>,
    index: DirectorySink,
}

impl ResponseSink {
    /// Index paths are resolved against `index_root`
    pub fn new(index_root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            files: Vec::new(),
            index: DirectorySink::new(index_root),
        }
    }

    pub fn into_files(self) -> Vec<ResponseFile> {
        self.files
    }
}

impl OutputSink for ResponseSink {
    fn write_document(&mut self, document: &GeneratedDocument) -> slate_core::Result<()> {
        self.files.push(ResponseFile {
            name: Some(document.path.clone()),
            content: Some(document.content.clone()),
            ..Default::default()
        });
        Ok(())
    }

    fn write_index(&mut self, index: &IndexDocument) -> slate_core::Result<()> {
        self.index.write_index(index)
    }
}

/// Read a request from stdin, answer on stdout
pub fn run(config: &Config) -> Result<()> {
    let _timer = Timer::new("plugin");

    let mut input = Vec::new();
    std::io::stdin().lock().read_to_end(&mut input)?;
    let request = CodeGeneratorRequest::decode(input.as_slice())
        .map_err(|e| Error::decode("CodeGeneratorRequest", e))?;
    debug!(
        files = request.proto_file.len(),
        targets = request.file_to_generate.len(),
        parameter = request.parameter(),
        "Decoded plugin request"
    );

    let (response, outcome) = match respond(&request, config, ".") {
        Ok(files) => (success(files), Ok(())),
        Err(e) => {
            error!(error = %e, "Generation failed");
            (failure(&e), Err(e))
        }
    };

    let mut out = Vec::with_capacity(response.encoded_len());
    response.encode(&mut out)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;

    outcome
}

/// Render the packages owning the request's target files
pub fn respond(
    request: &CodeGeneratorRequest,
    config: &Config,
    index_root: &str,
) -> Result<Vec<ResponseFile>> {
    let options = config.plugin_options(request.parameter())?;
    let graph = DescriptorGraph::from_file_descriptors(&request.proto_file)?;

    let packages: BTreeSet<&str> = request
        .file_to_generate
        .iter()
        .filter_map(|name| graph.file(name))
        .map(|file| file.package.as_str())
        .collect();

    let sources = FsSourceReader::new(&options.source_dir);
    let generator = Generator::new(options);
    let output =
        generator.generate_selected(&graph, &sources, |f| packages.contains(f.package.as_str()))?;

    let mut sink = ResponseSink::new(index_root);
    emit(&output, &mut sink)?;
    info!(documents = output.documents.len(), "Plugin response ready");
    Ok(sink.into_files())
}

fn success(files: Vec<ResponseFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        file: files,
        ..Default::default()
    }
}

fn failure(error: &Error) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: Some(error.to_string()),
        ..Default::default()
    }
}
