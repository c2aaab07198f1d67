//! Offline rendering from an encoded FileDescriptorSet

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use prost::Message;
use prost_types::FileDescriptorSet;
use serde::Serialize;
use slate_core::generation::emit;
use slate_core::options::parse_languages;
use slate_core::{DescriptorGraph, DirectorySink, FsSourceReader, Generator, PluginOptions};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;

/// What a render run wrote
#[derive(Debug, Serialize)]
pub struct RenderSummary {
    pub out_dir: PathBuf,
    pub documents: Vec<String>,
    pub index: Option<String>,
}

/// Handle the render command
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("render", &args.descriptor_set.display().to_string());

    if !args.descriptor_set.exists() {
        return Err(Error::FileNotFound {
            path: args.descriptor_set.clone(),
        });
    }
    output.info(&format!("Rendering {}", args.descriptor_set.display()))?;

    let bytes = std::fs::read(&args.descriptor_set)?;
    let set = FileDescriptorSet::decode(bytes.as_slice())
        .map_err(|e| Error::decode("FileDescriptorSet", e))?;
    let graph = DescriptorGraph::from_file_descriptors(&set.file)?;

    let options = options_for(&args, config);
    let sources = FsSourceReader::new(&options.source_dir);
    let generator = Generator::new(options);

    let result = if args.files.is_empty() {
        generator.generate(&graph, &sources)?
    } else {
        let packages = target_packages(&graph, &args.files)?;
        generator.generate_selected(&graph, &sources, |f| packages.contains(&f.package))?
    };

    let mut sink = DirectorySink::new(&args.out);
    emit(&result, &mut sink)?;
    info!(out = %args.out.display(), documents = result.documents.len(), "Render finished");

    let summary = RenderSummary {
        out_dir: args.out.clone(),
        documents: result.documents.iter().map(|d| d.path.clone()).collect(),
        index: result.index.as_ref().map(|i| i.path.clone()),
    };
    output.success(&format!(
        "✓ Wrote {} document(s) to {}",
        summary.documents.len(),
        summary.out_dir.display()
    ))?;
    output.data(&summary)
}

/// Config file defaults with command-line flags applied on top
fn options_for(args: &RenderArgs, config: &Config) -> PluginOptions {
    let mut options = config.generator.clone();
    if let Some(languages) = &args.languages {
        options.languages = parse_languages(languages);
    }
    if let Some(index_path) = &args.index_path {
        options.index_path = Some(index_path.clone()).filter(|p| !p.is_empty());
    }
    if let Some(source_dir) = &args.source_dir {
        options.source_dir = source_dir.clone();
    }
    if let Some(unit) = args.unit {
        options.unit = unit.into();
    }
    options
}

/// Packages owning the requested files
fn target_packages(graph: &DescriptorGraph, files: &[String]) -> Result<BTreeSet<String>> {
    files
        .iter()
        .map(|name| {
            graph
                .file(name)
                .map(|f| f.package.clone())
                .ok_or_else(|| Error::other(format!("'{name}' is not part of the descriptor set")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, UnitArg};
    use prost_types::{DescriptorProto, FileDescriptorProto};
    use slate_core::UnitKind;

    fn file(name: &str, package: &str, message: &str) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some(name.to_string()),
            package: Some(package.to_string()),
            message_type: vec![DescriptorProto {
                name: Some(message.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn args(descriptor_set: PathBuf, out: PathBuf) -> RenderArgs {
        RenderArgs {
            descriptor_set,
            out,
            languages: None,
            index_path: None,
            source_dir: None,
            unit: None,
            files: Vec::new(),
        }
    }

    fn write_set(dir: &std::path::Path) -> PathBuf {
        let set = FileDescriptorSet {
            file: vec![
                file("google/protobuf/empty.proto", "google.protobuf", "Empty"),
                file("shop/v1/order.proto", "shop.v1", "Order"),
                file("auth/v1/user.proto", "auth.v1", "User"),
            ],
        };
        let path = dir.join("set.binpb");
        std::fs::write(&path, set.encode_to_vec()).unwrap();
        path
    }

    fn quiet_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_render_writes_documents_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        let mut render = args(write_set(dir.path()), out.clone());
        render.languages = Some("ruby;python".to_string());
        render.index_path = Some("index.md".to_string());

        handle_render(render, &Config::default(), &mut quiet_output()).unwrap();

        let order = std::fs::read_to_string(out.join("_shop.v1_pb.md")).unwrap();
        assert!(order.contains("message = Order.new(\n)"));
        assert!(out.join("_auth.v1_pb.md").exists());
        assert!(!out.join("_google.protobuf_pb.md").exists());

        let index = std::fs::read_to_string(out.join("index.md")).unwrap();
        assert!(index.contains("- _auth.v1_pb.md\n- _shop.v1_pb.md\n"));
        assert!(index.contains("- ruby\n- python\n"));
    }

    #[test]
    fn test_file_filter_limits_packages() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        let mut render = args(write_set(dir.path()), out.clone());
        render.files = vec!["auth/v1/user.proto".to_string()];

        handle_render(render, &Config::default(), &mut quiet_output()).unwrap();
        assert!(out.join("auth.v1_pb.md").exists());
        assert!(!out.join("shop.v1_pb.md").exists());
    }

    #[test]
    fn test_unknown_file_filter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut render = args(write_set(dir.path()), dir.path().join("docs"));
        render.files = vec!["missing.proto".to_string()];

        let err = handle_render(render, &Config::default(), &mut quiet_output()).unwrap_err();
        assert!(err.to_string().contains("missing.proto"));
    }

    #[test]
    fn test_missing_descriptor_set() {
        let dir = tempfile::tempdir().unwrap();
        let render = args(dir.path().join("nope.binpb"), dir.path().to_path_buf());
        let err = handle_render(render, &Config::default(), &mut quiet_output()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_garbage_descriptor_set_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.binpb");
        std::fs::write(&path, [0xff, 0xff, 0xff]).unwrap();
        let err = handle_render(args(path, dir.path().to_path_buf()), &Config::default(), &mut quiet_output())
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.generator.languages = vec!["protobuf".to_string()];
        config.generator.index_path = Some("index.md".to_string());

        let mut render = args(PathBuf::from("set.binpb"), PathBuf::from("docs"));
        render.languages = Some("ruby".to_string());
        render.index_path = Some(String::new());
        render.unit = Some(UnitArg::File);

        let options = options_for(&render, &config);
        assert_eq!(options.languages, vec!["ruby"]);
        assert_eq!(options.index_path, None);
        assert_eq!(options.unit, UnitKind::File);
        assert_eq!(options.source_dir, PathBuf::from("schemas"));
    }
}
