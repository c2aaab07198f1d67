//! Documentation units
//!
//! A unit is the set of files rendered into one markdown document: either a
//! whole package or a single file.
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::{is_well_known, DescriptorGraph, File};
use crate::naming::{dotted_lower_snake_case, last_segments};
use crate::options::UnitKind;

/// Package segments shown in a document heading
const HEADING_SEGMENTS: usize = 2;

/// Qualified name used when a file declares no package
pub const DEFAULT_PACKAGE: &str = "default";

/// Suffix of every generated document
pub const DOCUMENT_SUFFIX: &str = "_pb.md";

/// Files rendered together into one document
#[derive(Debug, Clone)]
pub struct DocumentUnit<'a> {
    /// Dotted name, e.g. `shop.v1` or `shop.v1.order`
    pub qualified_name: String,
    pub files: Vec<&'a File>,
}

impl<'a> DocumentUnit<'a> {
    /// Heading text: the trailing two segments of the qualified name
    pub fn heading(&self) -> String {
        last_segments(&self.qualified_name, HEADING_SEGMENTS).join(".")
    }

    /// Document path, `_` prefixed when an index includes it
    pub fn output_path(&self, indexed: bool) -> String {
        let prefix = if indexed { "_" } else { "" };
        format!(
            "{prefix}{}{DOCUMENT_SUFFIX}",
            dotted_lower_snake_case(&self.qualified_name)
        )
    }
}

fn package_name(package: &str) -> &str {
    if package.is_empty() {
        DEFAULT_PACKAGE
    } else {
        package
    }
}

/// Split the selected files of `graph` into units.
///
/// Packages keep first-seen order; well-known-type packages never form a unit.
pub fn units<'a>(
    graph: &'a DescriptorGraph,
    kind: UnitKind,
    selected: impl Fn(&File) -> bool,
) -> Vec<DocumentUnit<'a>> {
    let mut out = Vec::new();
    for package in graph.packages() {
        if is_well_known(&package.name) {
            continue;
        }
        let files: Vec<&File> = package.files.iter().filter(|f| selected(f)).collect();
        if files.is_empty() {
            continue;
        }

        let name = package_name(&package.name);
        match kind {
            UnitKind::Package => out.push(DocumentUnit {
                qualified_name: name.to_string(),
                files,
            }),
            UnitKind::File => out.extend(files.into_iter().map(|file| DocumentUnit {
                qualified_name: format!("{name}.{}", file.stem()),
                files: vec![file],
            })),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> DescriptorGraph {
        DescriptorGraph::new(vec![
            File::new("shop/v1/order.proto", "shop.v1"),
            File::new("google/protobuf/timestamp.proto", "google.protobuf"),
            File::new("shop/v1/OrderItems.proto", "shop.v1"),
            File::new("loose.proto", ""),
        ])
    }

    #[test]
    fn test_package_units() {
        let graph = graph();
        let units = units(&graph, UnitKind::Package, |_| true);
        let names: Vec<_> = units.iter().map(|u| u.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["shop.v1", "default"]);
        assert_eq!(units[0].files.len(), 2);
        assert_eq!(units[0].heading(), "shop.v1");
        assert_eq!(units[0].output_path(false), "shop.v1_pb.md");
        assert_eq!(units[0].output_path(true), "_shop.v1_pb.md");
    }

    #[test]
    fn test_file_units() {
        let graph = graph();
        let units = units(&graph, UnitKind::File, |_| true);
        let paths: Vec<_> = units.iter().map(|u| u.output_path(false)).collect();
        assert_eq!(
            paths,
            vec!["shop.v1.order_pb.md", "shop.v1.order_items_pb.md", "default.loose_pb.md"]
        );
        assert_eq!(units[1].heading(), "v1.OrderItems");
    }

    #[test]
    fn test_selection_drops_empty_packages() {
        let graph = graph();
        let units = units(&graph, UnitKind::Package, |f| f.name == "loose.proto");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].qualified_name, "default");
    }

    #[test]
    fn test_heading_of_deep_package() {
        let unit = DocumentUnit {
            qualified_name: "acme.shop.orders.v1".to_string(),
            files: Vec::new(),
        };
        assert_eq!(unit.heading(), "orders.v1");
        assert_eq!(unit.output_path(false), "acme.shop.orders.v1_pb.md");
    }
}
