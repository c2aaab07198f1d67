//! Markdown document assembly
//!
//! Layout of a unit document, blocks separated by blank lines:
//!
//! ```text
//! # shop.v1
//! ## Order
//! ~~~protobuf ... ~~~        one block per configured language
//! <leading comments>         omitted when blank
//! ### Imports                omitted when empty
//! - [Payment](#shop-v1-payment)
//! ### Fields
//! | Parameter | Type | Label | Comments |
//! ```
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use super::examples::{ExampleInput, ResolvedLanguages};
use super::labels::{cardinality_label, type_label};
use super::links::package_links;
use super::markdown;
use super::unit::DocumentUnit;
use crate::descriptor::{DescriptorGraph, File, Message};
use crate::error::Result;
use crate::naming::upper_camel_case;
use crate::source::SourceReader;
use crate::types::{GeneratedDocument, LanguageTab};
use tracing::debug;

/// Renders units into markdown documents
pub struct DocumentAssembler<'a> {
    graph: &'a DescriptorGraph,
    languages: &'a ResolvedLanguages<'a>,
    sources: &'a dyn SourceReader,
    indexed: bool,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(
        graph: &'a DescriptorGraph,
        languages: &'a ResolvedLanguages<'a>,
        sources: &'a dyn SourceReader,
    ) -> Self {
        Self {
            graph,
            languages,
            sources,
            indexed: false,
        }
    }

    /// Name documents for inclusion by an aggregated index
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    /// Render one unit
    pub fn render_unit(&self, unit: &DocumentUnit<'_>) -> Result<GeneratedDocument> {
        let mut blocks = vec![markdown::heading(1, &unit.heading())];
        let mut count = 0;
        for file in &unit.files {
            for message in file.all_messages() {
                blocks.extend(self.message_blocks(file, message)?);
                count += 1;
            }
        }

        let path = unit.output_path(self.indexed);
        debug!(unit = %unit.qualified_name, path = %path, messages = count, "Rendered unit");
        Ok(GeneratedDocument {
            path,
            content: markdown::join_blocks(&blocks),
        })
    }

    /// Render the section for a single message
    pub fn render_message(&self, file: &File, message: &Message) -> Result<String> {
        Ok(self.message_blocks(file, message)?.join("\n\n"))
    }

    fn message_blocks(&self, file: &File, message: &Message) -> Result<Vec<String>> {
        let input = ExampleInput {
            message,
            file,
            sources: self.sources,
        };
        let tabs = self.languages.tabs(&input)?;

        let mut blocks = vec![markdown::heading(2, &message.name)];
        blocks.extend(tabs.iter().map(tab_block));
        blocks.extend(markdown::paragraph(&message.leading_comments));

        let links = package_links(self.graph.message_imports(file, message));
        if !links.is_empty() {
            blocks.push(markdown::heading(3, "Imports"));
            blocks.push(
                links
                    .iter()
                    .map(|link| markdown::link_item(&link.name, &link.url))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        blocks.push(markdown::heading(3, "Fields"));
        blocks.push(field_table(message));
        Ok(blocks)
    }
}

fn tab_block(tab: &LanguageTab) -> String {
    markdown::code_block(&tab.language, &tab.code_example)
}

/// Field table: plain fields first, then one row per one-of group
pub fn field_table(message: &Message) -> String {
    let mut rows = vec![markdown::table_header(&markdown::FIELD_TABLE_HEADER)];
    rows.extend(message.plain_fields().map(|field| {
        markdown::table_row(&[
            markdown::table_cell(&field.name),
            type_label(field.field_type).to_string(),
            cardinality_label(field.label).to_string(),
            markdown::table_cell(&field.trailing_comments),
        ])
    }));
    rows.extend(message.oneof_groups().iter().map(|group| {
        let alternatives = group
            .alternatives()
            .map(|f| upper_camel_case(&f.name))
            .collect::<Vec<_>>()
            .join(markdown::ALTERNATIVE_SEPARATOR);
        markdown::table_row(&[
            markdown::table_cell(&group.oneof.name),
            alternatives,
            String::new(),
            String::new(),
        ])
    }));
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Field, FieldType, Label, OneOf};
    use crate::generation::examples::LanguageRegistry;
    use crate::generation::unit::units;
    use crate::options::UnitKind;
    use crate::source::MemorySourceReader;

    fn field(name: &str, field_type: FieldType, label: Label, oneof: Option<usize>) -> Field {
        Field {
            name: name.to_string(),
            number: 1,
            field_type,
            label,
            type_name: None,
            oneof_index: oneof,
            proto3_optional: false,
            leading_comments: String::new(),
            trailing_comments: String::new(),
        }
    }

    fn order() -> Message {
        let mut id = field("id", FieldType::Int32, Label::Optional, None);
        id.trailing_comments = " Unique | stable\n id.\n".to_string();
        let mut order = Message::new(
            "Order",
            "shop.v1.Order",
            vec![
                id,
                field("card", FieldType::Message, Label::Optional, Some(0)),
                field("items", FieldType::Message, Label::Repeated, None),
                field("cash", FieldType::Message, Label::Optional, Some(0)),
            ],
            vec![OneOf {
                name: "payment".to_string(),
                leading_comments: String::new(),
            }],
        );
        order.leading_comments = " An order.\n".to_string();
        order
    }

    #[test]
    fn test_field_table_rows() {
        let table = field_table(&order());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(
            lines,
            vec![
                "| Parameter | Type | Label | Comments |",
                "| --------- | ---- | ----- | -------- |",
                "| id | int (32bit) | optional | Unique \\| stable id. |",
                "| items | message | repeated | |",
                "| payment | Card<br />Cash | | |",
            ]
        );
    }

    #[test]
    fn test_render_unit_layout() {
        let mut file = File::new("shop/v1/order.proto", "shop.v1");
        file.messages.push(order());
        let graph = DescriptorGraph::new(vec![file]);

        let registry = LanguageRegistry::with_builtins();
        let configured = vec!["protobuf".to_string(), "python".to_string()];
        let languages = registry.resolve(&configured).unwrap();
        let sources = MemorySourceReader::new().with_source("shop/v1/order.proto", "syntax = \"proto3\";\n");

        let assembler = DocumentAssembler::new(&graph, &languages, &sources);
        let unit = &units(&graph, UnitKind::Package, |_| true)[0];
        let document = assembler.render_unit(unit).unwrap();

        assert_eq!(document.path, "shop.v1_pb.md");
        assert!(document.content.starts_with(
            "# shop.v1\n\n## Order\n\n~~~protobuf\nsyntax = \"proto3\";\n~~~\n\n~~~python\n~~~\n\n An order.\n\n### Fields\n"
        ));
        assert!(!document.content.contains("### Imports"));
        assert!(document.content.ends_with("| payment | Card<br />Cash | | |\n"));
    }

    #[test]
    fn test_indexed_paths_are_prefixed() {
        let graph = DescriptorGraph::new(vec![File::new("shop/v1/order.proto", "shop.v1")]);
        let registry = LanguageRegistry::new();
        let languages = registry.resolve(&[]).unwrap();
        let sources = MemorySourceReader::new();

        let assembler = DocumentAssembler::new(&graph, &languages, &sources).indexed(true);
        let unit = &units(&graph, UnitKind::Package, |_| true)[0];
        let document = assembler.render_unit(unit).unwrap();
        assert_eq!(document.path, "_shop.v1_pb.md");
        assert_eq!(document.content, "# shop.v1\n");
    }

    #[test]
    fn test_render_message_lists_imports() {
        let mut payment = File::new("shop/v1/payment.proto", "shop.v1");
        payment.messages.push(Message::new("Card", "shop.v1.Card", vec![], vec![]));
        let mut timestamp = File::new("google/protobuf/timestamp.proto", "google.protobuf");
        timestamp
            .messages
            .push(Message::new("Timestamp", "google.protobuf.Timestamp", vec![], vec![]));

        let mut card = field("card", FieldType::Message, Label::Optional, None);
        card.type_name = Some("shop.v1.Card".to_string());
        let mut placed_at = field("placed_at", FieldType::Message, Label::Optional, None);
        placed_at.type_name = Some("google.protobuf.Timestamp".to_string());
        let mut order = File::new("shop/v1/order.proto", "shop.v1");
        order.messages.push(Message::new("Order", "shop.v1.Order", vec![card, placed_at], vec![]));

        let graph = DescriptorGraph::new(vec![payment, timestamp, order]);
        let registry = LanguageRegistry::new();
        let languages = registry.resolve(&[]).unwrap();
        let sources = MemorySourceReader::new();
        let assembler = DocumentAssembler::new(&graph, &languages, &sources);

        let file = graph.file("shop/v1/order.proto").unwrap();
        let section = assembler.render_message(file, &file.messages[0]).unwrap();
        assert!(section.contains("### Imports\n\n- [Payment](#shop-v1-payment)\n\n### Fields"));
        assert!(!section.contains("Timestamp]"));
    }

    #[test]
    fn test_missing_source_fails_the_unit() {
        let mut file = File::new("shop/v1/order.proto", "shop.v1");
        file.messages.push(order());
        let graph = DescriptorGraph::new(vec![file]);
        let registry = LanguageRegistry::with_builtins();
        let configured = vec!["protobuf".to_string()];
        let languages = registry.resolve(&configured).unwrap();
        let sources = MemorySourceReader::new();

        let assembler = DocumentAssembler::new(&graph, &languages, &sources);
        let unit = &units(&graph, UnitKind::Package, |_| true)[0];
        assert!(assembler.render_unit(unit).is_err());
    }
    #[test]
    fn test_field_table_includes_alternatives_added_later() {
        let mut message = Message::new(
            "Order",
            "shop.v1.Order",
            vec![field("id", FieldType::Int32, Label::Optional, None)],
            vec![OneOf {
                name: "payment".to_string(),
                leading_comments: String::new(),
            }],
        );
        message
            .fields
            .push(field("card", FieldType::Message, Label::Optional, Some(0)));

        let table = field_table(&message);
        assert!(table.ends_with("| id | int (32bit) | optional | |\n| payment | Card | | |"));
    }

    #[test]
    fn test_render_message_links_map_value_imports() {
        let mut money = File::new("billing/v1/money.proto", "billing.v1");
        money.messages.push(Message::new("Money", "billing.v1.Money", vec![], vec![]));

        let mut value = field("value", FieldType::Message, Label::Optional, None);
        value.type_name = Some(".billing.v1.Money".to_string());
        let mut entry = Message::new(
            "PricesEntry",
            "shop.v1.Order.PricesEntry",
            vec![field("key", FieldType::String, Label::Optional, None), value],
            vec![],
        );
        entry.map_entry = true;
        let mut prices = field("prices", FieldType::Message, Label::Repeated, None);
        prices.type_name = Some(".shop.v1.Order.PricesEntry".to_string());
        let mut message = Message::new("Order", "shop.v1.Order", vec![prices], vec![]);
        message.nested.push(entry);

        let mut order = File::new("shop/v1/order.proto", "shop.v1");
        order.dependencies = vec!["billing/v1/money.proto".to_string()];
        order.messages.push(message);

        let graph = DescriptorGraph::new(vec![money, order]);
        let registry = LanguageRegistry::new();
        let languages = registry.resolve(&[]).unwrap();
        let sources = MemorySourceReader::new();
        let assembler = DocumentAssembler::new(&graph, &languages, &sources);

        let file = graph.file("shop/v1/order.proto").unwrap();
        let section = assembler.render_message(file, &file.messages[0]).unwrap();
        assert!(section.contains("### Imports\n\n- [Money](#billing-v1-money)\n"));
    }
}
