//! Property-based testing strategies for descriptor models
//!
//! Strategies generate structurally valid messages (one-of indices always in
//! range) and the properties below check the rendering invariants against
//! them.

#![cfg(test)]

use crate::descriptor::{DescriptorGraph, Field, FieldType, File, Label, Message, OneOf};
use crate::generation::assembler::field_table;
use crate::generation::examples::{built_in, ExampleInput, LanguageRegistry};
use crate::generation::index::IndexAggregator;
use crate::generation::Generator;
use crate::options::PluginOptions;
use crate::source::MemorySourceReader;
use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy for field types, including ones without a display label
pub fn field_type_strategy() -> impl Strategy<Value = FieldType> {
    (1..=18i32).prop_map(FieldType::from_code)
}

pub fn label_strategy() -> impl Strategy<Value = Label> {
    (1..=3i32).prop_map(Label::from_code)
}

/// Strategy for a field, optionally tagged with a one-of slot
pub fn field_strategy(oneofs: usize) -> impl Strategy<Value = Field> {
    (
        "[a-z][a-z0-9_]{0,12}",
        field_type_strategy(),
        label_strategy(),
        prop::option::of(0..oneofs.max(1)),
    )
        .prop_map(move |(name, field_type, label, slot)| Field {
            name,
            number: 1,
            field_type,
            label,
            type_name: None,
            oneof_index: slot.filter(|_| oneofs > 0),
            proto3_optional: false,
            leading_comments: String::new(),
            trailing_comments: String::new(),
        })
}

/// Strategy for a message with up to three one-of declarations
pub fn message_strategy() -> impl Strategy<Value = Message> {
    (0..=3usize)
        .prop_flat_map(|oneofs| (Just(oneofs), vec(field_strategy(oneofs), 0..12)))
        .prop_map(|(oneofs, fields)| {
            let decls = (0..oneofs)
                .map(|i| OneOf {
                    name: format!("Choice{i}"),
                    leading_comments: String::new(),
                })
                .collect();
            Message::new("Sample", "prop.v1.Sample", fields, decls)
        })
}

/// Strategy for ordered, duplicate-free language lists
pub fn languages_strategy() -> impl Strategy<Value = Vec<String>> {
    Just(vec!["protobuf", "ruby", "javascript", "java", "python"])
        .prop_shuffle()
        .prop_flat_map(|all| {
            let len = all.len();
            (Just(all), 0..=len)
        })
        .prop_map(|(all, n)| all[..n].iter().map(|s| s.to_string()).collect())
}

fn sources() -> MemorySourceReader {
    MemorySourceReader::new().with_source("prop/v1/sample.proto", "syntax = \"proto3\";\n")
}

proptest! {
    #[test]
    fn prop_table_has_one_row_per_plain_field_and_group(message in message_strategy()) {
        let table = field_table(&message);
        let rows = table.lines().count() - 2;

        let plain = message.fields.iter().filter(|f| f.oneof_index.is_none()).count();
        prop_assert_eq!(rows, plain + message.oneof_groups().len());
    }

    #[test]
    fn prop_group_rows_follow_plain_rows(message in message_strategy()) {
        let table = field_table(&message);
        let body: Vec<&str> = table.lines().skip(2).collect();
        let plain = message.plain_fields().count();
        for (i, row) in body.iter().enumerate() {
            prop_assert_eq!(i >= plain, row.starts_with("| Choice"));
        }
    }

    #[test]
    fn prop_tabs_follow_configured_order(languages in languages_strategy()) {
        let registry = LanguageRegistry::with_builtins()
            .register("elixir", built_in::empty());
        let resolved = registry.resolve(&languages).unwrap();

        let mut file = File::new("prop/v1/sample.proto", "prop.v1");
        file.messages.push(Message::new("Sample", "prop.v1.Sample", vec![], vec![]));
        let sources = sources();
        let input = ExampleInput {
            message: &file.messages[0],
            file: &file,
            sources: &sources,
        };

        let tabs = resolved.tabs(&input).unwrap();
        let order: Vec<&str> = tabs.iter().map(|t| t.language.as_str()).collect();
        prop_assert_eq!(order, languages.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_index_includes_are_sorted(paths in vec("_?[a-z.]{1,10}_pb\\.md", 0..10)) {
        let mut index = IndexAggregator::new();
        index.extend(paths.iter().cloned());
        let includes = index.includes();
        prop_assert!(includes.windows(2).all(|w| w[0] < w[1]));
        for path in &paths {
            prop_assert!(includes.contains(path));
        }
    }

    #[test]
    fn prop_generation_is_deterministic(
        message in message_strategy(),
        languages in languages_strategy(),
    ) {
        let mut file = File::new("prop/v1/sample.proto", "prop.v1");
        file.messages.push(message);
        let graph = DescriptorGraph::new(vec![file]);
        let options = PluginOptions {
            languages,
            index_path: Some("index.md".to_string()),
            ..Default::default()
        };
        let generator = Generator::new(options);
        let sources = sources();

        let first = generator.generate(&graph, &sources).unwrap();
        let second = generator.generate(&graph, &sources).unwrap();
        prop_assert_eq!(first, second);
    }
}
