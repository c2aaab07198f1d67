//! Strategies shipped with the generator
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use super::types::{ConstructionTemplate, ExampleStrategy, NamespaceOption};

/// Verbatim `.proto` source
pub fn raw_schema() -> ExampleStrategy {
    ExampleStrategy::RawSchema
}

/// An empty tab
pub fn empty() -> ExampleStrategy {
    ExampleStrategy::Empty
}

/// `include Namespace` followed by `Class.new(field: 'abcdef', ...)`
pub fn ruby() -> ExampleStrategy {
    ExampleStrategy::Construction(ConstructionTemplate {
        namespace_option: NamespaceOption::RubyPackage,
        namespace_separator: "::".to_string(),
        header: "include {namespace}".to_string(),
        open: "message = {class}.new(".to_string(),
        assignment: "  {field}: {value},".to_string(),
        close: ")".to_string(),
        placeholder: "'abcdef'".to_string(),
    })
}

/// Built-in language identifiers and their strategies
pub fn defaults() -> Vec<(&'static str, ExampleStrategy)> {
    vec![
        ("protobuf", raw_schema()),
        ("ruby", ruby()),
        ("javascript", empty()),
        ("java", empty()),
        ("python", empty()),
    ]
}
