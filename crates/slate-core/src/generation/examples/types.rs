//! Core types for example synthesis
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::{File, FileOptions, Message};
use crate::error::Result;
use crate::naming::{lower_snake_case, upper_camel_case};
use crate::source::SourceReader;

/// What a strategy may look at when rendering a message
#[derive(Clone, Copy)]
pub struct ExampleInput<'a> {
    pub message: &'a Message,
    /// The file declaring `message`
    pub file: &'a File,
    pub sources: &'a dyn SourceReader,
}

/// A function that renders the example for one message
pub type SynthesizerFunction = fn(&ExampleInput<'_>) -> Result<String>;

/// File option supplying a language namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceOption {
    RubyPackage,
}

impl NamespaceOption {
    /// The option value, if set and non-empty
    pub fn lookup(self, options: &FileOptions) -> Option<&str> {
        let value = match self {
            Self::RubyPackage => &options.ruby_package,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Line templates for an illustrative object construction.
///
/// Placeholders: `{namespace}` in `header`, `{class}` in `open`, and
/// `{field}` / `{value}` in `assignment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionTemplate {
    pub namespace_option: NamespaceOption,
    /// Replaces `.` in the proto package
    pub namespace_separator: String,
    pub header: String,
    pub open: String,
    pub assignment: String,
    pub close: String,
    /// Literal bound to every field
    pub placeholder: String,
}

impl ConstructionTemplate {
    /// Namespace from the language option, falling back to the proto package
    pub fn namespace(&self, file: &File) -> String {
        match self.namespace_option.lookup(&file.options) {
            Some(value) => value.replace('.', &self.namespace_separator),
            None => file.package.replace('.', &self.namespace_separator),
        }
    }

    /// Render the construction example for `message`
    pub fn render(&self, message: &Message, file: &File) -> String {
        let mut lines = vec![
            self.header.replace("{namespace}", &self.namespace(file)),
            String::new(),
            self.open.replace("{class}", &upper_camel_case(&message.name)),
        ];
        lines.extend(message.plain_fields().map(|field| {
            self.assignment
                .replace("{field}", &lower_snake_case(&field.name))
                .replace("{value}", &self.placeholder)
        }));
        lines.push(self.close.clone());
        lines.join("\n")
    }
}

/// How a language tab gets its content
#[derive(Debug, Clone)]
pub enum ExampleStrategy {
    /// Embed the verbatim schema source of the declaring file
    RawSchema,
    /// Render an illustrative construction from a template
    Construction(ConstructionTemplate),
    /// Render nothing; the tab is still shown
    Empty,
    /// Delegate to a function
    Custom {
        name: String,
        synthesizer: SynthesizerFunction,
    },
}

impl ExampleStrategy {
    /// Produce the tab content for one message
    pub fn synthesize(&self, input: &ExampleInput<'_>) -> Result<String> {
        match self {
            Self::RawSchema => input.sources.read_source(&input.file.name),
            Self::Construction(template) => Ok(template.render(input.message, input.file)),
            Self::Empty => Ok(String::new()),
            Self::Custom { synthesizer, .. } => synthesizer(input),
        }
    }

    /// Short description used in logs
    pub fn describe(&self) -> &str {
        match self {
            Self::RawSchema => "raw-schema",
            Self::Construction(_) => "construction",
            Self::Empty => "empty",
            Self::Custom { name, .. } => name,
        }
    }
}
