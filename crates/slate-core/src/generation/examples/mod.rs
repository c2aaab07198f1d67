//! Per-language code examples for message documentation
//!
//! Every message gets one tab per configured language. The tab content comes
//! from an [`ExampleStrategy`] looked up in a [`LanguageRegistry`] by language
//! identifier.
//!
//! # Module Organization
//!
//! - [`types`] - strategy enum, construction templates and strategy inputs
//! - [`built_in`] - the strategies shipped with the generator
//! - [`registry`] - checked language lookup
//!
//! # Examples
//!
//! ```
//! use slate_core::generation::examples::{built_in, LanguageRegistry};
//!
//! let registry = LanguageRegistry::with_builtins()
//!     .register("elixir", built_in::empty());
//!
//! let languages = vec!["protobuf".to_string(), "elixir".to_string()];
//! assert!(registry.resolve(&languages).is_ok());
//!
//! let unknown = vec!["cobol".to_string()];
//! assert!(registry.resolve(&unknown).is_err());
//! ```
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

pub mod types;

pub mod built_in;

pub mod registry;


pub use registry::{LanguageRegistry, ResolvedLanguages};
pub use types::{
    ConstructionTemplate, ExampleInput, ExampleStrategy, NamespaceOption, SynthesizerFunction,
};
