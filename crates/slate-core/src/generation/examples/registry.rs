//! Language registry with checked lookup
//!
//! Copyright (c) 2025 Slate Docs Team
//! Licensed under the Apache-2.0 license

use super::built_in;
use super::types::{ExampleInput, ExampleStrategy};
use crate::error::{Error, Result};
use crate::types::LanguageTab;
use std::collections::BTreeMap;
use tracing::trace;

/// Maps language identifiers to example strategies
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    strategies: BTreeMap<String, ExampleStrategy>,
}

impl LanguageRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in strategies
    pub fn with_builtins() -> Self {
        built_in::defaults()
            .into_iter()
            .fold(Self::new(), |registry, (language, strategy)| {
                registry.register(language, strategy)
            })
    }

    /// Register (or replace) the strategy for `language`
    pub fn register(mut self, language: impl Into<String>, strategy: ExampleStrategy) -> Self {
        self.strategies.insert(language.into(), strategy);
        self
    }

    /// Strategy for `language`, if registered
    pub fn get(&self, language: &str) -> Option<&ExampleStrategy> {
        self.strategies.get(language)
    }

    /// Registered identifiers in sorted order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    /// Look up every configured language, failing on the first unknown one
    pub fn resolve<'a>(&'a self, languages: &'a [String]) -> Result<ResolvedLanguages<'a>> {
        let entries = languages
            .iter()
            .map(|language| {
                self.get(language)
                    .map(|strategy| (language.as_str(), strategy))
                    .ok_or_else(|| Error::UnknownLanguage {
                        language: language.clone(),
                        available: self.languages().map(str::to_string).collect(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ResolvedLanguages { entries })
    }
}

/// Configured languages bound to their strategies, in configuration order
#[derive(Debug, Clone)]
pub struct ResolvedLanguages<'a> {
    entries: Vec<(&'a str, &'a ExampleStrategy)>,
}

impl<'a> ResolvedLanguages<'a> {
    /// Language identifiers in configuration order
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render one tab per configured language
    pub fn tabs(&self, input: &ExampleInput<'_>) -> Result<Vec<LanguageTab>> {
        self.entries
            .iter()
            .map(|(language, strategy)| {
                trace!(
                    language = *language,
                    strategy = strategy.describe(),
                    message = %input.message.full_name,
                    "Synthesizing example"
                );
                Ok(LanguageTab {
                    language: language.to_string(),
                    code_example: strategy.synthesize(input)?,
                })
            })
            .collect()
    }
}
