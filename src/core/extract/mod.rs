//! Static metadata extraction from component source text.
//!
//! Extraction is pattern based and never fails: a missing signal maps to an
//! empty or default value. The result is a pure function of the source text,
//! the component name and the [`DependencyRules`].

pub mod dependencies;
pub mod description;
pub mod patterns;

use serde::Serialize;

pub use dependencies::{Dependencies, DependencyRules, ModuleRef};

use crate::config::Config;

/// Derived facts about one component source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub description: String,
    pub exported_symbols: Vec<String>,
    pub dependencies: Dependencies,
    pub has_variants: bool,
    pub has_sizes: bool,
    pub style_tokens: Vec<String>,
}

/// Extracts [`ComponentMetadata`] using the configured dependency rules.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    rules: DependencyRules,
}

impl MetadataExtractor {
    pub fn new(rules: DependencyRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(DependencyRules {
            internal_alias: config.internal_alias.clone(),
            infrastructure_modules: config.infrastructure_modules.clone(),
            peer_dependencies: config.peer_dependencies.clone(),
        })
    }

    pub fn rules(&self) -> &DependencyRules {
        &self.rules
    }

    pub fn extract(&self, source: &str, name: &str) -> ComponentMetadata {
        ComponentMetadata {
            description: description::describe(source, name),
            exported_symbols: patterns::exported_symbols(source),
            dependencies: self.rules.extract(source),
            has_variants: patterns::VARIANTS.detect(source),
            has_sizes: patterns::SIZES.detect(source),
            style_tokens: patterns::style_tokens(source),
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
