//! Registry units: one manifest document per component.
//!
//! The serialized shape is what the installation client consumes from
//! `<registry-url>/components/<name>.json`. It writes `files[].content` verbatim
//! to `files[].target` in the consumer project, so the content must be the exact
//! source text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    discover::{Category, ComponentSource},
    extract::{ComponentMetadata, patterns::theme_extension},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub description: String,
    pub version: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub registry_dependencies: Vec<String>,
    pub files: Vec<RegistryFile>,
    #[serde(rename = "tailwind")]
    pub style_extensions: StyleExtensions,
    pub meta: EntryMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub name: String,
    pub content: String,
    #[serde(rename = "target")]
    pub target_path: String,
}

/// `tailwind.config.theme.extend` stub seeded from the referenced style tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleExtensions {
    pub config: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub extend: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMeta {
    #[serde(rename = "source")]
    pub source_path: String,
    pub generated_at: String,
    #[serde(rename = "exports")]
    pub exported_symbols: Vec<String>,
    pub has_variants: bool,
    pub has_sizes: bool,
}

/// The slice of an entry listed in the registry index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub description: String,
    pub version: String,
    pub has_variants: bool,
    pub has_sizes: bool,
}

/// Where the installer materializes a component: `src/components/<ui|custom>/<name>.<ext>`.
pub fn target_path(source: &ComponentSource) -> String {
    format!(
        "src/components/{}/{}.{}",
        source.category.dir_name(),
        source.name,
        source.extension
    )
}

/// Build the registry unit for one component.
///
/// `content` is embedded unmodified.
pub fn synthesize(
    source: &ComponentSource,
    content: String,
    metadata: ComponentMetadata,
    version: &str,
    generated_at: &str,
) -> RegistryEntry {
    let ComponentMetadata {
        description,
        exported_symbols,
        dependencies,
        has_variants,
        has_sizes,
        style_tokens,
    } = metadata;

    RegistryEntry {
        name: source.name.clone(),
        category: source.category,
        description,
        version: version.to_string(),
        dependencies: dependencies.external,
        dev_dependencies: Vec::new(),
        registry_dependencies: dependencies.internal,
        files: vec![RegistryFile {
            name: format!("{}.{}", source.name, source.extension),
            content,
            target_path: target_path(source),
        }],
        style_extensions: StyleExtensions {
            config: ThemeConfig {
                theme: Theme {
                    extend: theme_extension(&style_tokens),
                },
            },
        },
        meta: EntryMeta {
            source_path: source.relative_path.clone(),
            generated_at: generated_at.to_string(),
            exported_symbols,
            has_variants,
            has_sizes,
        },
    }
}

impl RegistryEntry {
    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            version: self.version.clone(),
            has_variants: self.meta.has_variants,
            has_sizes: self.meta.has_sizes,
        }
    }
}
