//! The registry index: a summary of every unit written in a run.

use serde::{Deserialize, Serialize};

use super::{
    discover::Category,
    entry::{ComponentSummary, RegistryEntry},
};

/// Registry-wide values that do not come from any single component.
#[derive(Debug, Clone)]
pub struct IndexInfo<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub description: &'a str,
    pub registry_url: &'a str,
    pub generated_at: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryIndex {
    pub name: String,
    pub version: String,
    pub description: String,
    pub components: Vec<ComponentSummary>,
    pub stats: IndexStats,
    pub generated_at: String,
    #[serde(rename = "registryUrl")]
    pub distribution_endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub total_components: usize,
    pub ui_components: usize,
    pub custom_components: usize,
    pub components_with_variants: usize,
    pub components_with_sizes: usize,
}

impl IndexStats {
    fn record(mut self, summary: &ComponentSummary) -> Self {
        self.total_components += 1;
        match summary.category {
            Category::Ui => self.ui_components += 1,
            Category::Custom => self.custom_components += 1,
        }
        if summary.has_variants {
            self.components_with_variants += 1;
        }
        if summary.has_sizes {
            self.components_with_sizes += 1;
        }
        self
    }
}

/// Fold successfully written entries into the index, preserving their order.
pub fn aggregate(entries: &[RegistryEntry], info: &IndexInfo) -> RegistryIndex {
    let components: Vec<ComponentSummary> = entries.iter().map(RegistryEntry::summary).collect();
    let stats = components
        .iter()
        .fold(IndexStats::default(), IndexStats::record);

    RegistryIndex {
        name: info.name.to_string(),
        version: info.version.to_string(),
        description: info.description.to_string(),
        components,
        stats,
        generated_at: info.generated_at.to_string(),
        distribution_endpoint: info.registry_url.to_string(),
    }
}
