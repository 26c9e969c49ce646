//! The registry build pipeline.
//!
//! Discover -> extract + synthesize + write (per component) -> reconcile -> index.
//!
//! All results are accumulated into a [`BuildReport`] that is returned by value;
//! no failure escapes [`RegistryBuilder::run`]. One bad component never stops
//! its siblings, and a failed stale-unit removal never stops the index write.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use glob::Pattern;
use thiserror::Error;

use super::{
    discover::{Category, ComponentSource, DiscoveryFilter, DiscoveryResult, discover_components},
    entry::{RegistryEntry, synthesize},
    extract::MetadataExtractor,
    index::{IndexInfo, IndexStats, aggregate},
    reconcile::{Removal, find_stale_units, remove_units},
    writer::{RegistryLayout, to_pretty_json, write_atomic},
};
use crate::{config::Config, utils::format_timestamp};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot serialize registry document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("name `{name}` is already used by a {existing} component")]
    NameCollision { name: String, existing: Category },
}

/// A component that did not produce a registry unit.
#[derive(Debug)]
pub struct ComponentFailure {
    pub name: String,
    pub category: Category,
    pub relative_path: String,
    pub error: BuildError,
}

/// What happened to `index.json`.
#[derive(Debug)]
pub enum IndexOutcome {
    Written { path: PathBuf, stats: IndexStats },
    /// Dry run: the index that would have been written.
    Planned { path: PathBuf, stats: IndexStats },
    /// Nothing was discovered; the previous index is left untouched.
    Skipped,
    Failed(BuildError),
}

#[derive(Debug)]
pub struct BuildReport {
    pub dry_run: bool,
    pub discovered: Vec<ComponentSource>,
    /// Directory entries that could not be read during discovery.
    pub skipped_count: usize,
    /// Units written (or, in a dry run, that would be written), in discovery order.
    pub entries: Vec<RegistryEntry>,
    pub failures: Vec<ComponentFailure>,
    /// Persisted units with no discovered component.
    pub stale_units: Vec<String>,
    /// Removal results; empty in a dry run.
    pub removals: Vec<Removal>,
    /// Listing the persisted units failed, so nothing was reconciled.
    pub reconcile_error: Option<io::Error>,
    pub index: IndexOutcome,
}

impl BuildReport {
    fn new(discovery: DiscoveryResult, dry_run: bool) -> Self {
        Self {
            dry_run,
            discovered: discovery.sources,
            skipped_count: discovery.skipped_count,
            entries: Vec::new(),
            failures: Vec::new(),
            stale_units: Vec::new(),
            removals: Vec::new(),
            reconcile_error: None,
            index: IndexOutcome::Skipped,
        }
    }

    pub fn attempted(&self) -> usize {
        self.discovered.len()
    }

    pub fn succeeded(&self) -> usize {
        self.entries.len()
    }

    pub fn attempted_in(&self, category: Category) -> usize {
        self.discovered
            .iter()
            .filter(|s| s.category == category)
            .count()
    }

    pub fn succeeded_in(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    pub fn failed_removals(&self) -> impl Iterator<Item = &Removal> {
        self.removals.iter().filter(|r| !r.is_ok())
    }

    /// Number of problems that should make the run exit unsuccessfully.
    pub fn error_count(&self) -> usize {
        let index_failed = matches!(self.index, IndexOutcome::Failed(_)) as usize;
        self.failures.len()
            + self.failed_removals().count()
            + self.reconcile_error.is_some() as usize
            + index_failed
    }
}

/// Builds the registry for one project.
pub struct RegistryBuilder {
    source_root: PathBuf,
    layout: RegistryLayout,
    extensions: Vec<String>,
    exclusions: Vec<Pattern>,
    extractor: MetadataExtractor,
    registry_name: String,
    registry_description: String,
    version: String,
    registry_url: String,
    dry_run: bool,
}

impl RegistryBuilder {
    /// Relative `sourceRoot`/`registryRoot` values resolve against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Path) -> Self {
        Self {
            source_root: base_dir.join(&config.source_root),
            layout: RegistryLayout::new(base_dir.join(&config.registry_root)),
            extensions: config.extensions.clone(),
            exclusions: config.exclusion_patterns(),
            extractor: MetadataExtractor::from_config(config),
            registry_name: config.registry_name.clone(),
            registry_description: config.registry_description.clone(),
            version: config.version.clone(),
            registry_url: config.registry_url.clone(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn layout(&self) -> &RegistryLayout {
        &self.layout
    }

    pub fn extractor(&self) -> &MetadataExtractor {
        &self.extractor
    }

    pub fn discover(&self) -> DiscoveryResult {
        let filter = DiscoveryFilter {
            extensions: &self.extensions,
            exclusions: &self.exclusions,
        };
        discover_components(&self.source_root, &filter)
    }

    /// Discover and build in one pass.
    pub fn run(&self, generated_at: DateTime<Utc>) -> BuildReport {
        let discovery = self.discover();
        self.build(discovery, generated_at)
    }

    /// Build the registry from an existing discovery result.
    pub fn build(&self, discovery: DiscoveryResult, generated_at: DateTime<Utc>) -> BuildReport {
        let mut report = BuildReport::new(discovery, self.dry_run);
        if report.discovered.is_empty() {
            return report;
        }

        let generated_at = format_timestamp(generated_at);
        let mut claimed: HashMap<&str, Category> = HashMap::new();
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for source in &report.discovered {
            if let Some(&existing) = claimed.get(source.name.as_str()) {
                failures.push(failure(
                    source,
                    BuildError::NameCollision {
                        name: source.name.clone(),
                        existing,
                    },
                ));
                continue;
            }
            claimed.insert(&source.name, source.category);

            match self.build_component(source, &generated_at) {
                Ok(entry) => entries.push(entry),
                Err(error) => failures.push(failure(source, error)),
            }
        }

        // Reconcile against every discovered name before the index is written,
        // so the index never lists a unit that is being removed.
        let stale = find_stale_units(&self.layout, claimed.keys().copied());
        match stale {
            Ok(stale) => {
                if !self.dry_run {
                    report.removals = remove_units(&self.layout, &stale);
                }
                report.stale_units = stale;
            }
            Err(error) => report.reconcile_error = Some(error),
        }

        report.index = self.write_index(&entries, &generated_at);
        report.entries = entries;
        report.failures = failures;
        report
    }

    fn build_component(
        &self,
        source: &ComponentSource,
        generated_at: &str,
    ) -> Result<RegistryEntry, BuildError> {
        let content = fs::read_to_string(&source.full_path).map_err(|e| BuildError::Read {
            path: source.full_path.clone(),
            source: e,
        })?;

        let metadata = self.extractor.extract(&content, &source.name);
        let entry = synthesize(source, content, metadata, &self.version, generated_at);

        let document = to_pretty_json(&entry)?;
        if !self.dry_run {
            let path = self.layout.unit_path(&entry.name);
            write_atomic(&path, &document).map_err(|e| BuildError::Write { path, source: e })?;
        }
        Ok(entry)
    }

    fn write_index(&self, entries: &[RegistryEntry], generated_at: &str) -> IndexOutcome {
        let index = aggregate(
            entries,
            &IndexInfo {
                name: &self.registry_name,
                version: &self.version,
                description: &self.registry_description,
                registry_url: &self.registry_url,
                generated_at,
            },
        );
        let path = self.layout.index_path();
        let stats = index.stats.clone();

        if self.dry_run {
            return IndexOutcome::Planned { path, stats };
        }

        let document = match to_pretty_json(&index) {
            Ok(document) => document,
            Err(e) => return IndexOutcome::Failed(e.into()),
        };
        match write_atomic(&path, &document) {
            Ok(()) => IndexOutcome::Written { path, stats },
            Err(e) => IndexOutcome::Failed(BuildError::Write { path, source: e }),
        }
    }
}

fn failure(source: &ComponentSource, error: BuildError) -> ComponentFailure {
    ComponentFailure {
        name: source.name.clone(),
        category: source.category,
        relative_path: source.relative_path.clone(),
        error,
    }
}
