//! Component discovery.
//!
//! Each category lives in its own fixed subdirectory of the source root
//! (`components/ui`, `components/custom`). Only the top level of those
//! directories is scanned; results are sorted by file name so the registry
//! output is reproducible across runs and machines.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// Kind of component, determining the target subdirectory and the registry `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "components:ui")]
    Ui,
    #[serde(rename = "components:custom")]
    Custom,
}

impl Category {
    /// Discovery order. `ui` components are claimed before `custom` ones.
    pub const ALL: [Category; 2] = [Category::Ui, Category::Custom];

    /// Subdirectory name, both under the source root and in target paths.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Ui => "ui",
            Category::Custom => "custom",
        }
    }

    /// Registry `type` tag as written to the JSON documents.
    pub fn registry_type(self) -> &'static str {
        match self {
            Category::Ui => "components:ui",
            Category::Custom => "components:custom",
        }
    }

    /// Directory holding this category's sources, relative to the source root.
    pub fn source_dir(self) -> String {
        format!("components/{}", self.dir_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A discovered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSource {
    /// File stem, e.g. `button` for `button.tsx`.
    pub name: String,
    /// Path relative to the source root using `/` separators, e.g. `components/ui/button.tsx`.
    pub relative_path: String,
    /// Absolute (or base-relative) location used for reading.
    pub full_path: PathBuf,
    /// Original extension without the dot, preserved in the target path.
    pub extension: String,
    pub category: Category,
}

/// Result of scanning the source root.
#[derive(Debug, Default)]
pub struct DiscoveryResult {
    pub sources: Vec<ComponentSource>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

impl DiscoveryResult {
    pub fn count(&self, category: Category) -> usize {
        self.sources
            .iter()
            .filter(|s| s.category == category)
            .count()
    }
}

/// Filters applied to directory entries.
pub struct DiscoveryFilter<'a> {
    pub extensions: &'a [String],
    pub exclusions: &'a [Pattern],
}

impl DiscoveryFilter<'_> {
    /// Whether a file name denotes an eligible component source.
    pub fn accepts(&self, file_name: &str) -> bool {
        let Some((_, extension)) = file_name.rsplit_once('.') else {
            return false;
        };
        if !self.extensions.iter().any(|e| e == extension) {
            return false;
        }
        !self.exclusions.iter().any(|p| p.matches(file_name))
    }
}

/// Discover components of every category under `source_root`.
///
/// A missing source root or category directory yields no components for it.
pub fn discover_components(source_root: &Path, filter: &DiscoveryFilter) -> DiscoveryResult {
    let mut result = DiscoveryResult::default();
    for category in Category::ALL {
        discover_category(source_root, category, filter, &mut result);
    }
    result
}

fn discover_category(
    source_root: &Path,
    category: Category,
    filter: &DiscoveryFilter,
    result: &mut DiscoveryResult,
) {
    let source_dir = category.source_dir();
    let dir = source_root.join(&source_dir);
    if !dir.is_dir() {
        return;
    }

    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => {
                result.skipped_count += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            result.skipped_count += 1;
            continue;
        };
        if !filter.accepts(file_name) {
            continue;
        }

        let path = entry.path();
        let (Some(name), Some(extension)) = (
            path.file_stem().and_then(|s| s.to_str()),
            path.extension().and_then(|e| e.to_str()),
        ) else {
            continue;
        };

        result.sources.push(ComponentSource {
            name: name.to_string(),
            relative_path: format!("{}/{}", source_dir, file_name),
            full_path: path.to_path_buf(),
            extension: extension.to_string(),
            category,
        });
    }
}
