//! On-disk layout of the registry and JSON persistence.
//!
//! ```text
//! <registry-root>/
//!   index.json
//!   components/
//!     <name>.json
//! ```

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
#[cfg(unix)]
use tempfile::Builder;
use tempfile::NamedTempFile;

pub const INDEX_FILE_NAME: &str = "index.json";
pub const COMPONENTS_DIR_NAME: &str = "components";
pub const UNIT_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct RegistryLayout {
    root: PathBuf,
}

impl RegistryLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(COMPONENTS_DIR_NAME)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    pub fn unit_path(&self, name: &str) -> PathBuf {
        self.components_dir()
            .join(format!("{}.{}", name, UNIT_EXTENSION))
    }

    /// Names of the units currently persisted, sorted.
    ///
    /// A missing components directory means no units.
    pub fn persisted_unit_names(&self) -> io::Result<Vec<String>> {
        let dir = self.components_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(UNIT_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Render a document with 2-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let content = serde_json::to_string_pretty(value)?;
    Ok(format!("{}\n", content))
}

/// Replace `path` with `content` via a temp file in the same directory and a rename,
/// so readers never observe a half-written document.
///
/// A replaced document keeps its permissions; a new one gets the same mode as
/// `fs::write` would give it.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp_file = temp_file_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    if let Ok(metadata) = fs::metadata(path) {
        temp_file.as_file().set_permissions(metadata.permissions())?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// 0o666 is reduced by the process umask on creation.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
