//! Removal of registry units whose component no longer exists.

use std::{collections::HashSet, fs, io, path::PathBuf};

use super::writer::RegistryLayout;

/// Outcome of removing one stale unit.
#[derive(Debug)]
pub struct Removal {
    pub name: String,
    pub path: PathBuf,
    pub result: io::Result<()>,
}

impl Removal {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Persisted unit names with no matching current component, sorted.
pub fn find_stale_units<'a>(
    layout: &RegistryLayout,
    current: impl IntoIterator<Item = &'a str>,
) -> io::Result<Vec<String>> {
    let current: HashSet<&str> = current.into_iter().collect();
    let mut stale = layout.persisted_unit_names()?;
    stale.retain(|name| !current.contains(name.as_str()));
    Ok(stale)
}

/// Delete each stale unit. Failures are recorded, never short-circuit.
pub fn remove_units(layout: &RegistryLayout, names: &[String]) -> Vec<Removal> {
    names
        .iter()
        .map(|name| {
            let path = layout.unit_path(name);
            let result = fs::remove_file(&path);
            Removal {
                name: name.clone(),
                path,
                result,
            }
        })
        .collect()
}
