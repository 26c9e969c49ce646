use std::path::{self, Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration for a project plus the directory its relative roots resolve against.
pub struct ProjectConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

/// Load the config file (or defaults) and apply CLI overrides (CLI > config file > defaults).
///
/// Override paths are relative to `--path`, not to the config file.
/// They are made absolute so joining them onto `base_dir` later leaves them unchanged.
pub fn load_project_config(common: &CommonArgs) -> Result<ProjectConfig> {
    let loaded = load_config(&common.path)?;

    if common.verbose && !loaded.from_file {
        eprintln!(
            "{} No {} found, using default configuration",
            "note:".bold().cyan(),
            CONFIG_FILE_NAME
        );
    }

    let mut config = loaded.config;
    if let Some(ref source_root) = common.source_root {
        config.source_root = resolve_override(&common.path, source_root)?;
    }
    if let Some(ref registry_root) = common.registry_root {
        config.registry_root = resolve_override(&common.path, registry_root)?;
    }

    Ok(ProjectConfig {
        config,
        base_dir: loaded.base_dir,
    })
}

fn resolve_override(project: &Path, root: &Path) -> Result<String> {
    let joined = project.join(root);
    let absolute = path::absolute(&joined)
        .with_context(|| format!("Failed to resolve {}", joined.display()))?;
    Ok(absolute.to_string_lossy().into_owned())
}
