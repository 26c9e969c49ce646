use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".regkitrc.json";

/// File name patterns that never count as component sources.
pub const EXCLUDED_FILE_PATTERNS: &[&str] = &[
    "*.test.*",
    "*.spec.*",
    "*.stories.*",
    "index.*",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_registry_root")]
    pub registry_root: String,
    #[serde(default = "default_registry_name")]
    pub registry_name: String,
    #[serde(default = "default_registry_description")]
    pub registry_description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_registry_url")]
    pub registry_url: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_internal_alias")]
    pub internal_alias: String,
    #[serde(default = "default_infrastructure_modules")]
    pub infrastructure_modules: Vec<String>,
    #[serde(default = "default_peer_dependencies")]
    pub peer_dependencies: Vec<String>,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_registry_root() -> String {
    "registry".to_string()
}

fn default_registry_name() -> String {
    "@effectual/ui".to_string()
}

fn default_registry_description() -> String {
    "Effectual component library registry".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_registry_url() -> String {
    "https://jack-effectual.github.io/effectual-ui".to_string()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts"].map(String::from).to_vec()
}

fn default_internal_alias() -> String {
    "@/".to_string()
}

fn default_infrastructure_modules() -> Vec<String> {
    ["utils", "types"].map(String::from).to_vec()
}

fn default_peer_dependencies() -> Vec<String> {
    ["react", "react-dom"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            registry_root: default_registry_root(),
            registry_name: default_registry_name(),
            registry_description: default_registry_description(),
            version: default_version(),
            registry_url: default_registry_url(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            internal_alias: default_internal_alias(),
            infrastructure_modules: default_infrastructure_modules(),
            peer_dependencies: default_peer_dependencies(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, an empty
    /// extension list, or an empty internal alias.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.internal_alias.is_empty() {
            bail!("'internalAlias' must not be empty");
        }

        Ok(())
    }

    /// Compiled ignore patterns: the built-in exclusions followed by `ignores`.
    ///
    /// Assumes `validate` has already accepted the user patterns.
    pub fn exclusion_patterns(&self) -> Vec<Pattern> {
        EXCLUDED_FILE_PATTERNS
            .iter()
            .copied()
            .chain(self.ignores.iter().map(String::as_str))
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the config was found in (or the start directory for defaults).
    /// Relative roots in the config resolve against it.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
