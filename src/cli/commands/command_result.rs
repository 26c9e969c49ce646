use std::path::PathBuf;

use crate::core::{BuildReport, ComponentMetadata};

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Inspect(InspectSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub source_root: PathBuf,
    pub report: BuildReport,
}

#[derive(Debug)]
pub struct InspectSummary {
    pub name: String,
    pub metadata: ComponentMetadata,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the file already existed and was left untouched.
    pub error: Option<String>,
}

/// Result of running regkit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, a non-zero `error_count` makes the process exit unsuccessfully.
    pub exit_on_errors: bool,
}
