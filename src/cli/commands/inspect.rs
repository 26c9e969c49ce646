use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::InspectCommand;
use super::helper::load_project_config;
use super::{CommandResult, CommandSummary, InspectSummary};
use crate::core::MetadataExtractor;

pub fn inspect(cmd: InspectCommand) -> Result<CommandResult> {
    let project = load_project_config(&cmd.common)?;

    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read component file: {}", cmd.file.display()))?;

    let name = match cmd.name {
        Some(name) => name,
        None => cmd
            .file
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Cannot derive a component name from {}", cmd.file.display()))?
            .to_string(),
    };

    let metadata = MetadataExtractor::from_config(&project.config).extract(&content, &name);

    Ok(CommandResult {
        summary: CommandSummary::Inspect(InspectSummary { name, metadata }),
        error_count: 0,
        exit_on_errors: true,
    })
}
