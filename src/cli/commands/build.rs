use anyhow::{Ok, Result};
use chrono::Utc;

use super::super::args::BuildCommand;
use super::helper::load_project_config;
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::core::RegistryBuilder;

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let project = load_project_config(&args.common)?;

    let builder =
        RegistryBuilder::from_config(&project.config, &project.base_dir).dry_run(args.dry_run);
    let report = builder.run(Utc::now());

    Ok(CommandResult {
        error_count: report.error_count(),
        exit_on_errors: true,
        summary: CommandSummary::Build(BuildSummary {
            source_root: builder.source_root().to_path_buf(),
            report,
        }),
    })
}
