use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::InitCommand;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary {
                error: Some(format!("{} already exists", config_path.display())),
                path: config_path,
            }),
            error_count: 1,
            exit_on_errors: true,
        });
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            error: None,
        }),
        error_count: 0,
        exit_on_errors: true,
    })
}
