//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Generate registry units and the index from component sources
//! - `inspect`: Print the metadata extracted from a single component file
//! - `init`: Initialize regkit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.common.verbose,
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory (config lookup starts here)
    #[arg(long, default_value = ".", env = "REGKIT_PROJECT")]
    pub path: PathBuf,

    /// Component source root (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Registry output root (overrides config file)
    #[arg(long)]
    pub registry_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would be written and removed without touching the registry
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Component source file to analyze
    pub file: PathBuf,

    /// Component name (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate registry units and index.json from component sources
    Build(BuildCommand),
    /// Print the metadata extracted from one component file as JSON
    Inspect(InspectCommand),
    /// Initialize a new .regkitrc.json configuration file
    Init(InitCommand),
}
