//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.mmdkeysrc.json` configuration file
//! - `slots`: List every slot with its target name
//! - `detect`: Suggest a mapping from a model's shape-key names
//! - `import`: Import a mapping snippet into a model
//! - `export`: Print a model's mapping snippet
//! - `duplicate`: Copy mapped shape keys under their MMD names
//! - `script`: Print a Blender script performing the duplication

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
            Some(Command::Detect(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Duplicate(cmd)) => cmd.common.verbose,
            Some(Command::Init | Command::Slots | Command::Export(_) | Command::Script(_))
            | None => false,
        }
    }
}

/// Common arguments shared by commands that touch model documents.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DetectCommand {
    /// Model document (*.shapekeys.json)
    pub model: PathBuf,

    /// Store the suggested mapping (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Model document (*.shapekeys.json)
    pub model: PathBuf,

    /// Mapping snippet to import, or "-" to read stdin
    pub input: String,

    /// Store the imported mapping (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Model document (*.shapekeys.json)
    pub model: PathBuf,
}

#[derive(Debug, Args)]
pub struct DuplicateCommand {
    /// Model documents (default: discovered from the config's includes)
    pub models: Vec<PathBuf>,

    /// Actually add the shape keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Name of the separator key (overrides config file)
    #[arg(long, allow_hyphen_values = true)]
    pub separator_name: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScriptCommand {
    /// Model document (*.shapekeys.json)
    pub model: PathBuf,

    /// Name of the separator key (overrides config file)
    #[arg(long, allow_hyphen_values = true)]
    pub separator_name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .mmdkeysrc.json configuration file
    Init,
    /// List every slot with its MMD target name
    Slots,
    /// Detect the naming prefix and suggest a mapping from existing shape keys
    Detect(DetectCommand),
    /// Import a JSON mapping snippet into a model
    Import(ImportCommand),
    /// Print the model's mapping as a JSON snippet
    Export(ExportCommand),
    /// Duplicate mapped shape keys under their MMD names
    Duplicate(DuplicateCommand),
    /// Print a Blender Python script that performs the duplication
    Script(ScriptCommand),
}
