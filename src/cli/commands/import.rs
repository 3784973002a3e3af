use std::{
    fs,
    io::{self, Read},
};

use anyhow::{Context, Result};

use super::super::args::ImportCommand;
use super::helper::{load_active_model, load_cwd_config};
use super::{CommandResult, CommandSummary, ImportSummary};
use crate::host::{ConsoleNotifier, ShapeKeyHost};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let config = load_cwd_config()?.config;
    let mut model = load_active_model(&cmd.model)?;
    let json = read_input(&cmd.input)?;

    let names = model.key_names();
    let outcome = model
        .settings_mut(config.prefill_existing_jp)
        .import_json(&json, &names, &ConsoleNotifier);

    let accepted = outcome.as_ref().map_or(0, |o| o.accepted.len());
    if cmd.apply && accepted > 0 {
        model.save(&cmd.model)?;
    }

    // Nothing usable in the snippet counts as a failed import
    let error_count = usize::from(accepted == 0);
    Ok(CommandResult::new(
        CommandSummary::Import(ImportSummary {
            model_path: cmd.model.display().to_string(),
            outcome,
            is_apply: cmd.apply,
        }),
        error_count,
    ))
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read mapping from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read mapping: {}", input))
    }
}
