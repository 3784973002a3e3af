use anyhow::Result;

use super::super::args::DetectCommand;
use super::helper::{load_active_model, load_cwd_config};
use super::{CommandResult, CommandSummary, DetectSummary};
use crate::{core::suggest_mapping, host::ShapeKeyHost};

pub fn detect(cmd: DetectCommand) -> Result<CommandResult> {
    let config = load_cwd_config()?.config;
    let mut model = load_active_model(&cmd.model)?;

    let names = model.key_names();
    let settings = model.settings_mut(config.prefill_existing_jp);
    let suggestion = suggest_mapping(settings, &names);
    let mapped_count = settings.mapped().count();

    if cmd.apply {
        model.save(&cmd.model)?;
    }

    Ok(CommandResult::new(
        CommandSummary::Detect(DetectSummary {
            model_path: cmd.model.display().to_string(),
            suggestion,
            mapped_count,
            is_apply: cmd.apply,
        }),
        0,
    ))
}
