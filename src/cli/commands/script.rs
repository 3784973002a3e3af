use anyhow::Result;

use super::super::args::ScriptCommand;
use super::helper::{load_active_model, load_cwd_config};
use super::{CommandResult, CommandSummary, ScriptSummary};
use crate::{
    host::{ShapeKeyHost, script::render_bpy},
    operator::DuplicateOperator,
};

pub fn script(cmd: ScriptCommand) -> Result<CommandResult> {
    let config = load_cwd_config()?.config;
    let model = load_active_model(&cmd.model)?;
    let operator = DuplicateOperator::new(cmd.separator_name.unwrap_or(config.separator_name));

    let mapping = model.settings.clone().unwrap_or_default();
    let plan = operator.preview(&mapping, &model)?;
    let script = render_bpy(&plan, model.active_object());

    Ok(CommandResult::new(
        CommandSummary::Script(ScriptSummary { script }),
        0,
    ))
}
