use anyhow::Result;

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::{core::NameMapping, host::Model};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let model = Model::load(&cmd.model)?;
    let json = model
        .settings
        .as_ref()
        .map_or_else(|| NameMapping::default().export_json(), NameMapping::export_json);

    Ok(CommandResult::new(
        CommandSummary::Export(ExportSummary { json }),
        0,
    ))
}
