use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use super::super::args::DuplicateCommand;
use super::helper::{load_active_model, load_cwd_config};
use super::{CommandResult, CommandSummary, DuplicateSummary, ModelResult};
use crate::{
    discover::discover_models,
    operator::{DuplicateOperator, DuplicateReport},
    registry,
};

pub fn duplicate(cmd: DuplicateCommand) -> Result<CommandResult> {
    let Some(command) = registry::lookup(DuplicateOperator::ID) else {
        bail!("Command '{}' is not registered", DuplicateOperator::ID);
    };

    let loaded = load_cwd_config()?;
    let config = loaded.config;
    let operator = DuplicateOperator::new(cmd.separator_name.unwrap_or(config.separator_name));

    let paths: Vec<PathBuf> = if cmd.models.is_empty() {
        let found = discover_models(
            &loaded.root,
            &config.includes,
            &config.ignores,
            cmd.common.verbose,
        );
        if found.files.is_empty() {
            bail!("No model documents found under {}", loaded.root.display());
        }
        found.files
    } else {
        unique_paths(cmd.models)
    };

    if cmd.common.verbose {
        eprintln!("{} on {} model(s)", command.label, paths.len());
    }

    let apply = cmd.apply;
    let models: Vec<ModelResult> = paths
        .par_iter()
        .map(|path| ModelResult {
            model_path: path.display().to_string(),
            result: duplicate_one(&operator, path, apply).map_err(|e| format!("{:#}", e)),
        })
        .collect();

    let error_count = models.iter().filter(|m| m.result.is_err()).count();
    Ok(CommandResult::new(
        CommandSummary::Duplicate(DuplicateSummary {
            models,
            is_apply: apply,
        }),
        error_count,
    ))
}

/// Drop repeated documents, keeping the first spelling of each path.
fn unique_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(fs::canonicalize(path).unwrap_or_else(|_| path.clone())))
        .collect()
}

fn duplicate_one(
    operator: &DuplicateOperator,
    path: &Path,
    apply: bool,
) -> Result<DuplicateReport> {
    let mut model = load_active_model(path)?;
    let mapping = model.settings.clone().unwrap_or_default();

    if !apply {
        let plan = operator.preview(&mapping, &model)?;
        return Ok(DuplicateReport { plan, created: 0 });
    }

    let report = operator.execute(&mapping, &mut model)?;
    model.save(path)?;
    Ok(report)
}
