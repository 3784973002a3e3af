use std::{env, path::Path};

use anyhow::{Result, bail};

use crate::{
    config::{ConfigLoadResult, load_config},
    host::Model,
};

/// Load the config that applies to the working directory.
pub fn load_cwd_config() -> Result<ConfigLoadResult> {
    load_config(&env::current_dir()?)
}

/// Load a model document that must have an active object with shape keys.
pub fn load_active_model(path: &Path) -> Result<Model> {
    let model = Model::load(path)?;
    if !crate::operator::DuplicateOperator::poll(&model) {
        bail!("No active object with shape keys in {}", path.display());
    }
    Ok(model)
}
