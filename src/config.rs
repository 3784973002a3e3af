use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::operator::DEFAULT_SEPARATOR_NAME;

pub const CONFIG_FILE_NAME: &str = ".mmdkeysrc.json";

/// Suffix of model documents picked up by discovery.
pub const MODEL_FILE_SUFFIX: &str = ".shapekeys.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_separator_name")]
    pub separator_name: String,
    #[serde(default = "default_prefill_existing_jp")]
    pub prefill_existing_jp: bool,
}

fn default_includes() -> Vec<String> {
    vec![format!("**/*{}", MODEL_FILE_SUFFIX)]
}

fn default_separator_name() -> String {
    DEFAULT_SEPARATOR_NAME.to_string()
}

fn default_prefill_existing_jp() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            separator_name: default_separator_name(),
            prefill_existing_jp: default_prefill_existing_jp(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `includes` or `ignores` is not a
    /// valid glob, or if the separator name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        if self.separator_name.is_empty() {
            anyhow::bail!("'separatorName' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file, or the start directory when using
    /// defaults. Include patterns are relative to it.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
