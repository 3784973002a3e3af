use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use super::ShapeKeyHost;
use crate::core::NameMapping;

/// A named blend-shape channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeKey {
    pub name: String,
    #[serde(default)]
    pub value: f32,
    /// Authored keys it was snapshotted from, with their weights.
    /// Empty for authored keys and basis copies.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub blend: BTreeMap<String, f32>,
}

impl ShapeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// In-memory model: one object, its shape-key collection and its settings.
///
/// This is the document stored in `*.shapekeys.json` files. The first key in
/// `shape_keys` is the basis and never contributes to a mix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    active_shape_key: Option<usize>,
    /// Only changed through `ShapeKeyHost` so `index` stays in step.
    #[serde(default)]
    shape_keys: Vec<ShapeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<NameMapping>,
    /// First index of each key name.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Model {
    pub fn new(object: impl Into<String>, shape_keys: Vec<ShapeKey>) -> Self {
        let mut model = Self {
            object: Some(object.into()),
            shape_keys,
            ..Default::default()
        };
        model.rebuild_index();
        model
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let mut model: Model = serde_json::from_str(content)?;
        if let Some(active) = model.active_shape_key
            && active >= model.shape_keys.len()
        {
            bail!("activeShapeKey {} is out of range", active);
        }
        model.rebuild_index();
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse model: {}", path.display()))
    }

    /// Write the document with 2-space indentation and a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize model")?;
        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write model: {}", path.display()))
    }

    /// The settings record, created with all slots empty on first use.
    pub fn settings_mut(&mut self, prefill_existing_jp: bool) -> &mut NameMapping {
        self.settings.get_or_insert_with(|| NameMapping {
            prefill_existing_jp_shapekeys: prefill_existing_jp,
            ..Default::default()
        })
    }

    pub fn shape_keys(&self) -> &[ShapeKey] {
        &self.shape_keys
    }

    pub fn active_shape_key(&self) -> Option<usize> {
        self.active_shape_key
    }

    pub fn key(&self, name: &str) -> Option<&ShapeKey> {
        self.index.get(name).and_then(|&i| self.shape_keys.get(i))
    }

    /// Keys whose name is exactly `name`, in collection order.
    pub fn keys_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ShapeKey> {
        self.shape_keys.iter().filter(move |key| key.name == name)
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, key) in self.shape_keys.iter().enumerate() {
            self.index.entry(key.name.clone()).or_insert(i);
        }
    }

    /// Blend of every non-basis key with a non-zero weight, flattened to
    /// authored keys.
    fn current_mix(&self) -> BTreeMap<String, f32> {
        let mut mix: BTreeMap<String, f32> = BTreeMap::new();
        for key in self.shape_keys.iter().skip(1).filter(|k| k.value != 0.0) {
            if key.blend.is_empty() {
                *mix.entry(key.name.clone()).or_default() += key.value;
            } else {
                for (source, weight) in &key.blend {
                    *mix.entry(source.clone()).or_default() += key.value * weight;
                }
            }
        }
        mix
    }
}

impl ShapeKeyHost for Model {
    fn active_object(&self) -> Option<&str> {
        self.object.as_deref()
    }

    fn key_names(&self) -> Vec<String> {
        self.shape_keys.iter().map(|key| key.name.clone()).collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn set_value(&mut self, name: &str, value: f32) -> Result<()> {
        let key = self
            .index
            .get(name)
            .and_then(|&i| self.shape_keys.get_mut(i))
            .ok_or_else(|| anyhow!("Shape key not found: {}", name))?;
        key.value = value;
        Ok(())
    }

    fn add_shape_key(&mut self, from_mix: bool) -> Result<()> {
        let name = if self.shape_keys.is_empty() {
            "Basis".to_string()
        } else {
            format!("Key {}", self.shape_keys.len())
        };
        let blend = if from_mix {
            self.current_mix()
        } else {
            BTreeMap::new()
        };

        self.shape_keys.push(ShapeKey {
            name: name.clone(),
            value: 0.0,
            blend,
        });
        let i = self.shape_keys.len() - 1;
        self.index.entry(name).or_insert(i);
        self.active_shape_key = Some(i);
        Ok(())
    }

    fn rename_active(&mut self, name: &str) -> Result<()> {
        let key = self
            .active_shape_key
            .and_then(|i| self.shape_keys.get_mut(i))
            .context("No active shape key")?;
        key.name = name.to_string();
        self.rebuild_index();
        Ok(())
    }
}
