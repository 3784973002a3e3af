//! Merging, importing and exporting slot values.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use super::slots::{NameMapping, SLOTS, Slot};
use crate::host::{Notifier, Severity};

/// Keys written by older exports that no longer match a slot identifier.
const LEGACY_KEYS: &[(&str, &str)] = &[("close_X", "close_x")];

/// Why an imported pair was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The key is not a slot identifier.
    UnknownSlot,
    /// The value is not a string naming a shape key on the model.
    NoSuchShapeKey,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// `(slot id, value)` pairs written to the record.
    pub accepted: Vec<(String, String)>,
    /// `(json key, reason)` pairs that were ignored.
    pub dropped: Vec<(String, DropReason)>,
}

impl NameMapping {
    /// Propose `value` for the slot named by `attribute`.
    ///
    /// The label is lowercased and spaces become underscores. A slot that
    /// already holds a value is never overwritten. Common spellings (`aa`,
    /// `ee`, `wink2...`) are redirected; anything else is ignored.
    pub fn set_attribute(&mut self, attribute: &str, value: &str) {
        if attribute.is_empty() {
            return;
        }

        let attribute = attribute.to_lowercase().replace(' ', "_");
        if let Some(slot) = Slot::find(&attribute) {
            let current = (slot.get_mut)(self);
            if current.is_empty() {
                *current = value.to_string();
            }
            return;
        }

        if attribute == "aa" {
            self.set_attribute("ah", value);
        } else if attribute == "ee" {
            self.set_attribute("e", value);
        } else if attribute.starts_with("wink2") {
            self.set_attribute(&attribute.replacen("wink2", "wink_2", 1), value);
        }
    }

    /// Import a mapping snippet, reporting malformed input through `notifier`.
    ///
    /// Returns `None` (and leaves the record untouched) when `json` cannot be
    /// parsed as an object.
    pub fn import_json<S: AsRef<str>>(
        &mut self,
        json: &str,
        shape_keys: &[S],
        notifier: &dyn Notifier,
    ) -> Option<ImportSummary> {
        match self.try_import_json(json, shape_keys) {
            Ok(summary) => Some(summary),
            Err(_) => {
                notifier.message_box("Import Error", "Data is not a valid JSON", Severity::Error);
                None
            }
        }
    }

    /// Import a mapping snippet.
    ///
    /// A pair is applied only if its key names a slot and its value matches
    /// (ignoring case) one of `shape_keys`. Parsing happens before any write.
    pub fn try_import_json<S: AsRef<str>>(
        &mut self,
        json: &str,
        shape_keys: &[S],
    ) -> Result<ImportSummary> {
        let value: Value = serde_json::from_str(json).context("Data is not a valid JSON")?;
        let Value::Object(data) = value else {
            bail!("Data is not a valid JSON object");
        };

        let known: HashSet<String> = shape_keys
            .iter()
            .map(|name| name.as_ref().to_lowercase())
            .collect();

        let mut summary = ImportSummary::default();
        for (key, value) in data {
            let Some(slot) = import_slot(&key) else {
                summary.dropped.push((key, DropReason::UnknownSlot));
                continue;
            };
            match value.as_str() {
                Some(name) if known.contains(&name.to_lowercase()) => {
                    self.set(slot, name);
                    summary.accepted.push((slot.id.to_string(), name.to_string()));
                }
                _ => summary.dropped.push((key, DropReason::NoSuchShapeKey)),
            }
        }

        Ok(summary)
    }

    /// Export every mapped slot as pretty-printed JSON.
    pub fn export_json(&self) -> String {
        let data: Map<String, Value> = SLOTS
            .iter()
            .filter_map(|slot| {
                let value = self.get(slot);
                (!value.is_empty()).then(|| (slot.id.to_string(), Value::from(value)))
            })
            .collect();

        // A map of strings always serializes
        serde_json::to_string_pretty(&Value::Object(data)).unwrap_or_default()
    }
}

fn import_slot(key: &str) -> Option<&'static Slot> {
    Slot::find(key).or_else(|| {
        LEGACY_KEYS
            .iter()
            .find(|(legacy, _)| *legacy == key)
            .and_then(|(_, id)| Slot::find(id))
    })
}
