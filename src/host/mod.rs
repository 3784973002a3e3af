//! Seams to the 3D application that owns the shape keys.
//!
//! The duplication pass only needs a handful of calls: look keys up by name,
//! change a key's weight, add a key and rename the key just added. Anything
//! that implements [`ShapeKeyHost`] can be driven by the operator; [`Model`]
//! is the in-memory implementation backing the CLI.

mod model;
mod notify;
pub mod script;

use anyhow::Result;

pub use model::{Model, ShapeKey};
#[cfg(test)]
pub use notify::RecordingNotifier;
pub use notify::{ConsoleNotifier, Notification, Notifier, Severity};

pub trait ShapeKeyHost {
    /// Name of the active object, if any.
    fn active_object(&self) -> Option<&str>;

    /// Shape-key names in collection order.
    fn key_names(&self) -> Vec<String>;

    /// Whether a key with exactly this name exists.
    fn contains(&self, name: &str) -> bool;

    /// Set the blend weight of the key named `name`.
    fn set_value(&mut self, name: &str, value: f32) -> Result<()>;

    /// Add a key and make it active.
    ///
    /// With `from_mix` the new key is a snapshot of the current blended pose;
    /// otherwise it is a copy of the basis.
    fn add_shape_key(&mut self, from_mix: bool) -> Result<()>;

    /// Rename the active key.
    fn rename_active(&mut self, name: &str) -> Result<()>;

    fn has_shape_keys(&self) -> bool {
        !self.key_names().is_empty()
    }

    /// Resolve a mapped name to an existing key name.
    ///
    /// Exact matches win; otherwise the first key whose name matches
    /// ignoring case is returned.
    fn resolve(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        if self.contains(name) {
            return Some(name.to_string());
        }
        let lower = name.to_lowercase();
        self.key_names()
            .into_iter()
            .find(|key| key.to_lowercase() == lower)
    }
}
