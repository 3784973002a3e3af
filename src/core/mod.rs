//! Name mapping between a model's shape keys and the MMD target names.
//!
//! - `slots`: the settings record and its slot table
//! - `catalog`: target names per slot
//! - `prefix`: naming-prefix detection
//! - `mapping`: merging, JSON import and export
//! - `suggest`: filling slots from a model's key names

pub mod catalog;
pub mod mapping;
pub mod prefix;
pub mod slots;
pub mod suggest;

pub use catalog::target_name;
pub use mapping::{DropReason, ImportSummary};
pub use prefix::determine_prefix;
pub use slots::{NameMapping, SLOTS, Slot, SlotGroup};
pub use suggest::{Suggestion, suggest_mapping};
