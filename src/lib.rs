//! mmdkeys - copy facial shape keys under MMD names
//!
//! Maps a model's own shape-key names (visemes and expressions) onto the
//! fixed Japanese names MMD tooling expects, then duplicates those keys under
//! the target names. Mappings can be saved and loaded as small JSON snippets.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Settings record, target catalog, prefix detection, import/export
//! - `discover`: Finding model documents on disk
//! - `host`: Traits for the 3D application and the in-memory model
//! - `operator`: The duplication operator and its plan
//! - `registry`: Process-wide command registry

pub mod cli;
pub mod config;
pub mod core;
pub mod discover;
pub mod host;
pub mod operator;
pub mod registry;
