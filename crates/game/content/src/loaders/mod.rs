//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into squad-core types and validates
//! it before handing it out, so a bad file fails at load time instead of in
//! the middle of a battle.

pub mod archetypes;
pub mod config;
pub mod factory;
pub mod roster;
pub mod stages;

pub use archetypes::ArchetypeLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use roster::{Roster, RosterLoader};
pub use stages::StageLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
