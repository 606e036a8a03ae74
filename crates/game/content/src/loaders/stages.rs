//! Campaign stage catalog loader.

use std::path::Path;

use squad_core::StageCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the campaign stage list from RON files.
pub struct StageLoader;

impl StageLoader {
    pub fn load(path: &Path) -> LoadResult<StageCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a `(stages: [...])` document and validate every stage.
    pub fn parse(content: &str) -> LoadResult<StageCatalog> {
        let catalog: StageCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stage RON: {}", e))?;

        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid stage catalog: {}", e))?;

        tracing::debug!(stages = catalog.len(), "loaded stage catalog");
        Ok(catalog)
    }
}
