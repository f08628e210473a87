use crate::models::FormattedSearchResult;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Writes the latest formatted batch to disk as a pretty-printed JSON array,
/// mirroring what the search endpoint returned.
pub struct ResultsStore {
    path: PathBuf,
}

impl ResultsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResultsStore { path: path.into() }
    }

    pub fn save(&self, results: &[FormattedSearchResult]) -> Result<()> {
        let json = serde_json::to_string_pretty(results)
            .context("Failed to serialize search results")?;
        fs::write(&self.path, json).with_context(|| {
            format!("Failed to write search results to {}", self.path.display())
        })?;
        info!(
            "Saved {} search results to {}",
            results.len(),
            self.path.display()
        );
        Ok(())
    }
}
