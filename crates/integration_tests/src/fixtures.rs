use agentwave_decoder::response::DevInspectResults;
use agentwave_decoder::source::{FileSource, ResponseSource};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Recorded `devInspectTransactionBlock` responses stored as JSON.
pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    /// Create a new fixture loader
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.fixtures_dir.join(path.as_ref())
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path);

        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read fixture file: {:?}", full_path))?;

        let json: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse JSON fixture: {:?}", full_path))?;

        Ok(json)
    }

    /// Load a fixture through the decoder's own response source
    pub fn load_response(&self, path: impl AsRef<Path>) -> Result<DevInspectResults> {
        let full_path = self.resolve(path);
        FileSource::new(&full_path)
            .fetch()
            .context(format!("Failed to load response fixture: {:?}", full_path))
    }

    /// Check if a fixture file exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    /// Get the fixtures directory path
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }
}
