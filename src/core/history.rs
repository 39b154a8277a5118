//! Recently opened files, persisted as a JSON array of paths

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{EditorError, Result};

/// Deduplicated, insertion-ordered list of file paths backed by a JSON file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Backing file
    path: PathBuf,
    /// Recorded paths, oldest first
    entries: Vec<String>,
}

impl HistoryStore {
    /// Create an empty store that will persist to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Load the history from `path`, starting empty if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No history at {}, starting empty", path.display());
                return Ok(Self::new(path.to_path_buf()));
            }
            Err(source) => {
                return Err(EditorError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let entries: Vec<String> =
            serde_json::from_str(&content).map_err(|source| EditorError::HistoryParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded {} history entries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Record `entry`, persisting immediately. Returns `false` if it was already present.
    pub fn add(&mut self, entry: impl Into<String>) -> Result<bool> {
        let entry = entry.into();
        if self.contains(&entry) {
            return Ok(false);
        }
        self.entries.push(entry);
        if let Err(e) = self.persist() {
            // Memory must not hold entries the file does not
            self.entries.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Overwrite the backing file with the full list
    pub fn persist(&self) -> Result<()> {
        let content = serde_json::to_string(&self.entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| EditorError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| EditorError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Persisted {} history entries", self.entries.len());
        Ok(())
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Recorded paths, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
