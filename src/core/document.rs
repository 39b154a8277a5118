//! The document being edited: main text, attached note, and its file

use std::fs;
use std::path::{Path, PathBuf};

use super::codec;
use super::error::{EditorError, Result};

/// A document with its attached note
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Main pane content
    pub main_text: String,
    /// Note pane content
    pub note_text: String,
    /// File path, unset until the first open or save
    pub path: Option<PathBuf>,
    /// Whether the document has unsaved changes
    pub modified: bool,
}

impl Document {
    /// Create a new empty, untitled document
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document from a file
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| EditorError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (main_text, note_text) = codec::decode(&content);
        tracing::info!("Opened document: {}", path.display());

        Ok(Self {
            main_text,
            note_text,
            path: Some(path.to_path_buf()),
            modified: false,
        })
    }

    /// Encoded file content for the current texts
    pub fn encode(&self) -> String {
        codec::encode(&self.main_text, &self.note_text)
    }

    /// Write the document to `path` without adopting it
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.encode()).map_err(|source| EditorError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved document: {}", path.display());
        Ok(())
    }

    /// Write to `path` and make it the document's path
    pub fn save_as(&mut self, path: &Path) -> Result<()> {
        self.write_to(path)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Get the document title (file name, or "Untitled")
    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Replace the main text, marking the document modified if it changed
    pub fn set_main_text(&mut self, text: String) {
        if self.main_text != text {
            self.main_text = text;
            self.modified = true;
        }
    }

    /// Replace the note text, marking the document modified if it changed
    pub fn set_note_text(&mut self, text: String) {
        if self.note_text != text {
            self.note_text = text;
            self.modified = true;
        }
    }
}
