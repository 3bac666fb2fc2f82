use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ChapterError;

// @module: File discovery and I/O utilities

/// Relative candidate locations tried inside a book directory, in order
const CANDIDATE_PATHS: [&str; 2] = ["metadata/metadata.json", "chapters.json"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Locate the chapter document for an input path.
    ///
    /// A path that is itself a file is used directly. A directory is
    /// searched for `metadata/metadata.json`, then `chapters.json`; the
    /// first hit wins. Exhausting the chain is [`ChapterError::NotFound`] —
    /// a distinct outcome from an I/O failure while reading the document.
    pub fn locate_document<P: AsRef<Path>>(input: P) -> std::result::Result<PathBuf, ChapterError> {
        let input = input.as_ref();

        if input.is_file() {
            return Ok(input.to_path_buf());
        }

        for candidate in CANDIDATE_PATHS {
            let path = input.join(candidate);
            if path.is_file() {
                return Ok(path);
            }
        }

        Err(ChapterError::NotFound {
            path: input.to_path_buf(),
        })
    }

    /// Directory the output artifacts are written into.
    ///
    /// Artifacts land next to the located document, except when the
    /// document sits inside a `metadata/` directory — then they land one
    /// level up, beside the book itself.
    pub fn output_dir_for<P: AsRef<Path>>(document_path: P) -> PathBuf {
        let parent = document_path
            .as_ref()
            .parent()
            .unwrap_or(Path::new(""))
            .to_path_buf();

        if parent.file_name().is_some_and(|name| name == "metadata") {
            if let Some(book_dir) = parent.parent() {
                return book_dir.to_path_buf();
            }
        }

        parent
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
