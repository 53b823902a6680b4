//! A document file loaded for an outline run, and the actions a run can perform.
//!
//! Loading picks the format by extension and parses the file into a [`Notebook`]; saving
//! serialises it back and only touches the file when the contents actually changed.

use crate::error::{Error, Result};
use crate::formats::{self, Format};
use crate::outline::{OutlineOptions, SyncReport, Synchronizer};
use crate::store::Notebook;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What to do to each document.
pub enum Action {
    /// Full pipeline: split, toggle numbering, fix links, refresh the table of contents.
    Synchronize,
    /// Split, then rebuild (or create) the table of contents.
    RebuildToc,
}

impl Action {
    /// Runs this action against a document.
    pub fn run(self, synchronizer: &Synchronizer, notebook: &mut Notebook) -> SyncReport {
        match self {
            Self::Synchronize => synchronizer.synchronize_outline(notebook),
            Self::RebuildToc => synchronizer.rebuild_table_of_contents(notebook),
        }
    }
}

/// A parsed document file.
pub struct Document {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Cells of the document.
    pub notebook: Notebook,
    original: String,
    format: Box<dyn Format>,
}

impl Document {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if no format handles the file, it cannot be read, or it fails to parse.
    pub fn load(path: &Path, options: &OutlineOptions) -> Result<Self> {
        let format =
            formats::for_path(path, options).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
        let original = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let notebook = format.read(&original)?;
        log::debug!(
            "loaded {} as {} with {} cells",
            path.display(),
            format.name(),
            notebook.cells.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            notebook,
            original,
            format,
        })
    }

    /// Serialises the current cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded.
    pub fn render(&self) -> Result<String> {
        self.format.write(&self.notebook)
    }

    /// Writes the document back if its contents changed. Returns whether it wrote.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self) -> Result<bool> {
        let contents = self.render()?;
        if contents == self.original {
            return Ok(false);
        }
        fs::write(&self.path, contents).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("wrote {}", self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
