//! Format trait and implementations for the document types the outline can work on.
//!
//! A format turns file contents into a [`Notebook`] of cells and back again. Jupyter
//! notebooks map one to one; plain markdown files are cut into cells on the way in and
//! joined again on the way out.

pub mod markdown;
pub mod notebook;

use crate::error::Result;
use crate::outline::OutlineOptions;
use crate::store::Notebook;
use std::path::Path;

/// Reads and writes one kind of document file.
pub trait Format {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// File suffixes this format claims, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses file contents into cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not valid for this format.
    fn read(&self, contents: &str) -> Result<Notebook>;

    /// Serialises cells back into file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded.
    fn write(&self, notebook: &Notebook) -> Result<String>;
}

#[must_use]
/// Picks the format for `path` by its extension.
pub fn for_path(path: &Path, options: &OutlineOptions) -> Option<Box<dyn Format>> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let formats: [Box<dyn Format>; 2] = [
        Box::new(notebook::NotebookFormat),
        Box::new(markdown::MarkdownFormat::new(options.clone())),
    ];
    formats
        .into_iter()
        .find(|format| format.extensions().contains(&ext.as_str()))
}
