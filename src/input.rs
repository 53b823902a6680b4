//! Finding the documents to work on.
//!
//! Paths named on the command line are taken as they are; directories are walked recursively
//! for files with one of the configured extensions.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

#[must_use]
/// Expands `paths` into document files, in a stable order.
///
/// Explicitly named files are always included. Hidden directories (such as
/// `.ipynb_checkpoints`) are not descended into. A path that does not exist yields an error
/// in its place so the caller can report it and carry on with the rest.
pub fn find_documents(paths: &[PathBuf], extensions: &[String]) -> Vec<Result<PathBuf>> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            found.push(Ok(path.clone()));
        } else if path.is_dir() {
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
            for entry in walker {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        if has_extension(entry.path(), extensions) {
                            found.push(Ok(entry.into_path()));
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        let at = e.path().unwrap_or(path).to_path_buf();
                        found.push(Err(Error::Io {
                            path: at,
                            source: e.into(),
                        }));
                    }
                }
            }
        } else {
            found.push(Err(Error::Missing(path.clone())));
        }
    }
    found
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
