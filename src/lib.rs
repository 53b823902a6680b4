//! headmark: hierarchical section numbering and table-of-contents upkeep for notebooks.
//!
//! Documents are ordered sequences of cells. The [`outline::Synchronizer`] splits mixed cells
//! at heading lines, numbers headings by their position in the hierarchy (or removes the
//! numbers again, as a toggle), keeps `[text](#anchor)` links pointing at renamed headings,
//! and regenerates the table of contents cell. The host document is injected through the
//! [`store::CellStore`] trait; Jupyter notebooks and plain markdown files are supported
//! out of the box through [`formats`].
#![allow(clippy::multiple_crate_versions)]

pub mod cell;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod input;
pub mod outline;
pub mod store;

pub use cell::{Cell, CellKind};
pub use error::{Error, Result};
pub use outline::{OutlineOptions, SyncReport, Synchronizer};
pub use store::{CellStore, Notebook};
