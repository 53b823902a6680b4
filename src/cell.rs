//! Cell representation for notebook-style documents.
//!
//! A cell is the unit the host document stores: a block of text with a type. Only markdown
//! cells can hold headings; every other kind is carried through the outline pass untouched.
//! Host-specific fields (notebook metadata, outputs, ids) ride along in `extra` so that a
//! document can be written back without losing anything the outline pass does not understand.

use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Distinguishes heading-capable text cells from everything else.
pub enum CellKind {
    /// Markdown text that may begin with a heading line.
    Markdown,
    /// Any other cell type, keeping the host's own type name (e.g. `code`, `raw`).
    Other(String),
}

impl CellKind {
    #[must_use]
    /// Maps a host cell type name onto a kind.
    pub fn from_name(name: &str) -> Self {
        if name == "markdown" {
            Self::Markdown
        } else {
            Self::Other(name.to_string())
        }
    }

    #[must_use]
    /// True for heading-capable text.
    pub fn is_markdown(&self) -> bool {
        *self == Self::Markdown
    }

    #[must_use]
    /// The host cell type name for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Markdown => "markdown",
            Self::Other(name) => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A unit of document content owned by the host store.
pub struct Cell {
    /// Whether the cell can hold a heading.
    pub kind: CellKind,
    /// Raw cell source.
    pub text: String,
    /// Display state, restored after any text mutation.
    pub rendered: bool,
    /// Host fields carried through untouched.
    pub extra: Map<String, Value>,
}

impl Cell {
    #[must_use]
    /// Creates an unrendered markdown cell.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markdown,
            text: text.into(),
            rendered: false,
            extra: Map::new(),
        }
    }

    #[must_use]
    /// Creates a non-markdown cell of the given host type.
    pub fn other(kind: &str, text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::from_name(kind),
            text: text.into(),
            rendered: false,
            extra: Map::new(),
        }
    }

    #[must_use]
    /// Marks the cell as displayed in rendered form.
    pub fn rendered(mut self) -> Self {
        self.rendered = true;
        self
    }

    #[must_use]
    /// True for heading-capable text cells.
    pub fn is_markdown(&self) -> bool {
        self.kind.is_markdown()
    }
}
