//! The host document as an injected capability.
//!
//! The outline pass never owns the document. It borrows a [`CellStore`] for the duration of a
//! run and commits every mutation through it immediately, so a host can back the trait with
//! whatever it keeps cells in. [`Notebook`] is the in-memory implementation used by the file
//! formats and the tests.

use crate::cell::{Cell, CellKind};

/// Read/write access to an ordered sequence of cells.
pub trait CellStore {
    /// Number of cells.
    fn len(&self) -> usize;

    /// True when the store holds no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of the cell at `index`.
    fn kind(&self, index: usize) -> &CellKind;

    /// Source text of the cell at `index`.
    fn text(&self, index: usize) -> &str;

    /// Replaces the source text of the cell at `index`.
    fn set_text(&mut self, index: usize, text: String);

    /// Whether the cell at `index` is currently displayed rendered.
    fn is_rendered(&self, index: usize) -> bool;

    /// Switches the cell at `index` to its rendered display.
    fn render(&mut self, index: usize);

    /// Switches the cell at `index` back to its editable display.
    fn unrender(&mut self, index: usize);

    /// Places `cell` at `index`, shifting later cells down. Inserting after `i` is `insert(i + 1)`.
    fn insert(&mut self, index: usize, cell: Cell);

    /// Finds the first cell of `kind` whose text satisfies `matches`.
    fn find(&self, kind: &CellKind, matches: impl Fn(&str) -> bool) -> Option<usize>
    where
        Self: Sized,
    {
        (0..self.len()).find(|&i| self.kind(i) == kind && matches(self.text(i)))
    }

    /// Replaces a cell's text, returning it to its prior display state afterwards.
    fn rewrite(&mut self, index: usize, text: String) {
        let rendered = self.is_rendered(index);
        self.unrender(index);
        self.set_text(index, text);
        if rendered {
            self.render(index);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// In-memory document: an ordered list of cells plus host fields for the whole file.
pub struct Notebook {
    /// Cells in reading order.
    pub cells: Vec<Cell>,
    /// Document-level host fields carried through untouched.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Notebook {
    #[must_use]
    /// Wraps a list of cells with no document-level fields.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            extra: serde_json::Map::new(),
        }
    }

    #[must_use]
    /// Texts of all cells, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

impl CellStore for Notebook {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn kind(&self, index: usize) -> &CellKind {
        &self.cells[index].kind
    }

    fn text(&self, index: usize) -> &str {
        &self.cells[index].text
    }

    fn set_text(&mut self, index: usize, text: String) {
        self.cells[index].text = text;
    }

    fn is_rendered(&self, index: usize) -> bool {
        self.cells[index].rendered
    }

    fn render(&mut self, index: usize) {
        self.cells[index].rendered = true;
    }

    fn unrender(&mut self, index: usize) {
        self.cells[index].rendered = false;
    }

    fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }
}
