//! Plain markdown files as a sequence of cells.
//!
//! A markdown file has no cells of its own, so it is cut into them with the same fence-aware
//! segmentation the splitter uses: each heading line becomes a cell, as does the text between
//! headings. The bullet list right under a table of contents heading stays with it, since the
//! table of contents is a single cell.
//!
//! Cell texts carry no surrounding line breaks. The breaks that followed each cell are kept in
//! its [`SEPARATOR`] field, and whatever preceded the first cell in the notebook's [`LEADING`]
//! field, so an untouched file is written back byte for byte. Cells added during a run have no
//! recorded separator and are followed by a blank line.

use std::ops::Range;

use serde_json::Value;

use crate::cell::Cell;
use crate::error::Result;
use crate::formats::Format;
use crate::outline::splitter::segment_spans;
use crate::outline::OutlineOptions;
use crate::store::Notebook;

/// Cell field holding the text that followed the cell in the file.
pub const SEPARATOR: &str = "separator";
/// Notebook field holding the text before the first cell.
pub const LEADING: &str = "leading";

/// Markdown file handler.
pub struct MarkdownFormat {
    options: OutlineOptions,
}

impl MarkdownFormat {
    #[must_use]
    /// Handler that recognises the table of contents by the given phrases.
    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}

/// Whether a line can belong to a generated table of contents list.
fn is_toc_line(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with("* ")
}

/// Splits `span` into the table of contents list at its top and the text after it.
///
/// Returns the end of the last bullet line, if there is one, and the start of the first line
/// that is not part of the list, if there is one.
fn toc_list(text: &str, span: &Range<usize>) -> (Option<usize>, Option<usize>) {
    let mut list_end = None;
    let mut pos = span.start;
    for line in text[span.clone()].split('\n') {
        if !is_toc_line(line) {
            return (list_end, Some(pos));
        }
        if !line.trim().is_empty() {
            list_end = Some(pos + line.trim_end().len());
        }
        pos += line.len() + 1;
    }
    (list_end, None)
}

impl MarkdownFormat {
    /// Byte ranges of the cells in `contents`.
    fn cell_spans(&self, contents: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = Vec::new();
        let mut after_toc = false;

        for span in segment_spans(contents) {
            let piece = &contents[span.clone()];
            if piece.trim().is_empty() {
                continue;
            }
            if after_toc && !piece.starts_with('#') {
                after_toc = false;
                let (list_end, rest) = toc_list(contents, &span);
                if let (Some(end), Some(toc)) = (list_end, spans.last_mut()) {
                    toc.end = end;
                }
                if let Some(rest) = rest {
                    spans.push(rest..span.end);
                }
                continue;
            }
            after_toc = self.options.is_toc(piece);
            spans.push(span);
        }
        spans
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["md", "markdown"]
    }

    fn read(&self, contents: &str) -> Result<Notebook> {
        let spans = self.cell_spans(contents);
        let mut notebook = Notebook::default();
        let leading = spans.first().map_or(contents.len(), |s| s.start);
        if leading > 0 {
            notebook
                .extra
                .insert(LEADING.into(), Value::String(contents[..leading].into()));
        }

        for (i, span) in spans.iter().enumerate() {
            let next = spans.get(i + 1).map_or(contents.len(), |s| s.start);
            let mut cell = Cell::markdown(&contents[span.clone()]);
            cell.extra.insert(
                SEPARATOR.into(),
                Value::String(contents[span.end..next].into()),
            );
            notebook.cells.push(cell);
        }
        Ok(notebook)
    }

    fn write(&self, notebook: &Notebook) -> Result<String> {
        let mut out = String::new();
        if let Some(Value::String(leading)) = notebook.extra.get(LEADING) {
            out.push_str(leading);
        }

        let last = notebook.cells.len().saturating_sub(1);
        for (i, cell) in notebook.cells.iter().enumerate() {
            let text = cell.text.trim_end_matches(['\n', '\r']);
            if text.trim().is_empty() {
                continue;
            }
            out.push_str(text);
            match cell.extra.get(SEPARATOR) {
                Some(Value::String(separator)) => out.push_str(separator),
                _ if i == last => out.push('\n'),
                _ => out.push_str("\n\n"),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
