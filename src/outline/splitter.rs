//! Breaking mixed markdown cells apart at heading lines.
//!
//! Every heading should sit in a cell of its own so that numbering and the table of contents
//! can address it. A cell that mixes body text with one or more heading lines is cut so that
//! each piece starts at a heading (or is the body text leading up to the first one). Fenced
//! code is opaque: a `#` line inside a fence is code, not a heading.

use std::ops::Range;

use crate::cell::Cell;
use crate::outline::OutlineOptions;
use crate::store::CellStore;

const FENCE: &str = "```";

#[derive(Debug, PartialEq, Eq)]
/// Line scanner state.
enum Scan {
    /// Outside any fence.
    Normal,
    /// Inside a fence opened by this exact backtick run.
    InFence(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
/// What a splitting pass did to the document.
pub struct SplitReport {
    /// Number of cells inserted.
    pub inserted: usize,
    /// The caller's tracked cell index after the split, or `None` if that very cell was split.
    pub tracked: Option<usize>,
}

#[must_use]
/// Cuts `text` into heading-aligned segments in their original order.
///
/// Heading lines become segments of their own; body text between them is gathered into one
/// segment; a fenced block closes the segment it belongs to. Only line breaks are trimmed from
/// a segment's ends, so indentation survives. Segments that trimmed down to nothing are kept
/// as empty strings so that the caller can tell a boundary was crossed.
pub fn segments(text: &str) -> Vec<String> {
    segment_spans(text)
        .into_iter()
        .map(|span| text[span].to_string())
        .collect()
}

#[must_use]
/// Byte ranges of the segments [`segments`] returns, within `text`.
///
/// Whatever lies between consecutive ranges is the line breaks and blank lines that separated
/// the segments, which lets a caller put the text back together exactly.
pub fn segment_spans(text: &str) -> Vec<Range<usize>> {
    let mut state = Scan::Normal;
    let mut start = 0;
    let mut offset = 0;
    let mut out = Vec::new();

    for line in text.split('\n') {
        let line_start = offset;
        let line_end = offset + line.len();
        offset = (line_end + 1).min(text.len());
        match state {
            Scan::Normal => {
                if line.starts_with(FENCE) {
                    let run = line.chars().take_while(|&c| c == '`').count();
                    state = Scan::InFence(line[..run].to_string());
                } else if line.starts_with('#') {
                    if line_start > start {
                        out.push(trim_breaks(text, start..line_start));
                    }
                    out.push(line_start..line_end);
                    start = offset;
                }
            }
            Scan::InFence(ref marker) => {
                if line.starts_with(marker.as_str()) {
                    state = Scan::Normal;
                    out.push(trim_breaks(text, start..line_end));
                    start = offset;
                }
            }
        }
    }

    if !text[start..].trim().is_empty() {
        out.push(trim_breaks(text, start..text.len()));
    }
    out
}

/// Narrows `span` past the line breaks at either end.
fn trim_breaks(text: &str, span: Range<usize>) -> Range<usize> {
    let is_break = |c: char| c == '\n' || c == '\r';
    let slice = &text[span.clone()];
    let lead = slice.len() - slice.trim_start_matches(is_break).len();
    let kept = slice.trim_matches(is_break).len();
    span.start + lead..span.start + lead + kept
}

/// Splits every mixed markdown cell in the store, table of contents excepted.
///
/// The first non-empty segment replaces the cell's text in place and the rest are inserted
/// right after it. Cells are visited back to front so that indices still to be visited never
/// move. `tracked` is an index the caller cares about; the report carries where it ended up.
pub fn split_cells<S: CellStore>(
    store: &mut S,
    options: &OutlineOptions,
    tracked: Option<usize>,
) -> SplitReport {
    let mut inserted = 0;
    let mut shift = 0;
    let mut lost = false;

    for i in (0..store.len()).rev() {
        if !store.kind(i).is_markdown() || options.is_toc(store.text(i)) {
            continue;
        }
        let pieces = segments(store.text(i));
        if pieces.len() < 2 {
            continue;
        }

        let rendered = store.is_rendered(i);
        let mut added = 0;
        for piece in pieces.into_iter().filter(|p| !p.trim().is_empty()) {
            if added == 0 {
                store.rewrite(i, piece);
            } else {
                match tracked {
                    Some(t) if t == i => lost = true,
                    Some(t) if i < t => shift += 1,
                    _ => {}
                }
                let mut cell = Cell::markdown(piece);
                cell.rendered = rendered;
                store.insert(i + added, cell);
                inserted += 1;
            }
            added += 1;
        }
        log::debug!("split cell {i} into {added} cells");
    }

    SplitReport {
        inserted,
        tracked: if lost { None } else { tracked.map(|t| t + shift) },
    }
}

#[cfg(test)]
#[path = "../tests/splitter.rs"]
mod tests;
