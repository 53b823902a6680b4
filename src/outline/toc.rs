//! Table of contents generation.
//!
//! The table of contents lives in a single markdown cell opened by a heading with the
//! configured phrase. Its text is regenerated whole from the current headings: one bullet per
//! heading, indented a tab per level below the top, linking to the heading's fragment.

use crate::cell::{Cell, CellKind};
use crate::outline::anchor::to_anchor;
use crate::outline::heading::Heading;
use crate::outline::OutlineOptions;
use crate::store::CellStore;

/// Bullet standing in for a level that the headings skip.
const PLACEHOLDER: &str = "* &nbsp;";

#[must_use]
/// Levels and titles of every heading the table of contents lists, in document order.
pub fn toc_headings<S: CellStore>(store: &S, options: &OutlineOptions) -> Vec<(usize, String)> {
    (0..store.len())
        .filter(|&i| store.kind(i).is_markdown())
        .filter_map(|i| {
            let text = store.text(i);
            let heading = Heading::parse(text)?;
            (!options.is_excluded(text)).then(|| (heading.level, heading.title.to_string()))
        })
        .collect()
}

#[must_use]
/// Renders the table of contents text under the given heading line.
///
/// When a heading is more than one level deeper than the one before it, placeholder bullets
/// fill the missing depths so the list nests consistently.
pub fn render_toc(header: &str, headings: &[(usize, String)]) -> String {
    let mut out = format!("{header}\n");
    let mut prev = 0;
    for (level, title) in headings {
        let level = *level;
        for depth in prev..level.saturating_sub(1) {
            out.push_str(&"\t".repeat(depth));
            out.push_str(PLACEHOLDER);
            out.push('\n');
        }
        out.push_str(&"\t".repeat(level - 1));
        out.push_str(&format!("* [{title}](#{})\n", to_anchor(title)));
        prev = level;
    }
    out
}

/// Regenerates the table of contents, creating it at the top of the document if absent.
///
/// An existing heading line keeps its marker depth and spacing. Returns the cell's index.
pub fn rebuild_toc<S: CellStore>(store: &mut S, options: &OutlineOptions) -> usize {
    let headings = toc_headings(store, options);
    let existing = store.find(&CellKind::Markdown, |text| options.is_toc(text));

    let header = existing
        .and_then(|i| options.toc_prefix(store.text(i)))
        .map_or_else(|| format!("# {}", options.toc_title), str::to_string);
    let text = render_toc(&header, &headings);

    let index = if let Some(index) = existing {
        store.unrender(index);
        store.set_text(index, text);
        index
    } else {
        store.insert(0, Cell::markdown(text));
        0
    };
    store.render(index);
    log::debug!("table of contents at cell {index} lists {} headings", headings.len());
    index
}

#[cfg(test)]
#[path = "../tests/toc.rs"]
mod tests;
