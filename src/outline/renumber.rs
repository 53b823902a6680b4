//! Writing section labels into heading text, or taking them out again.
//!
//! Numbering is a toggle with no stored state. Labels are applied to every heading; if that
//! changed nothing at all, every heading already showed exactly its label, and the request is
//! read as "remove the numbers" instead. Any change, including correcting a stale label,
//! keeps the document numbered. This is a heuristic: a document can only be un-numbered from
//! a fully and correctly numbered state.

use crate::outline::heading::{strip_label, Heading};
use crate::outline::links::rewrite_links;
use crate::outline::walker::Outline;
use crate::outline::OutlineOptions;
use crate::store::CellStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which way the toggle went.
pub enum Numbering {
    /// Headings now carry their labels.
    Applied,
    /// Headings are back to bare titles.
    Removed,
}

/// Retitles the heading in cell `index`, retargeting links when the title changes.
///
/// Returns whether the title changed.
fn retitle<S, F>(store: &mut S, index: usize, options: &OutlineOptions, title_for: F) -> bool
where
    S: CellStore,
    F: FnOnce(&str) -> String,
{
    let Some(heading) = Heading::parse(store.text(index)) else {
        return false;
    };
    let old_title = heading.title.to_string();
    let new_title = title_for(&old_title);
    let new_text = heading.with_title(&new_title);

    let changed = old_title != new_title;
    if changed {
        rewrite_links(store, &old_title, &new_title, options);
    }
    if store.text(index) != new_text {
        store.rewrite(index, new_text);
    }
    changed
}

/// Writes each entry's label in front of its bare title. Returns whether any title changed.
pub fn apply_labels<S: CellStore>(store: &mut S, outline: &Outline, options: &OutlineOptions) -> bool {
    let mut changed = false;
    for entry in &outline.entries {
        let prefix = entry.label.heading_prefix();
        changed |= retitle(store, entry.index, options, |title| {
            format!("{prefix} {}", strip_label(title)).trim().to_string()
        });
    }
    changed
}

/// Reduces every entry's heading to its bare title.
pub fn strip_labels<S: CellStore>(store: &mut S, outline: &Outline, options: &OutlineOptions) {
    for entry in &outline.entries {
        retitle(store, entry.index, options, |title| strip_label(title).to_string());
    }
}

/// Applies labels, or removes them when applying changed nothing.
pub fn renumber<S: CellStore>(store: &mut S, outline: &Outline, options: &OutlineOptions) -> Numbering {
    if apply_labels(store, outline, options) {
        log::debug!("numbered {} headings", outline.entries.len());
        Numbering::Applied
    } else {
        strip_labels(store, outline, options);
        log::debug!("removed numbering from {} headings", outline.entries.len());
        Numbering::Removed
    }
}

#[cfg(test)]
#[path = "../tests/renumber.rs"]
mod tests;
