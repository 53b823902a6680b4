//! Hierarchical section numbering.
//!
//! One left-to-right pass over the document keeps a counter per heading level and derives
//! each heading's dotted label from them. Headings that skip a level still get a label (with
//! a zero where the missing level would be) and produce a [`StructuralWarning`].

use crate::outline::heading::{Heading, MAX_LEVEL};
use crate::outline::OutlineOptions;
use crate::store::CellStore;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Dotted position of a heading in the hierarchy, one counter per level down to its own.
pub struct SectionLabel {
    counters: Vec<usize>,
}

impl SectionLabel {
    #[must_use]
    /// Per-level counters, outermost first.
    pub fn counters(&self) -> &[usize] {
        &self.counters
    }

    #[must_use]
    /// Level of the heading this label belongs to.
    pub fn level(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    /// Text placed in front of the heading title: top-level labels carry a trailing dot.
    pub fn heading_prefix(&self) -> String {
        if self.level() == 1 {
            format!("{self}.")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.counters.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading placed somewhere the hierarchy does not allow. Never fatal.
pub enum StructuralWarning {
    /// The first heading is deeper than level 1.
    OpensDeep {
        /// Level of the offending heading.
        level: usize,
    },
    /// A heading sits directly under a heading more than one level above it.
    SkippedLevel {
        /// Level of the offending heading.
        level: usize,
        /// Level of the heading it ended up under.
        parent_level: usize,
        /// Label of the enclosing section.
        section: String,
    },
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpensDeep { level } => write!(f, "Notebook begins with a Header {level} cell."),
            Self::SkippedLevel {
                level,
                parent_level,
                section,
            } => write!(
                f,
                "You placed a Header {level} cell under a Header {parent_level} cell in section {section}."
            ),
        }
    }
}

#[derive(Debug)]
/// Running per-level counters.
pub struct SectionCounter {
    levels: [usize; MAX_LEVEL],
    current: usize,
    reported_opening: bool,
}

impl Default for SectionCounter {
    fn default() -> Self {
        Self {
            levels: [0; MAX_LEVEL],
            current: 1,
            reported_opening: false,
        }
    }
}

impl SectionCounter {
    /// Counts a heading at `level` (1..=6) and returns its label.
    ///
    /// Going up one or more levels clears the counters of every level that was left. A label
    /// that still contains a zero means a level was skipped; the warning describes where. A
    /// deep opening heading is only reported the first time.
    pub fn advance(&mut self, level: usize) -> (SectionLabel, Option<StructuralWarning>) {
        let level = level.clamp(1, MAX_LEVEL);
        if level < self.current {
            self.levels[level..self.current].fill(0);
        }
        self.levels[level - 1] += 1;
        self.current = level;

        let counters = self.levels[..level].to_vec();
        let warning = self.check(&counters);
        (SectionLabel { counters }, warning)
    }

    fn check(&mut self, counters: &[usize]) -> Option<StructuralWarning> {
        let mut zeros = counters
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(k, _)| k);
        let first = zeros.next()?;
        let level = zeros.last().unwrap_or(first) + 2;

        if first == 0 {
            if self.reported_opening {
                return None;
            }
            self.reported_opening = true;
            return Some(StructuralWarning::OpensDeep { level });
        }

        let section: Vec<String> = counters[..first].iter().map(ToString::to_string).collect();
        Some(StructuralWarning::SkippedLevel {
            level,
            parent_level: first,
            section: section.join("."),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading cell and the label computed for it.
pub struct OutlineEntry {
    /// Cell index in the store.
    pub index: usize,
    /// Heading level.
    pub level: usize,
    /// Computed label.
    pub label: SectionLabel,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Result of walking the document.
pub struct Outline {
    /// Numbered headings in document order.
    pub entries: Vec<OutlineEntry>,
    /// Structural problems found on the way.
    pub warnings: Vec<StructuralWarning>,
}

#[must_use]
/// Labels every heading cell, skipping the table of contents and the references heading.
pub fn walk<S: CellStore>(store: &S, options: &OutlineOptions) -> Outline {
    let mut counter = SectionCounter::default();
    let mut outline = Outline::default();

    for index in 0..store.len() {
        if !store.kind(index).is_markdown() {
            continue;
        }
        let text = store.text(index);
        let Some(heading) = Heading::parse(text) else {
            continue;
        };
        if options.is_excluded(text) {
            continue;
        }
        let (label, warning) = counter.advance(heading.level);
        outline.warnings.extend(warning);
        outline.entries.push(OutlineEntry {
            index,
            level: heading.level,
            label,
        });
    }

    log::debug!(
        "walked {} headings, {} warnings",
        outline.entries.len(),
        outline.warnings.len()
    );
    outline
}

#[cfg(test)]
#[path = "../tests/walker.rs"]
mod tests;
