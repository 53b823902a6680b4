//! The outline synchronizer: section numbering, link upkeep and the table of contents.
//!
//! A run goes through fixed stages, each committing its changes to the store as it goes:
//!
//! ```text
//! Idle -> Splitting -> Walking -> Renumbering -> LinkFixup -> TocRebuild -> Idle
//! ```
//!
//! Link fix-up happens inside renumbering, heading by heading. Nothing is kept between runs;
//! every run recomputes labels from the headings as they stand. Structural problems are
//! collected as warnings and reported together at the end, and a run always completes.

pub mod anchor;
pub mod heading;
pub mod links;
pub mod renumber;
pub mod splitter;
pub mod toc;
pub mod walker;

use crate::cell::CellKind;
use crate::store::CellStore;
use renumber::Numbering;
use splitter::SplitReport;
use walker::StructuralWarning;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Phrases identifying the cells the outline treats specially.
pub struct OutlineOptions {
    /// Title of the table of contents heading.
    pub toc_title: String,
    /// Title of the references heading, which is neither numbered nor listed.
    pub references_title: String,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self::new("Table of Contents", "References")
    }
}

impl OutlineOptions {
    #[must_use]
    /// Options with the given phrases.
    pub fn new(toc_title: impl Into<String>, references_title: impl Into<String>) -> Self {
        Self {
            toc_title: toc_title.into(),
            references_title: references_title.into(),
        }
    }

    #[must_use]
    /// The heading line prefix of a table of contents cell, if `text` is one.
    pub fn toc_prefix<'a>(&self, text: &'a str) -> Option<&'a str> {
        heading::phrase_prefix(text, &self.toc_title)
    }

    #[must_use]
    /// Whether `text` opens the table of contents.
    pub fn is_toc(&self, text: &str) -> bool {
        self.toc_prefix(text).is_some()
    }

    #[must_use]
    /// Whether `text` opens the references section.
    pub fn is_references(&self, text: &str) -> bool {
        heading::phrase_prefix(text, &self.references_title).is_some()
    }

    #[must_use]
    /// Whether a heading is left out of numbering and the table of contents.
    pub fn is_excluded(&self, text: &str) -> bool {
        self.is_toc(text) || self.is_references(text)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
/// What a synchronization run did.
pub struct SyncReport {
    /// Cell splitting outcome.
    pub split: SplitReport,
    /// Direction of the numbering toggle, when numbering ran.
    pub numbering: Option<Numbering>,
    /// Structural problems found while walking the headings.
    pub warnings: Vec<StructuralWarning>,
    /// Index of the table of contents cell, when it was rebuilt.
    pub toc: Option<usize>,
}

impl SyncReport {
    #[must_use]
    /// All warnings as one message, one per line, or `None` when there were none.
    pub fn alert(&self) -> Option<String> {
        if self.warnings.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.warnings.iter().map(ToString::to_string).collect();
        Some(lines.join("\n"))
    }
}

#[derive(Clone, Debug, Default)]
/// Entry points a host triggers against its document.
pub struct Synchronizer {
    options: OutlineOptions,
}

impl Synchronizer {
    #[must_use]
    /// Synchronizer recognising the given phrases.
    pub fn new(options: OutlineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    /// The phrases in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Splits mixed cells, toggles section numbering, retargets links to renamed headings,
    /// and rebuilds the table of contents if the document has one.
    pub fn synchronize_outline<S: CellStore>(&self, store: &mut S) -> SyncReport {
        let split = splitter::split_cells(store, &self.options, None);
        let outline = walker::walk(store, &self.options);
        let numbering = renumber::renumber(store, &outline, &self.options);

        let has_toc = store
            .find(&CellKind::Markdown, |text| self.options.is_toc(text))
            .is_some();
        let toc = has_toc.then(|| toc::rebuild_toc(store, &self.options));

        let report = SyncReport {
            split,
            numbering: Some(numbering),
            warnings: outline.warnings,
            toc,
        };
        if let Some(alert) = report.alert() {
            log::debug!("structural warnings:\n{alert}");
        }
        report
    }

    /// Splits mixed cells and rebuilds the table of contents, creating it if needed.
    pub fn rebuild_table_of_contents<S: CellStore>(&self, store: &mut S) -> SyncReport {
        let split = splitter::split_cells(store, &self.options, None);
        let toc = toc::rebuild_toc(store, &self.options);
        SyncReport {
            split,
            toc: Some(toc),
            ..SyncReport::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/outline.rs"]
mod tests;
