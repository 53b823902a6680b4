use super::{apply_labels, renumber, Numbering};
use crate::cell::Cell;
use crate::outline::walker::walk;
use crate::outline::OutlineOptions;
use crate::store::Notebook;

fn run(doc: &mut Notebook) -> Numbering {
    let options = OutlineOptions::default();
    let outline = walk(doc, &options);
    renumber(doc, &outline, &options)
}

fn bare() -> Notebook {
    Notebook::new(vec![
        Cell::markdown("# Intro").rendered(),
        Cell::markdown("See [setup](#Setup)."),
        Cell::markdown("## Setup"),
        Cell::markdown("# Usage"),
    ])
}

#[test]
fn test_numbers_bare_headings_and_links() {
    let mut doc = bare();
    assert_eq!(run(&mut doc), Numbering::Applied);
    assert_eq!(
        doc.texts(),
        vec![
            "# 1. Intro",
            "See [setup](#1.1-Setup).",
            "## 1.1 Setup",
            "# 2. Usage"
        ]
    );
    assert!(doc.cells[0].rendered, "Rendered heading is rendered again");
}

#[test]
fn test_second_run_strips_third_run_restores() {
    let mut doc = bare();
    run(&mut doc);
    let numbered = doc.clone();

    assert_eq!(run(&mut doc), Numbering::Removed);
    assert_eq!(doc, bare());

    assert_eq!(run(&mut doc), Numbering::Applied);
    assert_eq!(doc, numbered);
}

#[test]
fn test_partially_correct_labels_stay_numbered() {
    let mut doc = Notebook::new(vec![
        Cell::markdown("# 1. Intro"),
        Cell::markdown("## 1.1 Setup"),
        Cell::markdown("# 5. Usage"),
    ]);
    assert_eq!(run(&mut doc), Numbering::Applied);
    assert_eq!(doc.texts(), vec!["# 1. Intro", "## 1.1 Setup", "# 2. Usage"]);
}

#[test]
fn test_marker_spacing_normalised_without_counting_as_change() {
    let mut doc = Notebook::new(vec![Cell::markdown("#1. Intro")]);
    let options = OutlineOptions::default();
    let outline = walk(&doc, &options);
    assert!(!apply_labels(&mut doc, &outline, &options));
    assert_eq!(doc.texts(), vec!["# 1. Intro"]);
}

#[test]
fn test_heading_body_lines_preserved() {
    let mut doc = Notebook::new(vec![Cell::markdown("# Intro\nstill here")]);
    run(&mut doc);
    assert_eq!(doc.texts(), vec!["# 1. Intro\nstill here"]);
}
