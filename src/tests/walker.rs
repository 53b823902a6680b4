use super::{walk, SectionCounter, StructuralWarning};
use crate::cell::Cell;
use crate::outline::OutlineOptions;
use crate::store::Notebook;

fn labels(levels: &[usize]) -> (Vec<String>, Vec<StructuralWarning>) {
    let mut counter = SectionCounter::default();
    let mut labels = Vec::new();
    let mut warnings = Vec::new();
    for &level in levels {
        let (label, warning) = counter.advance(level);
        labels.push(label.to_string());
        warnings.extend(warning);
    }
    (labels, warnings)
}

#[test]
fn test_hierarchical_labels() {
    let (labels, warnings) = labels(&[1, 2, 2, 1, 2, 3]);
    assert_eq!(labels, vec!["1", "1.1", "1.2", "2", "2.1", "2.1.1"]);
    assert!(warnings.is_empty());
}

#[test]
fn test_skipped_level_warns_but_labels() {
    let (labels, warnings) = labels(&[1, 3]);
    assert_eq!(labels[1], "1.0.1");
    assert_eq!(
        warnings,
        vec![StructuralWarning::SkippedLevel {
            level: 3,
            parent_level: 1,
            section: "1".to_string(),
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "You placed a Header 3 cell under a Header 1 cell in section 1."
    );
}

#[test]
fn test_double_skip_reports_deepest_level() {
    let (labels, warnings) = labels(&[1, 2, 5]);
    assert_eq!(labels[2], "1.1.0.0.1");
    assert_eq!(
        warnings,
        vec![StructuralWarning::SkippedLevel {
            level: 5,
            parent_level: 2,
            section: "1.1".to_string(),
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "You placed a Header 5 cell under a Header 2 cell in section 1.1."
    );
}

#[test]
fn test_deep_opening_reported_once() {
    let (labels, warnings) = labels(&[2, 2, 1, 2]);
    assert_eq!(labels, vec!["0.1", "0.2", "1", "1.1"]);
    assert_eq!(warnings, vec![StructuralWarning::OpensDeep { level: 2 }]);
    assert_eq!(
        warnings[0].to_string(),
        "Notebook begins with a Header 2 cell."
    );
}

#[test]
fn test_return_to_top_clears_deeper_counters() {
    let (labels, warnings) = labels(&[1, 2, 3, 1, 2, 3]);
    assert_eq!(labels, vec!["1", "1.1", "1.1.1", "2", "2.1", "2.1.1"]);
    assert!(warnings.is_empty());
}

#[test]
fn test_level_one_prefix_has_trailing_dot() {
    let mut counter = SectionCounter::default();
    let (top, _) = counter.advance(1);
    let (sub, _) = counter.advance(2);
    assert_eq!(top.heading_prefix(), "1.");
    assert_eq!(sub.heading_prefix(), "1.1");
}

#[test]
fn test_walk_skips_toc_references_and_code() {
    let doc = Notebook::new(vec![
        Cell::markdown("# Table of Contents\n* [Intro](#Intro)"),
        Cell::markdown("# Intro"),
        Cell::other("code", "# Not a heading"),
        Cell::markdown("Body"),
        Cell::markdown("## Details"),
        Cell::markdown("#References"),
    ]);
    let outline = walk(&doc, &OutlineOptions::default());

    let found: Vec<(usize, String)> = outline
        .entries
        .iter()
        .map(|e| (e.index, e.label.to_string()))
        .collect();
    assert_eq!(found, vec![(1, "1".to_string()), (4, "1.1".to_string())]);
    assert!(outline.warnings.is_empty());
}
