use super::{Action, Document};
use crate::error::Error;
use crate::outline::renumber::Numbering;
use crate::outline::{OutlineOptions, Synchronizer};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_synchronize_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "# Intro\nSee [setup](#Setup).\n## Setup\n").unwrap();
    let options = OutlineOptions::default();
    let sync = Synchronizer::new(options.clone());

    let mut doc = Document::load(&path, &options).unwrap();
    let report = Action::Synchronize.run(&sync, &mut doc.notebook);
    assert_eq!(report.numbering, Some(Numbering::Applied));
    assert!(doc.save().unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# 1. Intro\nSee [setup](#1.1-Setup).\n## 1.1 Setup\n"
    );

    let mut doc = Document::load(&path, &options).unwrap();
    let report = Action::Synchronize.run(&sync, &mut doc.notebook);
    assert_eq!(report.numbering, Some(Numbering::Removed));
    assert!(doc.save().unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Intro\nSee [setup](#Setup).\n## Setup\n"
    );
}

#[test]
fn test_unchanged_document_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toc.md");
    fs::write(&path, "# Table of Contents\n* [Intro](#Intro)\n\n# Intro\n").unwrap();
    let options = OutlineOptions::default();

    let mut doc = Document::load(&path, &options).unwrap();
    Action::RebuildToc.run(&Synchronizer::new(options), &mut doc.notebook);
    assert!(!doc.save().unwrap());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "a,b").unwrap();
    let err = Document::load(&path, &OutlineOptions::default()).err().unwrap();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn test_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.ipynb");
    let err = Document::load(&path, &OutlineOptions::default()).err().unwrap();
    assert!(matches!(err, Error::Io { .. }));
}
