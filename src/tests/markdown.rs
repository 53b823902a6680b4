use super::MarkdownFormat;
use crate::formats::Format;
use crate::outline::Synchronizer;

const DOC: &str = "# Table of Contents
* [Intro](#Intro)

Preface paragraph.

# Intro

See [usage](#Usage).

```sh
# not a heading
```

## Usage
Run it.
";

#[test]
fn test_read_cuts_at_headings_and_keeps_toc_list() {
    let notebook = MarkdownFormat::default().read(DOC).unwrap();
    assert_eq!(
        notebook.texts(),
        vec![
            "# Table of Contents\n* [Intro](#Intro)",
            "Preface paragraph.",
            "# Intro",
            "See [usage](#Usage).\n\n```sh\n# not a heading\n```",
            "## Usage",
            "Run it.",
        ]
    );
}

#[test]
fn test_synchronize_markdown_file() {
    let format = MarkdownFormat::default();
    let mut notebook = format.read(DOC).unwrap();
    Synchronizer::default().synchronize_outline(&mut notebook);
    let written = format.write(&notebook).unwrap();

    assert_eq!(
        written,
        "# Table of Contents
* [1. Intro](#1.-Intro)
\t* [1.1 Usage](#1.1-Usage)

Preface paragraph.

# 1. Intro

See [usage](#1.1-Usage).

```sh
# not a heading
```

## 1.1 Usage
Run it.
"
    );
}

#[test]
fn test_untouched_file_is_written_back_unchanged() {
    let format = MarkdownFormat::default();
    for text in [
        DOC,
        "# Intro\n\n    let x = 1;\n    let y = 2;\n",
        "# Intro\nSome text.\n# Usage\nMore.\n",
        "\n\nPreamble without a trailing newline",
        "",
    ] {
        let notebook = format.read(text).unwrap();
        assert_eq!(format.write(&notebook).unwrap(), text);
    }
}

#[test]
fn test_indented_code_after_heading_keeps_indent() {
    let notebook = MarkdownFormat::default()
        .read("# Intro\n\n    let x = 1;\n    let y = 2;\n")
        .unwrap();
    assert_eq!(notebook.texts(), vec!["# Intro", "    let x = 1;\n    let y = 2;"]);
}

#[test]
fn test_sync_twice_restores_tight_spacing() {
    let text = "# Intro\nSome text.\n# Usage\nMore.\n";
    let format = MarkdownFormat::default();
    let sync = Synchronizer::default();
    let mut notebook = format.read(text).unwrap();

    sync.synchronize_outline(&mut notebook);
    assert_eq!(
        format.write(&notebook).unwrap(),
        "# 1. Intro\nSome text.\n# 2. Usage\nMore.\n"
    );

    sync.synchronize_outline(&mut notebook);
    assert_eq!(format.write(&notebook).unwrap(), text);
}

#[test]
fn test_new_toc_is_followed_by_blank_line() {
    let format = MarkdownFormat::default();
    let mut notebook = format.read("# Intro\nBody.\n").unwrap();
    Synchronizer::default().rebuild_table_of_contents(&mut notebook);
    assert_eq!(
        format.write(&notebook).unwrap(),
        "# Table of Contents\n* [Intro](#Intro)\n\n# Intro\nBody.\n"
    );
}
