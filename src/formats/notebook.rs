//! Jupyter notebook (`.ipynb`, nbformat 4) format.
//!
//! Only `cell_type` and `source` are interpreted; every other notebook and cell field is
//! kept as-is and written back. Output follows the layout Jupyter itself writes: keys in
//! sorted order, one-space indentation, `source` as a list of lines, and a trailing newline.

use crate::cell::{Cell, CellKind};
use crate::error::Result;
use crate::formats::Format;
use crate::store::Notebook;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Notebook JSON handler.
pub struct NotebookFormat;

#[derive(Deserialize)]
/// On-disk notebook layout.
struct RawNotebook {
    cells: Vec<RawCell>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Deserialize)]
/// On-disk cell layout.
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: Source,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
/// Cell source is either one string or a list of lines.
enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Source {
    fn into_text(self) -> String {
        match self {
            Self::Lines(lines) => lines.concat(),
            Self::Text(text) => text,
        }
    }

    fn from_text(text: &str) -> Self {
        Self::Lines(text.split_inclusive('\n').map(str::to_string).collect())
    }
}

impl Format for NotebookFormat {
    fn name(&self) -> &'static str {
        "notebook"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["ipynb"]
    }

    fn read(&self, contents: &str) -> Result<Notebook> {
        let raw: RawNotebook = serde_json::from_str(contents)?;
        let cells = raw
            .cells
            .into_iter()
            .map(|cell| {
                let kind = CellKind::from_name(&cell.cell_type);
                Cell {
                    rendered: kind.is_markdown(),
                    kind,
                    text: cell.source.into_text(),
                    extra: cell.rest,
                }
            })
            .collect();
        Ok(Notebook {
            cells,
            extra: raw.rest,
        })
    }

    fn write(&self, notebook: &Notebook) -> Result<String> {
        let with_ids = notebook.cells.iter().any(|c| c.extra.contains_key("id"));

        let cells: Vec<Value> = notebook
            .cells
            .iter()
            .map(|cell| -> Result<Value> {
                let mut fields = cell.extra.clone();
                fields
                    .entry("metadata")
                    .or_insert_with(|| Value::Object(Map::new()));
                if with_ids && !fields.contains_key("id") {
                    fields.insert("id".to_string(), Value::String(fresh_id()));
                }
                fields.insert(
                    "cell_type".to_string(),
                    Value::String(cell.kind.name().to_string()),
                );
                fields.insert(
                    "source".to_string(),
                    serde_json::to_value(Source::from_text(&cell.text))?,
                );
                Ok(Value::Object(fields))
            })
            .collect::<Result<_>>()?;

        let mut root = notebook.extra.clone();
        root.insert("cells".to_string(), Value::Array(cells));

        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        Value::Object(root).serialize(&mut serializer)?;
        let mut text = String::from_utf8_lossy(&out).into_owned();
        text.push('\n');
        Ok(text)
    }
}

/// Short random cell id in the style Jupyter generates.
fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
#[path = "../tests/notebook.rs"]
mod tests;
