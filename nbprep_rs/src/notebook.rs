//! Notebook document model.
//!
//! Only the parts of the `.ipynb` format the checks need are modelled:
//! the ordered cell list, each cell's type and its source text.

use std::path::Path;

use serde::Deserialize;

use crate::error::NotebookError;

#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cell {
    #[serde(default = "unknown_cell_type")]
    pub cell_type: String,
    #[serde(default)]
    pub source: Source,
}

/// Cell source as stored on disk: a list of lines, or one string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Lines(Vec::new())
    }
}

fn unknown_cell_type() -> String {
    "unknown".to_string()
}

impl Source {
    /// Lines concatenated as-is (they carry their own newlines).
    pub fn text(&self) -> String {
        match self {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text.clone(),
        }
    }
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == "code"
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == "markdown"
    }

    pub fn text(&self) -> String {
        self.source.text()
    }
}

impl Notebook {
    pub fn load(path: &Path) -> Result<Self, NotebookError> {
        if !path.is_file() {
            return Err(NotebookError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| NotebookError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn code_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }

    pub fn markdown_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_markdown()).count()
    }
}
