//! Notebook validator - duplicate definitions and empty markdown cells.
//!
//! Detection is purely textual: a code cell defines whatever follows its
//! first `def ` marker up to the next `(`, or `CONFIG` when it contains a
//! `CONFIG = {` block and no `def `. Matches inside strings or comments
//! count too.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::colors::Painter;
use crate::error::{NotebookError, describe};
use crate::notebook::Notebook;

const DEF_MARKER: &str = "def ";
const CONFIG_MARKER: &str = "CONFIG = {";
const CONFIG_SIGNATURE: &str = "CONFIG";

/// A signature seen again after its first cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub cell: usize,
    pub name: String,
    pub first_seen: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellStats {
    pub total: usize,
    pub code: usize,
    pub markdown: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub notebook: PathBuf,
    pub duplicates: Vec<DuplicateRecord>,
    pub empty_markdown_cells: Vec<usize>,
    /// Code cells with a `def ` marker but no usable name before `(`.
    pub unparsed_definitions: Vec<usize>,
    pub stats: CellStats,
}

impl ValidationReport {
    /// No duplicates and no empty markdown cells.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.empty_markdown_cells.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Definition<'a> {
    Function(&'a str),
    Config,
    Unparsed,
}

fn find_definition(source: &str) -> Option<Definition<'_>> {
    if let Some((_, rest)) = source.split_once(DEF_MARKER) {
        let name = rest.find('(').map(|end| rest[..end].trim());
        return Some(match name {
            Some(name) if !name.is_empty() => Definition::Function(name),
            _ => Definition::Unparsed,
        });
    }
    if source.contains(CONFIG_MARKER) {
        return Some(Definition::Config);
    }
    None
}

/// Scan a loaded notebook. Pure; nothing is printed.
pub fn scan(notebook: &Notebook, path: &Path) -> ValidationReport {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    let mut unparsed_definitions = Vec::new();
    let mut empty_markdown_cells = Vec::new();

    for (idx, cell) in notebook.cells.iter().enumerate() {
        let text = cell.text();

        if cell.is_markdown() && text.trim().is_empty() {
            empty_markdown_cells.push(idx);
            continue;
        }
        if !cell.is_code() {
            continue;
        }

        let name = match find_definition(&text) {
            Some(Definition::Function(name)) => name,
            Some(Definition::Config) => CONFIG_SIGNATURE,
            Some(Definition::Unparsed) => {
                warn!(cell = idx, "`def ` marker without a parsable name; skipping cell");
                unparsed_definitions.push(idx);
                continue;
            }
            None => continue,
        };

        match first_seen.get(name) {
            Some(&first) => {
                debug!(cell = idx, signature = name, first, "duplicate signature");
                duplicates.push(DuplicateRecord {
                    cell: idx,
                    name: name.to_string(),
                    first_seen: first,
                });
            }
            None => {
                first_seen.insert(name.to_string(), idx);
            }
        }
    }

    ValidationReport {
        notebook: path.to_path_buf(),
        duplicates,
        empty_markdown_cells,
        unparsed_definitions,
        stats: CellStats {
            total: notebook.cells.len(),
            code: notebook.code_cells(),
            markdown: notebook.markdown_cells(),
        },
    }
}

/// Checks one notebook file.
#[derive(Debug, Clone)]
pub struct NotebookValidator {
    path: PathBuf,
    painter: Painter,
}

impl NotebookValidator {
    pub fn new(path: impl Into<PathBuf>, painter: Painter) -> Self {
        Self {
            path: path.into(),
            painter,
        }
    }

    /// Load and scan without printing.
    pub fn check(&self) -> Result<ValidationReport, NotebookError> {
        let notebook = Notebook::load(&self.path)?;
        Ok(scan(&notebook, &self.path))
    }

    /// Load, scan and print the findings. `true` iff the notebook is clean.
    pub fn validate(&self) -> bool {
        let p = self.painter;
        let report = match self.check() {
            Ok(report) => report,
            Err(NotebookError::NotFound { path }) => {
                println!(
                    "{}",
                    p.status_error(&format!(
                        "Notebook not found: {}",
                        p.path(&path.display().to_string())
                    ))
                );
                return false;
            }
            Err(err) => {
                println!("{}", p.banner("Checking Notebook for Errors and Duplicates"));
                println!("\n{}", p.status_error(&format!("{}:", err.kind())));
                println!("{}", describe(err));
                return false;
            }
        };

        println!("{}", p.banner("Checking Notebook for Errors and Duplicates"));
        print_report(&report, p);
        report.is_clean()
    }
}

pub fn print_report(report: &ValidationReport, p: Painter) {
    if report.duplicates.is_empty() {
        println!("\n{}", p.status_ok("No duplicates found!"));
    } else {
        println!(
            "\n{}",
            p.status_warn(&format!(
                "Found {} potential duplicates:",
                p.number(report.duplicates.len())
            ))
        );
        for dup in &report.duplicates {
            println!(
                "   - {} appears in cells {} and {}",
                p.symbol(&dup.name),
                dup.first_seen,
                dup.cell
            );
        }
    }

    if report.empty_markdown_cells.is_empty() {
        println!("{}", p.status_ok("No empty cells found!"));
    } else {
        println!(
            "\n{}",
            p.status_warn(&format!(
                "Found {} empty markdown cells: {:?}",
                p.number(report.empty_markdown_cells.len()),
                report.empty_markdown_cells
            ))
        );
    }

    if !report.unparsed_definitions.is_empty() {
        println!(
            "{}",
            p.dim(&format!(
                "   (skipped `def ` without a name in cells {:?})",
                report.unparsed_definitions
            ))
        );
    }

    println!("\n{}", p.status_info("Notebook Statistics:"));
    println!("   Total cells: {}", p.number(report.stats.total));
    println!("   Code cells: {}", p.number(report.stats.code));
    println!("   Markdown cells: {}", p.number(report.stats.markdown));
}
