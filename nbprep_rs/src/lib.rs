//! # nbprep
//!
//! **Notebook prep for training runs** - two small chores done before a
//! notebook is opened:
//!
//! - **Notebook check** - flags functions (or the `CONFIG` block) defined in
//!   more than one code cell, and markdown cells left empty
//! - **Dataset staging** - copies the dataset from the first candidate
//!   location that exists into the notebook's own `data/` folder, never
//!   overwriting data already there
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use nbprep::{CopyConfig, DatasetCopier, NotebookValidator, Painter};
//! use std::path::PathBuf;
//!
//! let painter = Painter::plain();
//! let clean = NotebookValidator::new("train_notebook.ipynb", painter).validate();
//!
//! let copier = DatasetCopier::new(
//!     CopyConfig {
//!         candidates: vec![PathBuf::from("../data")],
//!         destination: PathBuf::from("data"),
//!     },
//!     painter,
//! );
//! let staged = copier.copy();
//! println!("clean={clean} staged={staged}");
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! nbprep                         # check, copy, summary
//! nbprep check --notebook nb.ipynb
//! nbprep copy --source /mnt/data --dest data
//! nbprep --json                  # machine-readable result
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Duplicate-definition and empty-cell checks over a notebook.
pub mod validator;

/// Dataset source probing and recursive copy.
pub mod copier;

/// Notebook document model (`cells`, `cell_type`, `source`).
pub mod notebook;

/// Error taxonomy for both components.
pub mod error;

// ============================================================================
// CLI Support
// ============================================================================

/// Command-line arguments (clap).
pub mod cli;

/// Shared run logic: settings, both components, summary, exit code.
pub mod entrypoint;

/// Optional `.nbprep/config.toml` and path resolution.
pub mod config;

/// Terminal colors and status prefixes.
pub mod colors;

/// Spinner and size formatting.
pub mod progress;

/// Common types used throughout the crate.
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use colors::Painter;
pub use copier::{CopyConfig, CopyOutcome, DatasetCopier};
pub use error::{CopyError, NotebookError};
pub use notebook::Notebook;
pub use types::{ColorMode, Mode, OutputMode};
pub use validator::{DuplicateRecord, NotebookValidator, ValidationReport};
