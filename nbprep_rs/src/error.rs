//! Error types for the notebook check and the dataset copy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a notebook document.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("Notebook not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read notebook {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed notebook {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while staging the dataset.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Source data directory not found ({} candidates checked)", checked.len())]
    SourceNotFound { checked: Vec<PathBuf> },

    #[error("Failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotebookError {
    /// Short tag matching the error taxonomy (`NotFoundError`, `ParseError`, ...).
    /// A document that cannot be read cannot be parsed either.
    pub fn kind(&self) -> &'static str {
        match self {
            NotebookError::NotFound { .. } => "NotFoundError",
            NotebookError::Read { .. } | NotebookError::Parse { .. } => "ParseError",
        }
    }
}

impl CopyError {
    pub fn kind(&self) -> &'static str {
        match self {
            CopyError::SourceNotFound { .. } => "SourceNotFoundError",
            CopyError::Copy { .. } | CopyError::Walk { .. } | CopyError::Read { .. } => {
                "CopyError"
            }
        }
    }
}

/// Render an error with its whole cause chain, one cause per line.
pub fn describe(err: impl std::error::Error + Send + Sync + 'static) -> String {
    format!("{:?}", anyhow::Error::new(err))
}
