//! Configuration file support for nbprep.
//!
//! Loads optional `.nbprep/config.toml` from the project root and merges it
//! with command-line overrides and built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::copier::CopyConfig;

pub const DEFAULT_NOTEBOOK: &str = "train_notebook.ipynb";
pub const DEFAULT_DESTINATION: &str = "data";

/// Candidates tried relative to the project root, in order.
const ROOT_RELATIVE_CANDIDATES: &[&str] = &["../data", "../main_project/data"];

/// Machine-specific dataset locations, used verbatim after the root-relative ones.
const FIXED_CANDIDATES: &[&str] = &["e:/medical imaging/data", "e:/data"];

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NbprepConfig {
    /// Notebook to check, relative to the root unless absolute.
    pub notebook: Option<PathBuf>,
    /// Folder the dataset is copied into.
    pub destination: Option<PathBuf>,
    /// Ordered dataset source candidates. Replaces the built-in list when non-empty.
    pub candidates: Vec<PathBuf>,
}

/// Values given on the command line. `None`/empty means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub notebook: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub candidates: Vec<PathBuf>,
}

/// Fully resolved paths for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub notebook: PathBuf,
    pub copy: CopyConfig,
}

impl NbprepConfig {
    /// Load config from `.nbprep/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".nbprep").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Merge with CLI overrides and defaults. CLI wins over file, file over defaults.
    pub fn resolve(&self, root: &Path, overrides: &Overrides) -> Settings {
        let notebook = overrides
            .notebook
            .as_ref()
            .or(self.notebook.as_ref())
            .map(|p| anchor(root, p))
            .unwrap_or_else(|| root.join(DEFAULT_NOTEBOOK));

        let destination = overrides
            .destination
            .as_ref()
            .or(self.destination.as_ref())
            .map(|p| anchor(root, p))
            .unwrap_or_else(|| root.join(DEFAULT_DESTINATION));

        let candidates = if !overrides.candidates.is_empty() {
            overrides.candidates.iter().map(|p| anchor(root, p)).collect()
        } else if !self.candidates.is_empty() {
            self.candidates.iter().map(|p| anchor(root, p)).collect()
        } else {
            default_candidates(root)
        };

        Settings {
            notebook,
            copy: CopyConfig {
                candidates,
                destination,
            },
        }
    }
}

/// Built-in candidate list: sibling `data` folders first, then fixed locations.
pub fn default_candidates(root: &Path) -> Vec<PathBuf> {
    ROOT_RELATIVE_CANDIDATES
        .iter()
        .map(|rel| root.join(rel))
        .chain(FIXED_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
