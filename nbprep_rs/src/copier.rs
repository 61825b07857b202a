//! Dataset copier - stages a dataset folder next to the notebook.
//!
//! The first candidate that is an existing directory becomes the source.
//! An existing destination is never touched. A failed copy leaves whatever
//! was already written in place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::colors::Painter;
use crate::error::{CopyError, describe};
use crate::progress::{Spinner, format_count, format_gb, preview_list};

const PREVIEW_DIRS: usize = 10;
const PREVIEW_FILES: usize = 5;

/// Where to look for the dataset and where to put it.
#[derive(Debug, Clone, Serialize)]
pub struct CopyConfig {
    /// Checked in order; first existing directory wins.
    pub candidates: Vec<PathBuf>,
    pub destination: PathBuf,
}

/// Top-level entry names of a directory, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirListing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        files: usize,
        total_bytes: u64,
        copied_dirs: Vec<String>,
    },
    SkippedExisting {
        source: PathBuf,
        destination: PathBuf,
    },
}

/// First candidate that exists and is a directory.
pub fn resolve_source(candidates: &[PathBuf]) -> Result<PathBuf, CopyError> {
    for candidate in candidates {
        let found = candidate.is_dir();
        debug!(candidate = %candidate.display(), found, "probing dataset source");
        if found {
            return Ok(candidate.clone());
        }
    }
    Err(CopyError::SourceNotFound {
        checked: candidates.to_vec(),
    })
}

pub fn list_dir(dir: &Path) -> Result<DirListing, CopyError> {
    let read_err = |source| CopyError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut listing = DirListing::default();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            listing.directories.push(name);
        } else if path.is_file() {
            listing.files.push(name);
        }
    }
    listing.directories.sort();
    listing.files.sort();
    Ok(listing)
}

/// Recursively mirror `src` into `dst`. Returns the number of files copied.
///
/// When `dst` lies inside `src` its subtree is skipped, so the copy never
/// walks into its own output.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, CopyError> {
    fs::create_dir_all(dst).map_err(|source| CopyError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })?;
    let dst_canonical = dst.canonicalize().ok();
    let is_destination = |path: &Path| {
        path.starts_with(dst)
            || dst_canonical
                .as_deref()
                .is_some_and(|canon| path.canonicalize().is_ok_and(|p| p == canon))
    };

    let mut files = 0usize;
    for entry in WalkDir::new(src)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_destination(e.path())))
    {
        let entry = entry.map_err(|source| CopyError::Walk {
            root: src.to_path_buf(),
            source,
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        let copy_err = |source| CopyError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(copy_err)?;
        } else {
            fs::copy(entry.path(), &target).map_err(copy_err)?;
            files += 1;
            debug!(file = %relative.display(), "copied");
        }
    }
    Ok(files)
}

/// Sum of file sizes under `root`.
pub fn dir_size(root: &Path) -> Result<u64, CopyError> {
    let mut total = 0u64;
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| CopyError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            let meta = entry.metadata().map_err(|source| CopyError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            total += meta.len();
        }
    }
    Ok(total)
}

pub struct DatasetCopier {
    config: CopyConfig,
    painter: Painter,
    show_progress: bool,
}

impl DatasetCopier {
    pub fn new(config: CopyConfig, painter: Painter) -> Self {
        Self {
            config,
            painter,
            show_progress: false,
        }
    }

    /// Show a spinner while copying.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Resolve, copy and measure without printing.
    pub fn run(&self) -> Result<CopyOutcome, CopyError> {
        let source = resolve_source(&self.config.candidates)?;
        let destination = self.config.destination.clone();
        if destination.exists() {
            info!(destination = %destination.display(), "destination exists, skipping copy");
            return Ok(CopyOutcome::SkippedExisting {
                source,
                destination,
            });
        }

        let files = copy_tree(&source, &destination)?;
        finish(source, destination, files)
    }

    /// Copy with console diagnostics. `true` on success or when the data is already present.
    pub fn copy(&self) -> bool {
        let p = self.painter;
        println!("\n{}", p.banner("Copying Training Data"));

        let source = match resolve_source(&self.config.candidates) {
            Ok(source) => source,
            Err(err) => {
                println!("\n{}", p.status_error(&err.to_string()));
                println!("   Checked locations:");
                for candidate in &self.config.candidates {
                    println!("   - {}", p.path(&candidate.display().to_string()));
                }
                return false;
            }
        };
        let destination = &self.config.destination;

        println!(
            "\n{}",
            p.status_info(&format!("Source: {}", p.path(&source.display().to_string())))
        );
        println!(
            "{}",
            p.status_info(&format!(
                "Destination: {}",
                p.path(&destination.display().to_string())
            ))
        );

        match list_dir(&source) {
            Ok(listing) => {
                println!("\n{}", p.status_info("Source contains:"));
                println!(
                    "   Directories: {}",
                    preview_list(&listing.directories, PREVIEW_DIRS)
                );
                if !listing.files.is_empty() {
                    println!("   Files: {}", preview_list(&listing.files, PREVIEW_FILES));
                }
            }
            Err(err) => debug!("could not list source: {}", describe(err)),
        }

        if destination.exists() {
            println!(
                "\n{}",
                p.status_warn(&format!(
                    "Destination '{}' already exists.",
                    destination.display()
                ))
            );
            println!("   Skipping copy (data already present).");
            println!("   {}", p.dim("To force copy, delete the existing folder first."));
            return true;
        }

        println!(
            "\n{}",
            p.status_info("Copying data folder (this may take a while for large datasets)...")
        );

        let spinner = Spinner::new("Copying dataset...", self.show_progress);
        let outcome = copy_tree(&source, destination)
            .and_then(|files| finish(source, destination.clone(), files));

        match outcome {
            Ok(CopyOutcome::Copied {
                files,
                total_bytes,
                copied_dirs,
                ..
            }) => {
                spinner.finish_clear();
                println!("\n{}", p.status_success("Data folder copied successfully!"));
                println!(
                    "   Total size: {} ({})",
                    p.number(format_gb(total_bytes)),
                    format_count(files, "file", "files")
                );
                println!("   Copied directories: {}", copied_dirs.join(", "));
                true
            }
            Ok(CopyOutcome::SkippedExisting { .. }) => {
                spinner.finish_clear();
                true
            }
            Err(err) => {
                spinner.finish_error("Copy failed");
                println!(
                    "\n{}",
                    p.status_error(&format!("Error copying data folder ({}):", err.kind()))
                );
                println!("{}", describe(err));
                false
            }
        }
    }
}

fn finish(source: PathBuf, destination: PathBuf, files: usize) -> Result<CopyOutcome, CopyError> {
    let total_bytes = dir_size(&destination)?;
    let copied_dirs = list_dir(&destination)?.directories;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        files,
        total_bytes,
        "dataset copied"
    );
    Ok(CopyOutcome::Copied {
        source,
        destination,
        files,
        total_bytes,
        copied_dirs,
    })
}
