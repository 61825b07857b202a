//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;
use crate::types::{ColorMode, Mode, OutputMode};

#[derive(Parser, Debug)]
#[command(name = "nbprep")]
#[command(about = "Check a training notebook for duplicate definitions and stage its dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project directory holding the notebook (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/.nbprep/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Notebook to check (default: train_notebook.ipynb)
    #[arg(long, global = true)]
    pub notebook: Option<PathBuf>,

    /// Folder to copy the dataset into (default: data)
    #[arg(long = "dest", global = true)]
    pub destination: Option<PathBuf>,

    /// Dataset source candidate, checked in the order given (repeatable)
    #[arg(long = "source", global = true)]
    pub sources: Vec<PathBuf>,

    /// Print one JSON document instead of the human report
    #[arg(long, global = true)]
    pub json: bool,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Check the notebook, then copy the dataset (default)
    All,
    /// Only check the notebook
    Check,
    /// Only copy the dataset
    Copy,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match self.command {
            None | Some(Command::All) => Mode::All,
            Some(Command::Check) => Mode::Check,
            Some(Command::Copy) => Mode::Copy,
        }
    }

    pub fn output(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            notebook: self.notebook.clone(),
            destination: self.destination.clone(),
            candidates: self.sources.clone(),
        }
    }
}
