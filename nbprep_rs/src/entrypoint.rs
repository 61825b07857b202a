//! Shared run logic behind the `nbprep` binary.
//!
//! Both components always run (in `all` mode) and a summary is always
//! printed; a failure in one never stops the other.

use std::io::IsTerminal;
use std::process::ExitCode;

use serde_json::{Value, json};
use tracing::debug;

use crate::cli::Cli;
use crate::colors::Painter;
use crate::config::{NbprepConfig, Settings};
use crate::copier::DatasetCopier;
use crate::error::{CopyError, describe};
use crate::types::{Mode, OutputMode};
use crate::validator::NotebookValidator;

/// Pass/fail of each component; `None` when it did not run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub notebook_ok: Option<bool>,
    pub copy_ok: Option<bool>,
}

impl RunSummary {
    pub fn ok(&self) -> bool {
        self.notebook_ok.unwrap_or(true) && self.copy_ok.unwrap_or(true)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Resolve settings from the root, config file and CLI flags.
pub fn settings(cli: &Cli) -> Settings {
    let config = match &cli.config {
        Some(path) => NbprepConfig::load_from_path(path),
        None => NbprepConfig::load(&cli.root),
    };
    let settings = config.resolve(&cli.root, &cli.overrides());
    debug!(?settings, "resolved settings");
    settings
}

pub fn run(cli: &Cli) -> ExitCode {
    let settings = settings(cli);
    let summary = match cli.output() {
        OutputMode::Human => run_human(cli.mode(), &settings, Painter::new(cli.color)),
        OutputMode::Json => run_json(cli.mode(), &settings),
    };
    summary.exit_code()
}

pub fn run_human(mode: Mode, settings: &Settings, painter: Painter) -> RunSummary {
    let mut summary = RunSummary::default();

    if mode.runs_check() {
        let validator = NotebookValidator::new(&settings.notebook, painter);
        summary.notebook_ok = Some(validator.validate());
    }

    if mode.runs_copy() {
        let copier = DatasetCopier::new(settings.copy.clone(), painter)
            .with_progress(std::io::stderr().is_terminal());
        summary.copy_ok = Some(copier.copy());
    }

    print_summary(&summary, painter);
    summary
}

fn print_summary(summary: &RunSummary, p: Painter) {
    println!("\n{}", p.banner("Summary"));
    if let Some(ok) = summary.notebook_ok {
        let status = if ok {
            p.status_ok("Passed")
        } else {
            p.status_warn("Issues found")
        };
        println!("Notebook check: {status}");
    }
    if let Some(ok) = summary.copy_ok {
        let status = if ok {
            p.status_ok("Success")
        } else {
            p.status_error("Failed")
        };
        println!("Data copy: {status}");
    }
    println!("{}", "=".repeat(crate::types::BANNER_WIDTH));
}

pub fn run_json(mode: Mode, settings: &Settings) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut doc = serde_json::Map::new();

    if mode.runs_check() {
        let validator = NotebookValidator::new(&settings.notebook, Painter::plain());
        let section = match validator.check() {
            Ok(report) => {
                let ok = report.is_clean();
                summary.notebook_ok = Some(ok);
                with_ok(to_value(&report), ok)
            }
            Err(err) => {
                summary.notebook_ok = Some(false);
                json!({ "ok": false, "error": err.kind(), "message": describe(err) })
            }
        };
        doc.insert("notebook".to_string(), section);
    }

    if mode.runs_copy() {
        let copier = DatasetCopier::new(settings.copy.clone(), Painter::plain());
        let section = match copier.run() {
            Ok(outcome) => {
                summary.copy_ok = Some(true);
                with_ok(to_value(&outcome), true)
            }
            Err(err) => {
                summary.copy_ok = Some(false);
                let checked = match &err {
                    CopyError::SourceNotFound { checked } => to_value(checked),
                    _ => Value::Null,
                };
                json!({
                    "ok": false,
                    "error": err.kind(),
                    "message": describe(err),
                    "checked": checked,
                })
            }
        };
        doc.insert("copy".to_string(), section);
    }

    doc.insert("ok".to_string(), Value::Bool(summary.ok()));
    match serde_json::to_string_pretty(&Value::Object(doc)) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("[nbprep] failed to render JSON: {err}"),
    }
    summary
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn with_ok(mut value: Value, ok: bool) -> Value {
    if let Value::Object(map) = &mut value {
        map.insert("ok".to_string(), Value::Bool(ok));
    }
    value
}
