//! Progress UI utilities (spinner, size formatting)

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::types::BYTES_PER_GB;

/// Spinner for long-running operations
pub struct Spinner {
    bar: ProgressBar,
    visible: bool,
}

impl Spinner {
    /// Create a new spinner with a message. Draws nothing unless `visible`.
    pub fn new(message: &str, visible: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if !visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(spinner_style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(spinner_style);
        }
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
        Self { bar, visible }
    }

    /// Finish with error message (red). Hidden spinners stay silent.
    pub fn finish_error(&self, message: &str) {
        self.bar.finish_and_clear();
        if self.visible {
            eprintln!("{} {}", style("✗").red().bold(), message);
        }
    }

    /// Just clear the spinner without message
    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Format a byte count as gigabytes with two decimals, e.g. `2.00 GB`.
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB as f64)
}

/// Format a count with proper singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Join the first `limit` names, appending `...` when some were cut.
pub fn preview_list(names: &[String], limit: usize) -> String {
    let shown = names
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > limit {
        format!("{shown}...")
    } else {
        shown
    }
}
