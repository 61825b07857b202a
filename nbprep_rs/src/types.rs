use clap::ValueEnum;

/// Bytes per reported gigabyte (binary, 1024³).
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// Width of the `=====` banner rule around section headers.
pub const BANNER_WIDTH: usize = 60;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Notebook check followed by the dataset copy.
    #[default]
    All,
    Check,
    Copy,
}

impl Mode {
    pub fn runs_check(self) -> bool {
        matches!(self, Mode::All | Mode::Check)
    }

    pub fn runs_copy(self) -> bool {
        matches!(self, Mode::All | Mode::Copy)
    }
}
