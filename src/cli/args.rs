//! CLI argument definitions
//!
//! Clap derive structs for `recipedoc` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ConfigOverrides;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Generate markdown reference documentation from a recipe catalog.
#[derive(Parser, Debug)]
#[command(name = "recipedoc", author, version, about)]
pub struct Cli {
    /// Directory to write the documentation tree into.
    pub destination: PathBuf,

    /// Recipe catalog file (.yaml, .yml or .json).
    #[arg(long, default_value = "recipes.yaml", env = "RECIPEDOC_CATALOG")]
    pub catalog: PathBuf,

    /// Generator configuration file (YAML).
    #[arg(long, env = "RECIPEDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root namespace every recipe name must start with.
    #[arg(long, env = "RECIPEDOC_ROOT_PREFIX")]
    pub root_prefix: Option<String>,

    /// Abort instead of overwriting files that already exist.
    #[arg(long)]
    pub fail_on_existing: bool,

    /// Do not write the recipes-by-tag page.
    #[arg(long)]
    pub no_tag_index: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "RECIPEDOC_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormatArg,
}

impl Cli {
    /// Configuration overrides carried by the command line.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root_prefix: self.root_prefix.clone(),
            fail_on_existing: self.fail_on_existing,
            no_tag_index: self.no_tag_index,
        }
    }
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Log format choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => Self::Human,
            LogFormatArg::Json => Self::Json,
        }
    }
}
