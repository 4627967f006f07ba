use clap::Parser;

use std::path::PathBuf;

/// Bind posted values into a form definition and report validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "form-check")]
#[command(version)]
#[command(about = "Validate JSON input against a grouped form definition")]
pub struct CliArgs {
    /// Path to the TOML form definition
    pub definition: PathBuf,

    /// Path to the JSON input object (keys may be `model.attribute`)
    pub input: PathBuf,

    /// Directory for the log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Assign every declared local attribute, not just safe ones
    #[arg(long)]
    pub all: bool,
}
