use form_check::args::CliArgs;
use form_check::check::run;
use form_check::error::FormCheckError;
use form_check::logger::{default_log_dir, initialize as LoggerInitialize};
use form_check::report::Report;

use clap::Parser;

use std::fs::create_dir_all;
use std::process::ExitCode;

use log::{error, info};

/// Exit code for anything that prevented a report.
const FAILURE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    match try_main() {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn try_main() -> Result<Report, FormCheckError> {
    // Bad arguments print usage and exit with clap's status 2
    let args = CliArgs::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    create_dir_all(&log_dir).map_err(|e| {
        FormCheckError::logger(format!("Failed to create log directory: {e}"))
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;
    info!("Log directory: {}", log_dir.display());

    let report = run(&args)?;

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| FormCheckError::output(format!("Failed to serialize report: {e}")))?;
    println!("{json}");

    Ok(report)
}
