//! Prints weekly pay statistics for the roster at `res/employees.txt`.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use roster_stats::app::run;
use roster_stats::config::DEFAULT_ROSTER_PATH;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(DEFAULT_ROSTER_PATH, &mut std::io::stdout(), &mut std::io::stderr()) {
        Ok(status) => status.exit_code(),
        Err(err) => {
            error!(error = %err, "Failed to write report");
            ExitCode::FAILURE
        }
    }
}
