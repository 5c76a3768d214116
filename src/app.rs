//! Program flow for the `roster-stats` binary.
//!
//! [`run`] loads a roster, summarises it and writes the report. Output goes
//! through the writers it is given so the whole console contract can be
//! exercised without spawning the binary.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::error;

use crate::calculation::summarise;
use crate::roster::RosterLoader;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The report was printed.
    Success,
    /// The roster could not be loaded.
    LoadFailed,
    /// The roster loaded but no statistics could be computed.
    NoStatistics,
}

impl RunStatus {
    /// The process exit code for this status: 0 on success, 1 otherwise.
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::LoadFailed | RunStatus::NoStatistics => ExitCode::FAILURE,
        }
    }
}

/// Loads the roster at `path` and writes the report to `out`.
///
/// # Arguments
///
/// * `path` - The roster file to read
/// * `out` - Receives the report, or the user-facing failure line
/// * `err` - Receives the error detail on failure
///
/// # Returns
///
/// Returns the [`RunStatus`] of the run, or an I/O error if writing to
/// `out` or `err` fails.
///
/// # Example
///
/// ```no_run
/// use roster_stats::app::run;
///
/// let status = run("res/employees.txt", &mut std::io::stdout(), &mut std::io::stderr())?;
/// let code = status.exit_code();
/// # let _ = code;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run<P, O, E>(path: P, out: &mut O, err: &mut E) -> io::Result<RunStatus>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let employees = match RosterLoader::load(path) {
        Ok(employees) => employees,
        Err(load_error) => {
            writeln!(err, "Error loading employees: {}", load_error)?;
            writeln!(out, "Failed to load employee data.")?;
            return Ok(RunStatus::LoadFailed);
        }
    };

    match summarise(&employees) {
        Ok(summary) => {
            write!(out, "{}", summary)?;
            Ok(RunStatus::Success)
        }
        Err(calc_error) => {
            error!(error = %calc_error, "Cannot summarise roster");
            writeln!(out, "No statistics: {}", calc_error)?;
            Ok(RunStatus::NoStatistics)
        }
    }
}
