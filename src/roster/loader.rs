//! Roster file loading.
//!
//! This module provides the [`RosterLoader`] type for reading employee
//! records from a comma-separated text file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::record::parse_record;

/// Loads employee records from roster files.
///
/// # File Format
///
/// One record per line, no header:
/// ```text
/// 001,A,Addr,111,500.0
/// 512,B,Addr,222,10.0
/// 801,C,Addr,333,8.0
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_stats::roster::RosterLoader;
///
/// let employees = RosterLoader::load("res/employees.txt")?;
/// println!("Loaded {} employees", employees.len());
/// # Ok::<(), roster_stats::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterLoader;

impl RosterLoader {
    /// Loads every record from the file at `path`.
    ///
    /// The file is closed before this returns. Records are returned in file
    /// order; records whose id does not start with a digit are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error, and no records, if:
    /// - The file cannot be opened (`RosterNotFound`)
    /// - Reading fails part way through (`RosterRead`)
    /// - Any line fails to parse (`MalformedRecord`, `InvalidField`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| {
            warn!(path = %path_str, error = %e, "Failed to open roster file");
            EngineError::RosterNotFound {
                path: path_str.clone(),
            }
        })?;

        Self::from_reader(BufReader::new(file), &path_str)
    }

    /// Loads every record from an already opened reader.
    ///
    /// `source` names the reader in error messages and log events.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> EngineResult<Vec<Employee>> {
        let mut employees = Vec::new();
        let mut dropped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| EngineError::RosterRead {
                path: source.to_string(),
                message: e.to_string(),
            })?;

            match parse_record(&line, line_number) {
                Ok(Some(employee)) => employees.push(employee),
                Ok(None) => {
                    dropped += 1;
                    debug!(source, line = line_number, "Skipping record without a digit id");
                }
                Err(err) => {
                    warn!(source, line = line_number, error = %err, "Failed to parse roster");
                    return Err(err);
                }
            }
        }

        info!(
            source,
            employees = employees.len(),
            dropped,
            "Loaded roster"
        );

        Ok(employees)
    }
}
