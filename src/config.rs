//! Fixed settings for roster loading and pay projection.
//!
//! The roster path and the hour figures are constants; nothing here is read
//! from files or the environment.

/// Path of the roster file, relative to the working directory.
pub const DEFAULT_ROSTER_PATH: &str = "res/employees.txt";

/// Separator between fields of a roster line.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields a roster line must carry: id, name, address, sin, amount.
pub const MIN_FIELDS_PER_RECORD: usize = 5;

/// Hours in a regular week for wage employees.
pub const WAGES_WEEKLY_HOURS: u32 = 40;

/// Hours in a week for part-time employees.
pub const PART_TIME_WEEKLY_HOURS: u32 = 20;

/// Upper bound on the hours figure used for the highest wage calculation.
pub const WAGES_HOURS_CAP: u32 = 40;
