//! Roster loading for employee statistics.
//!
//! This module reads comma-separated employee records and classifies each
//! one into a [`Category`](crate::models::Category) by its id prefix.
//!
//! # Example
//!
//! ```no_run
//! use roster_stats::config::DEFAULT_ROSTER_PATH;
//! use roster_stats::roster::RosterLoader;
//!
//! let employees = RosterLoader::load(DEFAULT_ROSTER_PATH).unwrap();
//! println!("Loaded {} employees", employees.len());
//! ```

mod loader;
mod record;

pub use loader::RosterLoader;
pub use record::parse_record;
