//! Employee roster statistics.
//!
//! This crate loads a comma-separated roster of employees, classifies each
//! record as salaried, wages or part-time by its id prefix, and computes
//! weekly pay statistics for a console report.

#![warn(missing_docs)]

pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
