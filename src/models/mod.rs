//! Core data models for roster statistics.
//!
//! This module contains the domain models used throughout the crate.

mod employee;
mod summary;

pub use employee::{Category, Employee, EmployeePay};
pub use summary::{AuditStep, CategoryShare, PayExtreme, PayrollSummary};
