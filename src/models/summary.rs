//! Summary models for roster statistics.
//!
//! This module contains the [`PayrollSummary`] type and the structures it is
//! built from: extremal pay results, category shares and the audit trace.

use rust_decimal::Decimal;

use super::{Category, Employee};

/// An employee paired with the value that made them an extreme.
///
/// # Example
///
/// ```
/// use roster_stats::models::{Employee, EmployeePay, PayExtreme};
/// use rust_decimal::Decimal;
///
/// let extreme = PayExtreme {
///     employee: Employee {
///         id: "001".to_string(),
///         name: "A".to_string(),
///         address: "Addr".to_string(),
///         sin: 111,
///         pay: EmployeePay::Salaried { salary: Decimal::new(450, 0) },
///     },
///     value: Decimal::new(450, 0),
/// };
/// assert_eq!(extreme.employee.name, "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayExtreme {
    /// The first employee in load order reaching the extreme.
    pub employee: Employee,
    /// The extreme value.
    pub value: Decimal,
}

/// The share of the roster belonging to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryShare {
    /// The category.
    pub category: Category,
    /// Number of employees in the category.
    pub count: usize,
    /// Fraction of the roster in the category, in `[0, 1]`.
    pub fraction: Decimal,
}

/// A single step in the audit trace recording a calculation.
///
/// Each step captures the input, output, and reasoning for one statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the calculation.
    pub rule_id: String,
    /// The human-readable name of the calculation.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// All statistics computed over a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollSummary {
    /// Number of employees summarised.
    pub employee_count: usize,
    /// Mean projected weekly pay.
    pub average_weekly_pay: Decimal,
    /// Highest wage-employee pay, if any wage employees exist.
    pub highest_wages_pay: Option<PayExtreme>,
    /// Lowest salary, if any salaried employees exist.
    pub lowest_salary: Option<PayExtreme>,
    /// Category shares in reporting order.
    pub category_shares: Vec<CategoryShare>,
    /// The steps that produced the statistics above.
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollSummary {
    /// Looks up the share for a category.
    pub fn share(&self, category: Category) -> Option<&CategoryShare> {
        self.category_shares.iter().find(|s| s.category == category)
    }
}
