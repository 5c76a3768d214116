//! Share of the roster in each employment category.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Category, CategoryShare, Employee};

/// The result of the category breakdown, including the audit step.
#[derive(Debug, Clone)]
pub struct CategoryBreakdownResult {
    /// One share per category, in the order of [`Category::ALL`].
    pub shares: Vec<CategoryShare>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the fraction of employees in each category.
///
/// Every category appears in the result, including those with no employees.
///
/// # Arguments
///
/// * `employees` - The loaded roster, in load order
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `CategoryBreakdownResult` with one share per category, or
/// `EmptyRoster` when `employees` is empty.
///
/// # Examples
///
/// ```
/// use roster_stats::calculation::calculate_category_breakdown;
/// use roster_stats::models::Category;
/// use roster_stats::roster::parse_record;
/// use rust_decimal::Decimal;
///
/// let employees: Vec<_> = ["001,A,Addr,111,500", "512,B,Addr,222,10"]
///     .iter()
///     .filter_map(|line| parse_record(line, 1).unwrap())
///     .collect();
///
/// let result = calculate_category_breakdown(&employees, 4).unwrap();
/// assert_eq!(result.shares[0].category, Category::Salaried);
/// assert_eq!(result.shares[0].fraction, Decimal::new(5, 1));
/// assert_eq!(result.shares[2].fraction, Decimal::ZERO);
/// ```
pub fn calculate_category_breakdown(
    employees: &[Employee],
    step_number: u32,
) -> EngineResult<CategoryBreakdownResult> {
    if employees.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let total = Decimal::from(employees.len());
    let shares: Vec<CategoryShare> = Category::ALL
        .iter()
        .map(|&category| {
            let count = employees
                .iter()
                .filter(|e| e.category() == category)
                .count();
            CategoryShare {
                category,
                count,
                fraction: Decimal::from(count) / total,
            }
        })
        .collect();

    let counts: serde_json::Map<String, serde_json::Value> = shares
        .iter()
        .map(|s| (s.category.name().to_string(), serde_json::json!(s.count)))
        .collect();
    let fractions: serde_json::Map<String, serde_json::Value> = shares
        .iter()
        .map(|s| {
            (
                s.category.name().to_string(),
                serde_json::json!(s.fraction.normalize().to_string()),
            )
        })
        .collect();

    let reasoning = shares
        .iter()
        .map(|s| format!("{} {}/{}", s.category, s.count, employees.len()))
        .collect::<Vec<_>>()
        .join(", ");

    let audit_step = AuditStep {
        step_number,
        rule_id: "category_breakdown".to_string(),
        rule_name: "Category Breakdown".to_string(),
        input: serde_json::json!({
            "employee_count": employees.len(),
            "counts": counts
        }),
        output: serde_json::json!({ "fractions": fractions }),
        reasoning,
    };

    Ok(CategoryBreakdownResult { shares, audit_step })
}
