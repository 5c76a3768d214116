//! Average weekly pay across the whole roster.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee};

/// The result of averaging weekly pay, including the audit step.
#[derive(Debug, Clone)]
pub struct AverageWeeklyPayResult {
    /// Mean projected weekly pay.
    pub average: Decimal,
    /// Sum of projected weekly pay.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the mean projected weekly pay of all employees.
///
/// Each employee contributes [`Employee::weekly_pay`]: the salary for
/// salaried staff, 40 hours at the rate for wage staff and 20 hours at the
/// rate for part-time staff.
///
/// # Arguments
///
/// * `employees` - The loaded roster, in load order
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `AverageWeeklyPayResult` containing the average, the total and
/// an audit step, or an error if:
/// - `employees` is empty (`EmptyRoster`)
/// - A projection or the running total overflows (`CalculationError`)
///
/// # Examples
///
/// ```
/// use roster_stats::calculation::calculate_average_weekly_pay;
/// use roster_stats::roster::parse_record;
///
/// let employees: Vec<_> = ["001,A,Addr,111,500", "512,B,Addr,222,10"]
///     .iter()
///     .filter_map(|line| parse_record(line, 1).unwrap())
///     .collect();
///
/// let result = calculate_average_weekly_pay(&employees, 1).unwrap();
/// assert_eq!(result.average.normalize().to_string(), "450");
/// ```
pub fn calculate_average_weekly_pay(
    employees: &[Employee],
    step_number: u32,
) -> EngineResult<AverageWeeklyPayResult> {
    if employees.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let total = employees
        .iter()
        .try_fold(Decimal::ZERO, |total, employee| {
            total
                .checked_add(employee.weekly_pay()?)
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!(
                        "total weekly pay overflows at employee '{}'",
                        employee.id
                    ),
                })
        })?;
    let count = Decimal::from(employees.len());
    let average = total / count;

    let audit_step = AuditStep {
        step_number,
        rule_id: "average_weekly_pay".to_string(),
        rule_name: "Average Weekly Pay".to_string(),
        input: serde_json::json!({
            "employee_count": employees.len(),
            "total_weekly_pay": total.normalize().to_string()
        }),
        output: serde_json::json!({
            "average": average.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} employees = ${}",
            total.normalize(),
            employees.len(),
            average.normalize()
        ),
    };

    Ok(AverageWeeklyPayResult {
        average,
        total,
        audit_step,
    })
}
