//! Lowest salary among salaried employees.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Employee, PayExtreme};

/// The result of the lowest salary search, including the audit step.
#[derive(Debug, Clone)]
pub struct LowestSalaryResult {
    /// The lowest paid salaried employee, or `None` when there are none.
    pub extreme: Option<PayExtreme>,
    /// Number of salaried employees considered.
    pub candidates: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Finds the salaried employee with the lowest salary.
///
/// Ties go to the employee that appears first in `employees`. Salaries are
/// only compared, so no arithmetic can overflow here.
///
/// # Arguments
///
/// * `employees` - The loaded roster, in load order
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `LowestSalaryResult` whose `extreme` is `None` when the roster
/// has no salaried employees.
///
/// # Examples
///
/// ```
/// use roster_stats::calculation::find_lowest_salary;
/// use roster_stats::roster::parse_record;
///
/// let employees: Vec<_> = ["001,A,Addr,111,500.0", "101,E,Addr,555,450.0"]
///     .iter()
///     .filter_map(|line| parse_record(line, 1).unwrap())
///     .collect();
///
/// let extreme = find_lowest_salary(&employees, 3).extreme.unwrap();
/// assert_eq!(extreme.employee.name, "E");
/// ```
pub fn find_lowest_salary(employees: &[Employee], step_number: u32) -> LowestSalaryResult {
    let mut lowest: Option<(&Employee, Decimal)> = None;
    let mut candidates = 0usize;

    for (employee, salary) in employees
        .iter()
        .filter_map(|e| e.salary().map(|salary| (e, salary)))
    {
        candidates += 1;
        match lowest {
            Some((_, low)) if salary >= low => {}
            _ => lowest = Some((employee, salary)),
        }
    }

    let extreme = lowest.map(|(employee, value)| PayExtreme {
        employee: employee.clone(),
        value,
    });

    let (output, reasoning) = match &extreme {
        Some(extreme) => (
            serde_json::json!({
                "employee_id": extreme.employee.id,
                "value": extreme.value.normalize().to_string()
            }),
            format!(
                "Employee '{}' has the lowest salary of ${} among {} salaried employees",
                extreme.employee.id,
                extreme.value.normalize(),
                candidates
            ),
        ),
        None => (
            serde_json::json!({ "employee_id": null }),
            "No salaried employees on the roster".to_string(),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "lowest_salary".to_string(),
        rule_name: "Lowest Salary".to_string(),
        input: serde_json::json!({ "salaried_employees": candidates }),
        output,
        reasoning,
    };

    LowestSalaryResult {
        extreme,
        candidates,
        audit_step,
    }
}
