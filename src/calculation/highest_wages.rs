//! Highest weekly pay among wage employees.

use rust_decimal::Decimal;

use crate::config::WAGES_HOURS_CAP;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee, PayExtreme};

/// The result of the highest wages search, including the audit step.
#[derive(Debug, Clone)]
pub struct HighestWagesPayResult {
    /// The top earner, or `None` when the roster has no wage employees.
    pub extreme: Option<PayExtreme>,
    /// Number of wage employees considered.
    pub candidates: usize,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the weekly pay figure used to rank wage employees.
///
/// The roster carries no hours column, so the rate also stands in for the
/// hours worked, capped at 40: `rate * min(40, rate)`. Published reports
/// depend on this figure, so it is kept as is.
///
/// # Arguments
///
/// * `rate` - The employee's hourly rate
///
/// # Returns
///
/// Returns the capped pay, or `None` if the product does not fit in a
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use roster_stats::calculation::capped_wages_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(capped_wages_pay(Decimal::new(12, 0)), Some(Decimal::new(144, 0)));
/// assert_eq!(capped_wages_pay(Decimal::new(50, 0)), Some(Decimal::new(2000, 0)));
/// assert_eq!(capped_wages_pay(Decimal::MAX), None);
/// ```
pub fn capped_wages_pay(rate: Decimal) -> Option<Decimal> {
    rate.checked_mul(rate.min(Decimal::from(WAGES_HOURS_CAP)))
}

/// Finds the wage employee with the highest [`capped_wages_pay`].
///
/// Ties go to the employee that appears first in `employees`.
///
/// # Arguments
///
/// * `employees` - The loaded roster, in load order
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `HighestWagesPayResult` whose `extreme` is `None` when the
/// roster has no wage employees, or `CalculationError` if any capped pay
/// overflows.
///
/// # Examples
///
/// ```
/// use roster_stats::calculation::find_highest_wages_pay;
/// use roster_stats::roster::parse_record;
///
/// let employees: Vec<_> = ["512,B,Addr,222,10.0", "612,D,Addr,444,12.0"]
///     .iter()
///     .filter_map(|line| parse_record(line, 1).unwrap())
///     .collect();
///
/// let result = find_highest_wages_pay(&employees, 2).unwrap();
/// let extreme = result.extreme.unwrap();
/// assert_eq!(extreme.employee.name, "D");
/// assert_eq!(extreme.value.normalize().to_string(), "144");
/// ```
pub fn find_highest_wages_pay(
    employees: &[Employee],
    step_number: u32,
) -> EngineResult<HighestWagesPayResult> {
    let mut best: Option<(&Employee, Decimal)> = None;
    let mut candidates = 0usize;

    for (employee, rate) in employees
        .iter()
        .filter_map(|e| e.wages_rate().map(|rate| (e, rate)))
    {
        candidates += 1;
        let pay = capped_wages_pay(rate).ok_or_else(|| EngineError::CalculationError {
            message: format!("capped wages pay of employee '{}' overflows", employee.id),
        })?;
        match best {
            Some((_, top)) if pay <= top => {}
            _ => best = Some((employee, pay)),
        }
    }

    let extreme = best.map(|(employee, value)| PayExtreme {
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
                "Employee '{}' has the highest capped wages pay of ${} among {} wage employees",
                extreme.employee.id,
                extreme.value.normalize(),
                candidates
            ),
        ),
        None => (
            serde_json::json!({ "employee_id": null }),
            "No wage employees on the roster".to_string(),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "highest_wages_pay".to_string(),
        rule_name: "Highest Wages Pay".to_string(),
        input: serde_json::json!({
            "wage_employees": candidates,
            "hours_cap": WAGES_HOURS_CAP
        }),
        output,
        reasoning,
    };

    Ok(HighestWagesPayResult {
        extreme,
        candidates,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeePay;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(id: &str, name: &str, pay: EmployeePay) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            address: "Addr".to_string(),
            sin: 1,
            pay,
        }
    }

    fn wages(id: &str, name: &str, rate: &str) -> Employee {
        employee(id, name, EmployeePay::Wages { rate: dec(rate) })
    }

    #[test]
    fn test_capped_pay_uses_rate_as_hours() {
        assert_eq!(capped_wages_pay(dec("10.0")), Some(dec("100")));
        assert_eq!(capped_wages_pay(dec("12.0")), Some(dec("144")));
        assert_eq!(capped_wages_pay(dec("40")), Some(dec("1600")));
        assert_eq!(capped_wages_pay(dec("45.5")), Some(dec("1820")));
    }

    #[test]
    fn test_selects_highest_rate() {
        let employees = vec![wages("512", "B", "10.0"), wages("612", "D", "12.0")];

        let result = find_highest_wages_pay(&employees, 1).unwrap();
        let extreme = result.extreme.unwrap();

        assert_eq!(extreme.employee.name, "D");
        assert_eq!(extreme.value, dec("144"));
        assert_eq!(result.candidates, 2);
    }

    #[test]
    fn test_ignores_other_categories() {
        let employees = vec![
            employee("001", "A", EmployeePay::Salaried { salary: dec("9000") }),
            wages("512", "B", "10.0"),
            employee("801", "C", EmployeePay::PartTime { rate: dec("99") }),
        ];

        let result = find_highest_wages_pay(&employees, 1).unwrap();
        assert_eq!(result.candidates, 1);
        assert_eq!(result.extreme.unwrap().employee.name, "B");
    }

    #[test]
    fn test_tie_returns_first_loaded() {
        let employees = vec![
            wages("512", "First", "11.0"),
            wages("612", "Second", "11.00"),
            wages("712", "Lower", "3"),
        ];

        let extreme = find_highest_wages_pay(&employees, 1).unwrap().extreme.unwrap();
        assert_eq!(extreme.employee.name, "First");
    }

    #[test]
    fn test_no_wage_employees_returns_none() {
        let employees = vec![employee(
            "001",
            "A",
            EmployeePay::Salaried { salary: dec("500") },
        )];

        let result = find_highest_wages_pay(&employees, 1).unwrap();
        assert!(result.extreme.is_none());
        assert_eq!(result.candidates, 0);
        assert_eq!(result.audit_step.reasoning, "No wage employees on the roster");
    }

    #[test]
    fn test_zero_pay_is_a_result() {
        let employees = vec![wages("512", "Zero", "0")];
        let extreme = find_highest_wages_pay(&employees, 1).unwrap().extreme.unwrap();
        assert_eq!(extreme.value, Decimal::ZERO);
        assert_eq!(extreme.employee.name, "Zero");
    }

    #[test]
    fn test_negative_rates_compare_by_capped_pay() {
        // -5 * min(40, -5) = 25, which beats 2 * 2 = 4
        let employees = vec![wages("512", "Small", "2"), wages("612", "Negative", "-5")];
        let extreme = find_highest_wages_pay(&employees, 1).unwrap().extreme.unwrap();
        assert_eq!(extreme.employee.name, "Negative");
        assert_eq!(extreme.value, dec("25"));
    }

    #[test]
    fn test_overflowing_rate_is_error() {
        let employees = vec![
            wages("512", "B", "10.0"),
            wages("612", "Huge", "10000000000000000000000000000"),
        ];

        match find_highest_wages_pay(&employees, 1) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("'612'"), "{message}");
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
