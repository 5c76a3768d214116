//! Runs every roster statistic and collects the results.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, PayrollSummary};

use super::{
    calculate_average_weekly_pay, calculate_category_breakdown, find_highest_wages_pay,
    find_lowest_salary,
};

/// Computes all roster statistics in reporting order.
///
/// Audit steps are numbered from 1 in the order the statistics are computed
/// and each is logged at debug level.
///
/// # Errors
///
/// Returns `EmptyRoster` when `employees` is empty, or `CalculationError`
/// when a pay figure overflows.
pub fn summarise(employees: &[Employee]) -> EngineResult<PayrollSummary> {
    let average = calculate_average_weekly_pay(employees, 1)?;
    let highest = find_highest_wages_pay(employees, 2)?;
    let lowest = find_lowest_salary(employees, 3);
    let breakdown = calculate_category_breakdown(employees, 4)?;

    let audit_steps = vec![
        average.audit_step,
        highest.audit_step,
        lowest.audit_step,
        breakdown.audit_step,
    ];

    for step in &audit_steps {
        debug!(
            step = step.step_number,
            rule = %step.rule_id,
            reasoning = %step.reasoning,
            "Calculated statistic"
        );
    }

    Ok(PayrollSummary {
        employee_count: employees.len(),
        average_weekly_pay: average.average,
        highest_wages_pay: highest.extreme,
        lowest_salary: lowest.extreme,
        category_shares: breakdown.shares,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Category;
    use crate::roster::parse_record;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn roster(lines: &[&str]) -> Vec<Employee> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| parse_record(line, i + 1).unwrap())
            .collect()
    }

    #[test]
    fn test_summarise_mixed_roster() {
        let employees = roster(&[
            "001,A,Addr,111,500.0",
            "512,B,Addr,222,10.0",
            "801,C,Addr,333,8.0",
        ]);

        let summary = summarise(&employees).unwrap();

        assert_eq!(summary.employee_count, 3);
        assert_eq!(
            summary.average_weekly_pay.round_dp(2),
            Decimal::from_str("353.33").unwrap()
        );
        assert_eq!(summary.highest_wages_pay.as_ref().unwrap().employee.name, "B");
        assert_eq!(summary.lowest_salary.as_ref().unwrap().employee.name, "A");
        assert_eq!(summary.share(Category::Wages).unwrap().count, 1);
    }

    #[test]
    fn test_audit_steps_numbered_in_order() {
        let employees = roster(&["001,A,Addr,111,500.0"]);
        let summary = summarise(&employees).unwrap();

        let steps: Vec<(u32, &str)> = summary
            .audit_steps
            .iter()
            .map(|s| (s.step_number, s.rule_id.as_str()))
            .collect();
        assert_eq!(
            steps,
            vec![
                (1, "average_weekly_pay"),
                (2, "highest_wages_pay"),
                (3, "lowest_salary"),
                (4, "category_breakdown"),
            ]
        );
    }

    #[test]
    fn test_summary_without_wage_employees() {
        let employees = roster(&["001,A,Addr,111,500.0", "801,C,Addr,333,8.0"]);
        let summary = summarise(&employees).unwrap();
        assert!(summary.highest_wages_pay.is_none());
        assert!(summary.lowest_salary.is_some());
    }

    #[test]
    fn test_summarise_overflowing_rate_fails() {
        let employees = roster(&["512,B,Addr,222,10000000000000000000000000000"]);
        assert!(matches!(
            summarise(&employees),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_summarise_overflowing_total_fails() {
        let employees = roster(&[
            "001,A,Addr,111,50000000000000000000000000000",
            "002,B,Addr,222,50000000000000000000000000000",
        ]);
        assert!(matches!(
            summarise(&employees),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_summarise_empty_roster_fails() {
        assert!(matches!(summarise(&[]), Err(EngineError::EmptyRoster)));
    }
}
