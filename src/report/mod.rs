//! Console report for roster statistics.
//!
//! [`PayrollSummary`] renders through `Display`:
//!
//! ```text
//! Average weekly pay for all employees: $353.33
//! Highest weekly pay for wage employees: $144.00, Name: B
//! Lowest salary for salaried employees: $450.00, Name: A
//! Percentage of employees in each category:
//! Salaried: 33.33%
//! Wages: 33.33%
//! PartTime: 33.33%
//! ```

mod format;

use std::fmt;

use crate::models::{PayExtreme, PayrollSummary};

pub use format::{format_currency, format_percent};

/// Writes an extreme as `amount, Name: name`, or `n/a` when absent.
fn write_extreme(f: &mut fmt::Formatter<'_>, extreme: Option<&PayExtreme>) -> fmt::Result {
    match extreme {
        Some(extreme) => write!(
            f,
            "{}, Name: {}",
            format_currency(extreme.value),
            extreme.employee.name
        ),
        None => f.write_str("n/a"),
    }
}

impl fmt::Display for PayrollSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average weekly pay for all employees: {}",
            format_currency(self.average_weekly_pay)
        )?;

        f.write_str("Highest weekly pay for wage employees: ")?;
        write_extreme(f, self.highest_wages_pay.as_ref())?;
        writeln!(f)?;

        f.write_str("Lowest salary for salaried employees: ")?;
        write_extreme(f, self.lowest_salary.as_ref())?;
        writeln!(f)?;

        writeln!(f, "Percentage of employees in each category:")?;
        for share in &self.category_shares {
            writeln!(f, "{}: {}", share.category, format_percent(share.fraction))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::calculation::summarise;
    use crate::models::Employee;
    use crate::roster::parse_record;

    fn roster(lines: &[&str]) -> Vec<Employee> {
        lines
            .iter()
            .filter_map(|line| parse_record(line, 1).unwrap())
            .collect()
    }

    #[test]
    fn test_report_layout() {
        let employees = roster(&[
            "001,A,Addr,111,500.0",
            "512,B,Addr,222,12.0",
            "801,C,Addr,333,8.0",
            "101,E,Addr,555,450.0",
        ]);
        let summary = summarise(&employees).unwrap();

        let expected = "\
Average weekly pay for all employees: $397.50
Highest weekly pay for wage employees: $144.00, Name: B
Lowest salary for salaried employees: $450.00, Name: E
Percentage of employees in each category:
Salaried: 50.00%
Wages: 25.00%
PartTime: 25.00%
";
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_report_marks_missing_extremes() {
        let employees = roster(&["801,C,Addr,333,8.0"]);
        let report = summarise(&employees).unwrap().to_string();

        assert!(report.contains("Highest weekly pay for wage employees: n/a\n"));
        assert!(report.contains("Lowest salary for salaried employees: n/a\n"));
        assert!(report.contains("PartTime: 100.00%\n"));
    }
}
