//! Parsing of a single roster line.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::{FIELD_DELIMITER, MIN_FIELDS_PER_RECORD};
use crate::error::{EngineError, EngineResult};
use crate::models::{Category, Employee, EmployeePay};

/// Parses one roster line into an employee.
///
/// Fields are `id, name, address, sin, amount`, split on a literal comma with
/// no quoting and no whitespace trimming. Fields past the fifth are ignored.
///
/// Returns `Ok(None)` when the id does not start with a digit; such records
/// are dropped rather than rejected. The `sin` is parsed before the id is
/// classified, so a bad `sin` fails even on a dropped line. The amount is
/// only parsed for records that are kept.
///
/// # Errors
///
/// - `MalformedRecord` if the line has fewer than five fields
/// - `InvalidField` if `sin` is not an `i64`, or the amount is not a number
///   or lies outside the `Decimal` range (about ±7.9e28)
///
/// # Examples
///
/// ```
/// use roster_stats::models::{Category, EmployeePay};
/// use roster_stats::roster::parse_record;
/// use rust_decimal::Decimal;
///
/// let employee = parse_record("001,A,Addr,111,500.0", 1).unwrap().unwrap();
/// assert_eq!(employee.category(), Category::Salaried);
/// assert_eq!(employee.pay, EmployeePay::Salaried { salary: Decimal::new(5000, 1) });
///
/// assert!(parse_record("X1,Name,Addr,1,1", 2).unwrap().is_none());
/// assert!(parse_record("001,A,Addr", 3).is_err());
/// ```
pub fn parse_record(line: &str, line_number: usize) -> EngineResult<Option<Employee>> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_FIELDS_PER_RECORD {
        return Err(EngineError::MalformedRecord {
            line: line_number,
            fields: fields.len(),
        });
    }

    let id = fields[0];
    let sin = fields[3]
        .parse::<i64>()
        .map_err(|_| EngineError::InvalidField {
            line: line_number,
            field: "sin",
            value: fields[3].to_string(),
        })?;

    let Some(category) = Category::from_id(id) else {
        return Ok(None);
    };

    let amount_field = match category {
        Category::Salaried => "salary",
        Category::Wages | Category::PartTime => "rate",
    };
    let amount = parse_amount(fields[4]).ok_or_else(|| EngineError::InvalidField {
        line: line_number,
        field: amount_field,
        value: fields[4].to_string(),
    })?;

    Ok(Some(Employee {
        id: id.to_string(),
        name: fields[1].to_string(),
        address: fields[2].to_string(),
        sin,
        pay: EmployeePay::new(category, amount),
    }))
}

/// Parses a monetary amount written either plainly or in scientific notation.
///
/// Amounts must fit in a `Decimal`, whose magnitude tops out near 7.9e28.
fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}
