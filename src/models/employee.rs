//! Employee model and related types.
//!
//! This module defines the Employee struct, its pay arrangement and the
//! Category enum used to group employees for reporting.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PART_TIME_WEEKLY_HOURS, WAGES_WEEKLY_HOURS};
use crate::error::{EngineError, EngineResult};

/// The employment category of a roster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fixed weekly salary.
    Salaried,
    /// Hourly wages for a regular week.
    Wages,
    /// Hourly wages for a part-time week.
    PartTime,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 3] = [Category::Salaried, Category::Wages, Category::PartTime];

    /// Determines the category from the first character of an employee id.
    ///
    /// Returns `None` when the id is empty or does not start with a digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::Category;
    ///
    /// assert_eq!(Category::from_id("001"), Some(Category::Salaried));
    /// assert_eq!(Category::from_id("512"), Some(Category::Wages));
    /// assert_eq!(Category::from_id("801"), Some(Category::PartTime));
    /// assert_eq!(Category::from_id("X1"), None);
    /// ```
    pub fn from_id(id: &str) -> Option<Self> {
        match id.chars().next()? {
            '0'..='4' => Some(Category::Salaried),
            '5'..='7' => Some(Category::Wages),
            '8'..='9' => Some(Category::PartTime),
            _ => None,
        }
    }

    /// The display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Salaried => "Salaried",
            Category::Wages => "Wages",
            Category::PartTime => "PartTime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The pay arrangement of an employee, one variant per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EmployeePay {
    /// Fixed weekly salary.
    Salaried {
        /// Weekly salary.
        salary: Decimal,
    },
    /// Hourly rate for a 40 hour week.
    Wages {
        /// Hourly rate.
        rate: Decimal,
    },
    /// Hourly rate for a 20 hour week.
    PartTime {
        /// Hourly rate.
        rate: Decimal,
    },
}

impl EmployeePay {
    /// Builds the pay arrangement for a category from the record's amount column.
    pub fn new(category: Category, amount: Decimal) -> Self {
        match category {
            Category::Salaried => EmployeePay::Salaried { salary: amount },
            Category::Wages => EmployeePay::Wages { rate: amount },
            Category::PartTime => EmployeePay::PartTime { rate: amount },
        }
    }

    /// Returns the category of this arrangement.
    pub fn category(&self) -> Category {
        match self {
            EmployeePay::Salaried { .. } => Category::Salaried,
            EmployeePay::Wages { .. } => Category::Wages,
            EmployeePay::PartTime { .. } => Category::PartTime,
        }
    }

    /// Projects the arrangement onto a weekly amount.
    ///
    /// Salaried pay is taken as is, wages are paid for 40 hours and
    /// part-time rates for 20 hours. Returns `None` if the product does not
    /// fit in a `Decimal`.
    pub fn weekly_pay(&self) -> Option<Decimal> {
        match *self {
            EmployeePay::Salaried { salary } => Some(salary),
            EmployeePay::Wages { rate } => rate.checked_mul(Decimal::from(WAGES_WEEKLY_HOURS)),
            EmployeePay::PartTime { rate } => {
                rate.checked_mul(Decimal::from(PART_TIME_WEEKLY_HOURS))
            }
        }
    }
}

/// A single roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee identifier; its first character selects the category.
    pub id: String,
    /// Employee name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Social insurance number. Carried but not used in any statistic.
    pub sin: i64,
    /// Pay arrangement.
    #[serde(flatten)]
    pub pay: EmployeePay,
}

impl Employee {
    /// Returns the employee's category.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_stats::models::{Category, Employee, EmployeePay};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "512".to_string(),
    ///     name: "B".to_string(),
    ///     address: "Addr".to_string(),
    ///     sin: 222,
    ///     pay: EmployeePay::Wages { rate: Decimal::new(100, 1) },
    /// };
    /// assert_eq!(employee.category(), Category::Wages);
    /// assert_eq!(employee.weekly_pay().unwrap(), Decimal::new(400, 0));
    /// ```
    pub fn category(&self) -> Category {
        self.pay.category()
    }

    /// Returns the employee's projected weekly pay.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the projection overflows.
    pub fn weekly_pay(&self) -> EngineResult<Decimal> {
        self.pay
            .weekly_pay()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("weekly pay of employee '{}' overflows", self.id),
            })
    }

    /// Returns the salary for salaried employees.
    pub fn salary(&self) -> Option<Decimal> {
        match self.pay {
            EmployeePay::Salaried { salary } => Some(salary),
            _ => None,
        }
    }

    /// Returns the hourly rate for wage employees.
    pub fn wages_rate(&self) -> Option<Decimal> {
        match self.pay {
            EmployeePay::Wages { rate } => Some(rate),
            _ => None,
        }
    }
}
