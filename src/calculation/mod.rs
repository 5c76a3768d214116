//! Calculation logic for roster statistics.
//!
//! This module contains the calculations run over a loaded roster: average
//! weekly pay, the highest paid wage employee, the lowest paid salaried
//! employee and the share of each employment category. None of them
//! modify the roster.

mod average_pay;
mod category_breakdown;
mod highest_wages;
mod lowest_salary;
mod summary;

pub use average_pay::{AverageWeeklyPayResult, calculate_average_weekly_pay};
pub use category_breakdown::{CategoryBreakdownResult, calculate_category_breakdown};
pub use highest_wages::{HighestWagesPayResult, capped_wages_pay, find_highest_wages_pay};
pub use lowest_salary::{LowestSalaryResult, find_lowest_salary};
pub use summary::summarise;
