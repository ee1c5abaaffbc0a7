//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod breakdown;
mod expense;
mod pay_period;
mod pay_setting;
mod payroll_detail;
mod staff;

pub use attendance::AttendanceRecord;
pub use breakdown::{MONEY_DECIMAL_PLACES, PayBreakdown};
pub use expense::{
    Expense, ExpenseCategory, NewExpense, PaymentType, SALARY_CATEGORY_CODE, SALARY_CATEGORY_NAME,
};
pub use pay_period::PayrollPeriod;
pub use pay_setting::PaySetting;
pub use payroll_detail::PayrollDetail;
pub use staff::{Salary, Staff};
