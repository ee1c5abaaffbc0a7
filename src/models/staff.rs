//! Staff and salary models.
//!
//! This module defines the [`Staff`] and [`Salary`] types. A staff member
//! belongs to exactly one tenant; a salary record is unique per staff member.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A staff member employed by a tenant.
///
/// Only the fields the payroll engine needs are modeled here; the wider
/// back office owns the full staff profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The tenant this staff member belongs to.
    pub tenant_id: String,
    /// The staff member's username, used in ledger expense descriptions.
    pub username: String,
}

/// A staff member's salary record, unique by staff id.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Salary {
///     staff_id: "staff_001".to_string(),
///     basic_salary: Decimal::from_str("1500000").unwrap(),
///     fixed_allowance: Decimal::from_str("230000").unwrap(),
/// };
/// assert_eq!(salary.total(), Decimal::from_str("1730000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    /// The staff member this salary belongs to.
    pub staff_id: String,
    /// The basic monthly salary amount. Non-negative.
    pub basic_salary: Decimal,
    /// The fixed monthly allowance amount. Non-negative.
    pub fixed_allowance: Decimal,
}

impl Salary {
    /// Returns the sum of basic salary and fixed allowance.
    ///
    /// This total is the numerator of the hourly-rate calculation.
    pub fn total(&self) -> Decimal {
        self.basic_salary + self.fixed_allowance
    }
}
