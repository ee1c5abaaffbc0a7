//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type used to define the date
//! range over which attendance is aggregated and pay is computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tenant-defined pay period.
///
/// A period is created open (`is_finalized = false`) and transitions exactly
/// once to finalized, after which the period and its payroll details become
/// immutable.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     id: "period_2026_01".to_string(),
///     tenant_id: "tenant_001".to_string(),
///     period_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     is_finalized: false,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Unique identifier for the period.
    pub id: String,
    /// The tenant this period belongs to.
    pub tenant_id: String,
    /// The start date of the period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the period (inclusive).
    pub period_end: NaiveDate,
    /// Whether the period has been finalized. One-way: never reset.
    pub is_finalized: bool,
}

impl PayrollPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.period_start && date <= self.period_end
    }
}
