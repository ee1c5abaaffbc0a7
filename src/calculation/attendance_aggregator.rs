//! Attendance aggregation functionality.
//!
//! This module turns raw per-day attendance rows for a period into the
//! worked-hours-per-day facts the payroll calculator consumes. Rows without
//! a recorded checkout (no worked-hours total) are skipped silently; they
//! contribute nothing to overtime but are not an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// One day's worked-hours fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours worked on that date.
    pub worked_hours: Decimal,
    /// Whether the date falls on a Saturday or Sunday.
    pub is_weekend: bool,
}

/// The aggregated worked-day facts for a staff member over a period.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_worked_days;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![AttendanceRecord {
///     tenant_id: "tenant_001".to_string(),
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     check_in_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     check_out_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
///     total_hours: Some(Decimal::from_str("9").unwrap()),
/// }];
///
/// let summary = aggregate_worked_days(
///     &records,
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// assert_eq!(summary.recorded_days, 1);
/// assert_eq!(summary.total_hours(), Decimal::from_str("9").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The per-day worked-hours facts, one entry per recorded day.
    pub days: Vec<WorkedDay>,
    /// The count of days with recorded hours.
    pub recorded_days: u32,
}

impl AttendanceSummary {
    /// Returns the sum of worked hours across all recorded days.
    pub fn total_hours(&self) -> Decimal {
        self.days.iter().map(|d| d.worked_hours).sum()
    }
}

/// Aggregates raw attendance rows into worked-day facts.
///
/// Rows outside the `[period_start, period_end]` range (inclusive) and rows
/// with no `total_hours` are excluded from the worked-hours set.
///
/// # Arguments
///
/// * `records` - The raw attendance rows for one staff member
/// * `period_start` - The first date of the period (inclusive)
/// * `period_end` - The last date of the period (inclusive)
pub fn aggregate_worked_days(
    records: &[AttendanceRecord],
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> AttendanceSummary {
    let days: Vec<WorkedDay> = records
        .iter()
        .filter(|r| r.date >= period_start && r.date <= period_end)
        .filter_map(|r| {
            r.total_hours.map(|worked_hours| WorkedDay {
                date: r.date,
                worked_hours,
                is_weekend: r.is_weekend(),
            })
        })
        .collect();
    let recorded_days = days.len() as u32;

    AttendanceSummary {
        days,
        recorded_days,
    }
}
