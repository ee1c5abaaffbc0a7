//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] type: one row per
//! (tenant, staff, date) capturing a day's check-in/check-out times and
//! the worked-hours total derived from them.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's attendance for a staff member.
///
/// `check_out_time` and `total_hours` are `None` while the staff member has
/// not checked out; such rows contribute nothing to payroll aggregation but
/// are not an error.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = AttendanceRecord {
///     tenant_id: "tenant_001".to_string(),
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(), // Saturday
///     check_in_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     check_out_time: Some(NaiveTime::from_hms_opt(16, 0, 0).unwrap()),
///     total_hours: Some(Decimal::from_str("8").unwrap()),
/// };
/// assert!(record.is_weekend());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The tenant this record belongs to.
    pub tenant_id: String,
    /// The staff member this record belongs to.
    pub staff_id: String,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// The recorded check-in time.
    pub check_in_time: NaiveTime,
    /// The recorded check-out time, if the staff member has checked out.
    pub check_out_time: Option<NaiveTime>,
    /// The worked-hours total for the day, present once checked out.
    pub total_hours: Option<Decimal>,
}

impl AttendanceRecord {
    /// Returns true if the attendance date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record_on(date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            tenant_id: "tenant_001".to_string(),
            staff_id: "staff_001".to_string(),
            date,
            check_in_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            check_out_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            total_hours: Some(Decimal::from_str("9").unwrap()),
        }
    }

    #[test]
    fn test_is_weekend_saturday() {
        let record = record_on(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
        assert!(record.is_weekend());
    }

    #[test]
    fn test_is_weekend_sunday() {
        let record = record_on(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
        assert!(record.is_weekend());
    }

    #[test]
    fn test_is_weekend_false_for_monday() {
        let record = record_on(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
        assert!(!record.is_weekend());
    }

    #[test]
    fn test_deserialize_record_without_checkout() {
        let json = r#"{
            "tenant_id": "tenant_001",
            "staff_id": "staff_001",
            "date": "2026-01-19",
            "check_in_time": "08:00:00",
            "check_out_time": null,
            "total_hours": null
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert!(record.check_out_time.is_none());
        assert!(record.total_hours.is_none());
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = record_on(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap());
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
