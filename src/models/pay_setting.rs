//! Tenant pay setting model.
//!
//! This module defines the [`PaySetting`] type: the per-tenant pay rules
//! that drive the hourly-rate and overtime-tier calculations, with the
//! documented defaults applied when a tenant has no stored setting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Default normal work hours per day.
pub const DEFAULT_NORMAL_WORK_HOURS_PER_DAY: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Default normal work hours per month, used to normalize the hourly rate.
pub const DEFAULT_NORMAL_WORK_HOURS_PER_MONTH: Decimal = Decimal::from_parts(173, 0, 0, false, 0);

/// Default weekday overtime tier 1 multiplier (1.5).
pub const DEFAULT_OVERTIME_RATE_1: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default weekday overtime tier 2 multiplier (2).
pub const DEFAULT_OVERTIME_RATE_2: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Default weekend overtime tier 1 multiplier (2).
pub const DEFAULT_OVERTIME_RATE_WEEKEND_1: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Default weekend overtime tier 2 multiplier (3).
pub const DEFAULT_OVERTIME_RATE_WEEKEND_2: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Default weekend overtime tier 3 multiplier (4).
pub const DEFAULT_OVERTIME_RATE_WEEKEND_3: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Per-tenant pay rules.
///
/// All rate fields are multipliers applied to the staff member's hourly
/// rate. Invariant: every multiplier is at least 1 and the hour divisors
/// are positive; [`PaySetting::validate`] enforces this before the setting
/// reaches any calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PaySetting;
/// use rust_decimal::Decimal;
///
/// let setting = PaySetting::default();
/// assert_eq!(setting.normal_work_hours_per_day, Decimal::from(7));
/// assert_eq!(setting.normal_work_hours_per_month, Decimal::from(173));
/// assert!(setting.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaySetting {
    /// Normal work hours in a single day; hours beyond this are overtime.
    pub normal_work_hours_per_day: Decimal,
    /// Normal work hours in a month; divisor for the hourly rate.
    pub normal_work_hours_per_month: Decimal,
    /// Weekday overtime tier 1 multiplier.
    pub overtime_rate_1: Decimal,
    /// Weekday overtime tier 2 multiplier.
    pub overtime_rate_2: Decimal,
    /// Weekend overtime tier 1 multiplier.
    pub overtime_rate_weekend_1: Decimal,
    /// Weekend overtime tier 2 multiplier.
    pub overtime_rate_weekend_2: Decimal,
    /// Weekend overtime tier 3 multiplier.
    pub overtime_rate_weekend_3: Decimal,
}

impl Default for PaySetting {
    fn default() -> Self {
        Self {
            normal_work_hours_per_day: DEFAULT_NORMAL_WORK_HOURS_PER_DAY,
            normal_work_hours_per_month: DEFAULT_NORMAL_WORK_HOURS_PER_MONTH,
            overtime_rate_1: DEFAULT_OVERTIME_RATE_1,
            overtime_rate_2: DEFAULT_OVERTIME_RATE_2,
            overtime_rate_weekend_1: DEFAULT_OVERTIME_RATE_WEEKEND_1,
            overtime_rate_weekend_2: DEFAULT_OVERTIME_RATE_WEEKEND_2,
            overtime_rate_weekend_3: DEFAULT_OVERTIME_RATE_WEEKEND_3,
        }
    }
}

impl PaySetting {
    /// Validates the setting's invariants.
    ///
    /// Hour divisors must be positive and every rate multiplier must be at
    /// least 1.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidPaySetting`] naming the offending
    /// field.
    pub fn validate(&self) -> PayrollResult<()> {
        let positive_hours = [
            ("normal_work_hours_per_day", self.normal_work_hours_per_day),
            (
                "normal_work_hours_per_month",
                self.normal_work_hours_per_month,
            ),
        ];
        for (field, value) in positive_hours {
            if value <= Decimal::ZERO {
                return Err(PayrollError::InvalidPaySetting {
                    field: field.to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }

        let multipliers = [
            ("overtime_rate_1", self.overtime_rate_1),
            ("overtime_rate_2", self.overtime_rate_2),
            ("overtime_rate_weekend_1", self.overtime_rate_weekend_1),
            ("overtime_rate_weekend_2", self.overtime_rate_weekend_2),
            ("overtime_rate_weekend_3", self.overtime_rate_weekend_3),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ONE {
                return Err(PayrollError::InvalidPaySetting {
                    field: field.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_values_match_documented_defaults() {
        let setting = PaySetting::default();
        assert_eq!(setting.normal_work_hours_per_day, dec("7"));
        assert_eq!(setting.normal_work_hours_per_month, dec("173"));
        assert_eq!(setting.overtime_rate_1, dec("1.5"));
        assert_eq!(setting.overtime_rate_2, dec("2"));
        assert_eq!(setting.overtime_rate_weekend_1, dec("2"));
        assert_eq!(setting.overtime_rate_weekend_2, dec("3"));
        assert_eq!(setting.overtime_rate_weekend_3, dec("4"));
    }

    #[test]
    fn test_default_setting_validates() {
        assert!(PaySetting::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_rate_below_one() {
        let setting = PaySetting {
            overtime_rate_1: dec("0.5"),
            ..PaySetting::default()
        };
        let err = setting.validate().unwrap_err();
        assert!(err.to_string().contains("overtime_rate_1"));
    }

    #[test]
    fn test_validate_rejects_zero_hours_per_month() {
        let setting = PaySetting {
            normal_work_hours_per_month: Decimal::ZERO,
            ..PaySetting::default()
        };
        let err = setting.validate().unwrap_err();
        assert!(err.to_string().contains("normal_work_hours_per_month"));
    }

    #[test]
    fn test_validate_accepts_rate_of_exactly_one() {
        let setting = PaySetting {
            overtime_rate_weekend_1: Decimal::ONE,
            ..PaySetting::default()
        };
        assert!(setting.validate().is_ok());
    }

    #[test]
    fn test_deserialize_setting() {
        let json = r#"{
            "normal_work_hours_per_day": "8",
            "normal_work_hours_per_month": "160",
            "overtime_rate_1": "1.5",
            "overtime_rate_2": "2",
            "overtime_rate_weekend_1": "2",
            "overtime_rate_weekend_2": "3",
            "overtime_rate_weekend_3": "4"
        }"#;

        let setting: PaySetting = serde_json::from_str(json).unwrap();
        assert_eq!(setting.normal_work_hours_per_day, dec("8"));
        assert_eq!(setting.normal_work_hours_per_month, dec("160"));
    }
}
