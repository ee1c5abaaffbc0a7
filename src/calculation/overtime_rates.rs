//! Overtime rate resolution functionality.
//!
//! This module resolves a staff member's hourly rate and the tenant's tier
//! multipliers into an [`OvertimeRates`] value that prices a single day's
//! overtime.
//!
//! ## Rate Structure
//!
//! **Overtime is threshold-triggered, not a continuous curve:**
//! - Weekday: crossing into overtime earns a flat `hourly x rate_1` bonus;
//!   hours past the first earn `hourly x rate_2` each.
//! - Weekend: crossing into overtime earns a flat `hourly x weekend_1`
//!   bonus, reaching 2 hours adds a flat `hourly x weekend_2` bonus, and
//!   hours past the second earn `hourly x weekend_3` each.
//!
//! The flat first tiers are an intentional business rule and must not be
//! smoothed into rate-times-hours pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::{PaySetting, Salary};

/// The span in hours of the weekday first tier. Overtime beyond this span
/// is priced per hour at the second-tier multiplier.
pub const WEEKDAY_TIER_1_SPAN: Decimal = Decimal::ONE;

/// The threshold in hours at which the flat weekend tier 2 bonus applies.
pub const WEEKEND_TIER_2_THRESHOLD: Decimal = Decimal::TWO;

/// A staff member's resolved hourly rate and overtime tier multipliers.
///
/// The hourly rate is monthly-normalized:
/// `(basic_salary + fixed_allowance) / normal_work_hours_per_month`, and is
/// used even when overtime is evaluated per day.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::OvertimeRates;
/// use payroll_engine::models::{PaySetting, Salary};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let setting = PaySetting {
///     normal_work_hours_per_month: Decimal::from_str("160").unwrap(),
///     ..PaySetting::default()
/// };
/// let salary = Salary {
///     staff_id: "staff_001".to_string(),
///     basic_salary: Decimal::from_str("1500000").unwrap(),
///     fixed_allowance: Decimal::from_str("100000").unwrap(),
/// };
///
/// let rates = OvertimeRates::resolve(&setting, &salary).unwrap();
/// assert_eq!(rates.hourly_rate, Decimal::from_str("10000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRates {
    /// The monthly-normalized hourly rate.
    pub hourly_rate: Decimal,
    /// Normal work hours in a single day; hours beyond this are overtime.
    pub normal_work_hours_per_day: Decimal,
    /// Normal work hours in a month.
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

impl OvertimeRates {
    /// Resolves the rates from a tenant pay setting and a staff salary.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PayrollError::InvalidPaySetting`] when the
    /// setting violates its invariants (non-positive hour divisors or
    /// multipliers below 1).
    pub fn resolve(setting: &PaySetting, salary: &Salary) -> PayrollResult<Self> {
        setting.validate()?;

        Ok(Self {
            hourly_rate: salary.total() / setting.normal_work_hours_per_month,
            normal_work_hours_per_day: setting.normal_work_hours_per_day,
            normal_work_hours_per_month: setting.normal_work_hours_per_month,
            overtime_rate_1: setting.overtime_rate_1,
            overtime_rate_2: setting.overtime_rate_2,
            overtime_rate_weekend_1: setting.overtime_rate_weekend_1,
            overtime_rate_weekend_2: setting.overtime_rate_weekend_2,
            overtime_rate_weekend_3: setting.overtime_rate_weekend_3,
        })
    }

    /// Returns the overtime portion of a day's worked hours.
    ///
    /// `max(worked_hours - normal_work_hours_per_day, 0)`.
    pub fn overtime_hours(&self, worked_hours: Decimal) -> Decimal {
        let excess = worked_hours - self.normal_work_hours_per_day;
        if excess > Decimal::ZERO {
            excess
        } else {
            Decimal::ZERO
        }
    }

    /// Prices a single day's overtime hours.
    ///
    /// Weekday tiers:
    /// - any overtime earns a flat `hourly_rate x overtime_rate_1` bonus;
    /// - hours past the first earn `hourly_rate x overtime_rate_2` each.
    ///
    /// Weekend tiers:
    /// - any overtime earns a flat `hourly_rate x overtime_rate_weekend_1`
    ///   bonus;
    /// - reaching 2 hours adds a flat `hourly_rate x overtime_rate_weekend_2`
    ///   bonus;
    /// - hours past the second earn `hourly_rate x overtime_rate_weekend_3`
    ///   each.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::OvertimeRates;
    /// use payroll_engine::models::{PaySetting, Salary};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let dec = |s: &str| Decimal::from_str(s).unwrap();
    /// let setting = PaySetting {
    ///     normal_work_hours_per_month: dec("160"),
    ///     ..PaySetting::default()
    /// };
    /// let salary = Salary {
    ///     staff_id: "staff_001".to_string(),
    ///     basic_salary: dec("1600000"),
    ///     fixed_allowance: Decimal::ZERO,
    /// };
    /// let rates = OvertimeRates::resolve(&setting, &salary).unwrap();
    ///
    /// // hourly = 10000; weekday 2h overtime: 10000x1.5 flat + 10000x1x2
    /// assert_eq!(rates.daily_overtime_pay(dec("2"), false), dec("35000"));
    /// // weekend 3h overtime: 10000x2 + 10000x3 + 10000x1x4
    /// assert_eq!(rates.daily_overtime_pay(dec("3"), true), dec("90000"));
    /// ```
    pub fn daily_overtime_pay(&self, overtime_hours: Decimal, is_weekend: bool) -> Decimal {
        if overtime_hours <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut pay = Decimal::ZERO;

        if is_weekend {
            // Flat bonus for crossing into overtime at all.
            pay += self.hourly_rate * self.overtime_rate_weekend_1;

            // Flat bonus for reaching the second hour.
            if overtime_hours >= WEEKEND_TIER_2_THRESHOLD {
                pay += self.hourly_rate * self.overtime_rate_weekend_2;
            }

            // Hours past the second are priced per hour.
            if overtime_hours > WEEKEND_TIER_2_THRESHOLD {
                let remaining = overtime_hours - WEEKEND_TIER_2_THRESHOLD;
                pay += self.hourly_rate * remaining * self.overtime_rate_weekend_3;
            }
        } else {
            // Flat bonus for crossing into overtime at all.
            pay += self.hourly_rate * self.overtime_rate_1;

            // Hours past the first are priced per hour.
            if overtime_hours > WEEKDAY_TIER_1_SPAN {
                let remaining = overtime_hours - WEEKDAY_TIER_1_SPAN;
                pay += self.hourly_rate * remaining * self.overtime_rate_2;
            }
        }

        pay
    }
}
