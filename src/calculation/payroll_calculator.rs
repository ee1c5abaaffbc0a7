//! Payroll calculation functionality.
//!
//! This module combines worked-day facts and resolved overtime rates into a
//! full pay breakdown. Two modes exist and are intentionally asymmetric:
//!
//! - **Actual-attendance mode** sums per-day overtime pay, where the first
//!   tier is a flat threshold bonus.
//! - **Manual mode** prices a single caller-supplied hours total against a
//!   monthly threshold, with the first tier prorated by `min(overtime, 1)`.
//!
//! The divergence is a preserved business rule; do not unify the formulas.

use rust_decimal::Decimal;

use crate::models::{PayBreakdown, Salary};

use super::attendance_aggregator::AttendanceSummary;
use super::overtime_rates::{OvertimeRates, WEEKDAY_TIER_1_SPAN};

/// Calculates a pay breakdown from aggregated attendance.
///
/// Sums worked hours, per-day overtime hours, and per-day overtime pay
/// across every recorded day, then applies bonus and deductions.
///
/// # Arguments
///
/// * `summary` - The aggregated worked-day facts for the period
/// * `rates` - The staff member's resolved hourly rate and tier multipliers
/// * `salary` - The staff member's salary record
/// * `bonus_amount` - Bonus added to the take-home pay
/// * `deductions_amount` - Deductions subtracted from the take-home pay
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{
///     AttendanceSummary, OvertimeRates, WorkedDay, calculate_from_attendance,
/// };
/// use payroll_engine::models::{PaySetting, Salary};
/// use chrono::NaiveDate;
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
/// let summary = AttendanceSummary {
///     days: vec![WorkedDay {
///         date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///         worked_hours: dec("9"),
///         is_weekend: false,
///     }],
///     recorded_days: 1,
/// };
///
/// let breakdown =
///     calculate_from_attendance(&summary, &rates, &salary, Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(breakdown.overtime_hours, dec("2"));
/// // hourly 10000: flat 15000 + 1h x 10000 x 2 = 35000
/// assert_eq!(breakdown.overtime_pay, dec("35000.00"));
/// ```
pub fn calculate_from_attendance(
    summary: &AttendanceSummary,
    rates: &OvertimeRates,
    salary: &Salary,
    bonus_amount: Decimal,
    deductions_amount: Decimal,
) -> PayBreakdown {
    let mut total_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut overtime_pay = Decimal::ZERO;

    for day in &summary.days {
        total_hours += day.worked_hours;
        let daily_overtime = rates.overtime_hours(day.worked_hours);
        overtime_hours += daily_overtime;
        overtime_pay += rates.daily_overtime_pay(daily_overtime, day.is_weekend);
    }

    PayBreakdown::new(
        salary.basic_salary,
        salary.fixed_allowance,
        total_hours,
        Decimal::from(summary.recorded_days),
        overtime_hours,
        overtime_pay,
        bonus_amount,
        deductions_amount,
    )
}

/// Calculates a pay breakdown from a manually supplied hours total.
///
/// Used when no attendance exists for a period. The monthly overtime
/// threshold is `normal_work_hours_per_day x (normal_work_hours_per_month /
/// normal_work_hours_per_day)`, and overtime is priced with weekday tiers
/// only; the first tier is prorated by `min(overtime_hours, 1)` rather than
/// paid as a flat bonus.
///
/// # Arguments
///
/// * `total_hours` - The caller-supplied worked-hours total
/// * `rates` - The staff member's resolved hourly rate and tier multipliers
/// * `salary` - The staff member's salary record
/// * `bonus_amount` - Bonus added to the take-home pay
/// * `deductions_amount` - Deductions subtracted from the take-home pay
pub fn calculate_from_total_hours(
    total_hours: Decimal,
    rates: &OvertimeRates,
    salary: &Salary,
    bonus_amount: Decimal,
    deductions_amount: Decimal,
) -> PayBreakdown {
    let normal_work_days = rates.normal_work_hours_per_month / rates.normal_work_hours_per_day;
    let threshold = rates.normal_work_hours_per_day * normal_work_days;

    let excess = total_hours - threshold;
    let overtime_hours = if excess > Decimal::ZERO {
        excess
    } else {
        Decimal::ZERO
    };

    let tier_1_hours = overtime_hours.min(WEEKDAY_TIER_1_SPAN);
    let mut overtime_pay = rates.hourly_rate * tier_1_hours * rates.overtime_rate_1;
    if overtime_hours > WEEKDAY_TIER_1_SPAN {
        let remaining = overtime_hours - WEEKDAY_TIER_1_SPAN;
        overtime_pay += rates.hourly_rate * remaining * rates.overtime_rate_2;
    }

    PayBreakdown::new(
        salary.basic_salary,
        salary.fixed_allowance,
        total_hours,
        normal_work_days,
        overtime_hours,
        overtime_pay,
        bonus_amount,
        deductions_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::attendance_aggregator::WorkedDay;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// hourly_rate = 10000, 8h day, 160h month (20 work days).
    fn test_rates() -> OvertimeRates {
        OvertimeRates {
            hourly_rate: dec("10000"),
            normal_work_hours_per_day: dec("8"),
            normal_work_hours_per_month: dec("160"),
            overtime_rate_1: dec("1.5"),
            overtime_rate_2: dec("2"),
            overtime_rate_weekend_1: dec("2"),
            overtime_rate_weekend_2: dec("3"),
            overtime_rate_weekend_3: dec("4"),
        }
    }

    fn test_salary() -> Salary {
        Salary {
            staff_id: "staff_001".to_string(),
            basic_salary: dec("1500000"),
            fixed_allowance: dec("100000"),
        }
    }

    fn day(d: u32, worked: &str, weekend: bool) -> WorkedDay {
        WorkedDay {
            date: NaiveDate::from_ymd_opt(2026, 1, d).unwrap(),
            worked_hours: dec(worked),
            is_weekend: weekend,
        }
    }

    fn summary(days: Vec<WorkedDay>) -> AttendanceSummary {
        let recorded_days = days.len() as u32;
        AttendanceSummary {
            days,
            recorded_days,
        }
    }

    // ==========================================================================
    // CALC-001: attendance mode sums hours, overtime, and per-day pay
    // ==========================================================================
    #[test]
    fn test_calc_001_attendance_mode_sums_days() {
        let rates = test_rates();
        let salary = test_salary();
        let summary = summary(vec![
            day(5, "8", false),  // no overtime
            day(6, "10", false), // 2h weekday: 15000 + 10000x1x2 = 35000
            day(10, "11", true), // 3h weekend: 20000 + 30000 + 40000 = 90000
        ]);

        let breakdown =
            calculate_from_attendance(&summary, &rates, &salary, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(breakdown.total_hours, dec("29"));
        assert_eq!(breakdown.overtime_hours, dec("5"));
        assert_eq!(breakdown.normal_work_days, dec("3"));
        assert_eq!(breakdown.overtime_pay, dec("125000.00"));
        assert_eq!(breakdown.take_home_pay, dec("1725000.00"));
        assert!(breakdown.invariant_holds());
    }

    // ==========================================================================
    // CALC-002: attendance mode with no overtime pays salary only
    // ==========================================================================
    #[test]
    fn test_calc_002_attendance_mode_no_overtime() {
        let rates = test_rates();
        let salary = test_salary();
        let summary = summary(vec![day(5, "8", false), day(6, "7.5", false)]);

        let breakdown =
            calculate_from_attendance(&summary, &rates, &salary, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.overtime_pay, dec("0.00"));
        assert_eq!(breakdown.take_home_pay, dec("1600000.00"));
    }

    // ==========================================================================
    // CALC-003: bonus and deductions flow into take-home pay
    // ==========================================================================
    #[test]
    fn test_calc_003_bonus_and_deductions() {
        let rates = test_rates();
        let salary = test_salary();
        let summary = summary(vec![day(5, "8", false)]);

        let breakdown =
            calculate_from_attendance(&summary, &rates, &salary, dec("250000"), dec("75000"));

        assert_eq!(breakdown.bonus_amount, dec("250000.00"));
        assert_eq!(breakdown.deductions_amount, dec("75000.00"));
        assert_eq!(breakdown.take_home_pay, dec("1775000.00"));
        assert!(breakdown.invariant_holds());
    }

    // ==========================================================================
    // CALC-004: manual mode under the threshold has no overtime
    // ==========================================================================
    #[test]
    fn test_calc_004_manual_mode_under_threshold() {
        let rates = test_rates();
        let salary = test_salary();

        let breakdown = calculate_from_total_hours(
            dec("150"),
            &rates,
            &salary,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        // threshold = 8 x (160 / 8) = 160
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.overtime_pay, dec("0.00"));
        assert_eq!(breakdown.normal_work_days, dec("20"));
        assert_eq!(breakdown.take_home_pay, dec("1600000.00"));
    }

    // ==========================================================================
    // CALC-005: manual mode prorates the first tier by min(overtime, 1)
    // ==========================================================================
    #[test]
    fn test_calc_005_manual_mode_prorated_first_tier() {
        let rates = test_rates();
        let salary = test_salary();

        let breakdown = calculate_from_total_hours(
            dec("160.5"),
            &rates,
            &salary,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        // 0.5h overtime: 10000 x 0.5 x 1.5 = 7500, unlike the flat 15000
        // the attendance mode would pay.
        assert_eq!(breakdown.overtime_hours, dec("0.5"));
        assert_eq!(breakdown.overtime_pay, dec("7500.00"));
        assert!(breakdown.invariant_holds());
    }

    // ==========================================================================
    // CALC-006: manual mode past the first hour adds the second tier
    // ==========================================================================
    #[test]
    fn test_calc_006_manual_mode_second_tier() {
        let rates = test_rates();
        let salary = test_salary();

        let breakdown = calculate_from_total_hours(
            dec("163"),
            &rates,
            &salary,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        // 3h overtime: 10000x1x1.5 + 10000x2x2 = 55000
        assert_eq!(breakdown.overtime_hours, dec("3"));
        assert_eq!(breakdown.overtime_pay, dec("55000.00"));
    }

    // ==========================================================================
    // CALC-007: the two modes diverge on matched inputs
    // ==========================================================================
    #[test]
    fn test_calc_007_modes_diverge_on_matched_inputs() {
        let rates = test_rates();
        let salary = test_salary();

        // 20 full days plus one day with 30 extra minutes: both modes see
        // 160.5 total hours and 0.5h overtime, but price it differently.
        let mut days: Vec<WorkedDay> = (0..20).map(|i| day(1 + i, "8", false)).collect();
        days[19].worked_hours = dec("8.5");
        let attendance =
            calculate_from_attendance(&summary(days), &rates, &salary, Decimal::ZERO, Decimal::ZERO);
        let manual = calculate_from_total_hours(
            dec("160.5"),
            &rates,
            &salary,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        assert_eq!(attendance.total_hours, manual.total_hours);
        assert_eq!(attendance.overtime_hours, manual.overtime_hours);
        // Flat threshold bonus vs prorated first tier.
        assert_eq!(attendance.overtime_pay, dec("15000.00"));
        assert_eq!(manual.overtime_pay, dec("7500.00"));
        // Both still satisfy the take-home invariant.
        assert!(attendance.invariant_holds());
        assert!(manual.invariant_holds());
    }

    // ==========================================================================
    // Property tests
    // ==========================================================================

    prop_compose! {
        fn arb_worked_day()(
            day_offset in 0u32..28,
            quarter_hours in 0u32..64, // 0 to 16h in 15-minute steps
            is_weekend in any::<bool>(),
        ) -> WorkedDay {
            WorkedDay {
                date: NaiveDate::from_ymd_opt(2026, 1, 1 + day_offset % 28).unwrap(),
                worked_hours: Decimal::from(quarter_hours) / Decimal::from(4),
                is_weekend,
            }
        }
    }

    proptest! {
        /// The reported overtime pay equals the sum of per-day overtime pay.
        #[test]
        fn prop_overtime_pay_is_sum_of_daily_pay(days in prop::collection::vec(arb_worked_day(), 0..31)) {
            let rates = test_rates();
            let salary = test_salary();
            let expected: Decimal = days
                .iter()
                .map(|d| rates.daily_overtime_pay(rates.overtime_hours(d.worked_hours), d.is_weekend))
                .sum();

            let breakdown = calculate_from_attendance(
                &summary(days),
                &rates,
                &salary,
                Decimal::ZERO,
                Decimal::ZERO,
            );

            prop_assert_eq!(
                breakdown.overtime_pay,
                expected.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            );
        }

        /// The take-home invariant holds for every attendance-mode breakdown.
        #[test]
        fn prop_attendance_invariant_holds(
            days in prop::collection::vec(arb_worked_day(), 0..31),
            bonus in 0u64..1_000_000,
            deductions in 0u64..1_000_000,
        ) {
            let breakdown = calculate_from_attendance(
                &summary(days),
                &test_rates(),
                &test_salary(),
                Decimal::from(bonus),
                Decimal::from(deductions),
            );
            prop_assert!(breakdown.invariant_holds());
        }

        /// The take-home invariant holds for every manual-mode breakdown.
        #[test]
        fn prop_manual_invariant_holds(
            quarter_hours in 0u32..1000,
            bonus in 0u64..1_000_000,
            deductions in 0u64..1_000_000,
        ) {
            let breakdown = calculate_from_total_hours(
                Decimal::from(quarter_hours) / Decimal::from(4),
                &test_rates(),
                &test_salary(),
                Decimal::from(bonus),
                Decimal::from(deductions),
            );
            prop_assert!(breakdown.invariant_holds());
        }
    }
}
