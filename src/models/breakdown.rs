//! Pay breakdown model.
//!
//! This module contains the [`PayBreakdown`] type: the full output of a
//! payroll calculation before it is persisted as a payroll detail row.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places stored for monetary amounts (currency minor unit).
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// The complete pay breakdown for one staff member over one period.
///
/// Monetary components are rounded to the currency minor unit exactly once,
/// at construction; intermediates are never rounded. `take_home_pay` is
/// computed from the already-rounded components, so
/// `take_home_pay = basic_salary_amount + fixed_allowance_amount +
/// overtime_pay + bonus_amount - deductions_amount` holds exactly.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let breakdown = PayBreakdown::new(
///     dec("1500000"),
///     dec("230000"),
///     dec("40"),
///     dec("3"),
///     dec("5"),
///     dec("45000"),
///     dec("100000"),
///     dec("25000"),
/// );
/// assert_eq!(breakdown.take_home_pay, dec("1850000.00"));
/// assert!(breakdown.invariant_holds());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The basic salary component.
    pub basic_salary_amount: Decimal,
    /// The fixed allowance component.
    pub fixed_allowance_amount: Decimal,
    /// Total hours worked over the period.
    pub total_hours: Decimal,
    /// Number of days with recorded hours.
    pub normal_work_days: Decimal,
    /// Total overtime hours over the period.
    pub overtime_hours: Decimal,
    /// Total overtime pay over the period.
    pub overtime_pay: Decimal,
    /// Bonus added to the take-home pay.
    pub bonus_amount: Decimal,
    /// Deductions subtracted from the take-home pay.
    pub deductions_amount: Decimal,
    /// Net amount owed: the sum of all additions minus deductions.
    pub take_home_pay: Decimal,
}

impl PayBreakdown {
    /// Builds a breakdown from raw calculation outputs.
    ///
    /// Each monetary argument is rounded to [`MONEY_DECIMAL_PLACES`] with
    /// midpoints away from zero, then `take_home_pay` is derived from the
    /// rounded components.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        basic_salary_amount: Decimal,
        fixed_allowance_amount: Decimal,
        total_hours: Decimal,
        normal_work_days: Decimal,
        overtime_hours: Decimal,
        overtime_pay: Decimal,
        bonus_amount: Decimal,
        deductions_amount: Decimal,
    ) -> Self {
        let basic_salary_amount = round_money(basic_salary_amount);
        let fixed_allowance_amount = round_money(fixed_allowance_amount);
        let overtime_pay = round_money(overtime_pay);
        let bonus_amount = round_money(bonus_amount);
        let deductions_amount = round_money(deductions_amount);
        let take_home_pay = basic_salary_amount + fixed_allowance_amount + overtime_pay
            + bonus_amount
            - deductions_amount;

        Self {
            basic_salary_amount,
            fixed_allowance_amount,
            total_hours,
            normal_work_days,
            overtime_hours,
            overtime_pay,
            bonus_amount,
            deductions_amount,
            take_home_pay,
        }
    }

    /// Checks the take-home-pay invariant over the stored components.
    pub fn invariant_holds(&self) -> bool {
        self.take_home_pay
            == self.basic_salary_amount + self.fixed_allowance_amount + self.overtime_pay
                + self.bonus_amount
                - self.deductions_amount
    }
}

/// Rounds a monetary amount to the currency minor unit.
fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    // `round_dp_with_strategy` rounds but does not pad trailing zeros, so the
    // scale can be < MONEY_DECIMAL_PLACES (e.g. `35000` stays scale 0). Rescale
    // to pin the minor-unit representation the spec requires.
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}
