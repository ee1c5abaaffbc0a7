//! Payroll detail model.
//!
//! This module contains the [`PayrollDetail`] type: the stored result of a
//! payroll calculation, unique per (tenant, period, staff) and overwritten
//! in place on recalculation while the owning period is open.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayBreakdown;

/// A stored payroll calculation for one staff member in one period.
///
/// Invariant, exact over the stored values:
/// `take_home_pay = basic_salary_amount + fixed_allowance_amount +
/// overtime_pay + bonus_amount - deductions_amount`.
///
/// The row is created on the first calculation for its key and overwritten
/// on every recalculation while the period is open; once the period is
/// finalized the row is read-only and `is_paid`/`paid_at` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDetail {
    /// Unique identifier for this detail row.
    pub id: String,
    /// The tenant this detail belongs to.
    pub tenant_id: String,
    /// The payroll period this detail belongs to.
    pub payroll_period_id: String,
    /// The staff member this detail belongs to.
    pub staff_id: String,
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
    /// Net amount owed to the staff member.
    pub take_home_pay: Decimal,
    /// Whether the detail has been paid out (set on finalize).
    pub is_paid: bool,
    /// When the detail was paid out (set on finalize).
    pub paid_at: Option<DateTime<Utc>>,
}

impl PayrollDetail {
    /// Builds an unpaid detail row from a calculated breakdown.
    pub fn from_breakdown(
        id: String,
        tenant_id: String,
        payroll_period_id: String,
        staff_id: String,
        breakdown: &PayBreakdown,
    ) -> Self {
        Self {
            id,
            tenant_id,
            payroll_period_id,
            staff_id,
            basic_salary_amount: breakdown.basic_salary_amount,
            fixed_allowance_amount: breakdown.fixed_allowance_amount,
            total_hours: breakdown.total_hours,
            normal_work_days: breakdown.normal_work_days,
            overtime_hours: breakdown.overtime_hours,
            overtime_pay: breakdown.overtime_pay,
            bonus_amount: breakdown.bonus_amount,
            deductions_amount: breakdown.deductions_amount,
            take_home_pay: breakdown.take_home_pay,
            is_paid: false,
            paid_at: None,
        }
    }

    /// Overwrites the calculated fields in place from a fresh breakdown.
    ///
    /// Identity fields and payment state are left untouched.
    pub fn apply_breakdown(&mut self, breakdown: &PayBreakdown) {
        self.basic_salary_amount = breakdown.basic_salary_amount;
        self.fixed_allowance_amount = breakdown.fixed_allowance_amount;
        self.total_hours = breakdown.total_hours;
        self.normal_work_days = breakdown.normal_work_days;
        self.overtime_hours = breakdown.overtime_hours;
        self.overtime_pay = breakdown.overtime_pay;
        self.bonus_amount = breakdown.bonus_amount;
        self.deductions_amount = breakdown.deductions_amount;
        self.take_home_pay = breakdown.take_home_pay;
    }

    /// Checks the take-home-pay invariant over the stored values.
    pub fn invariant_holds(&self) -> bool {
        self.take_home_pay
            == self.basic_salary_amount + self.fixed_allowance_amount + self.overtime_pay
                + self.bonus_amount
                - self.deductions_amount
    }
}
