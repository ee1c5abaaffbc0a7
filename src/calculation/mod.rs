//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: aggregating raw
//! attendance rows into worked-day facts, resolving a staff member's hourly
//! rate and overtime tier multipliers from tenant pay settings, and
//! combining both into a full pay breakdown in either calculation mode
//! (actual attendance or manually supplied hours).

mod attendance_aggregator;
mod overtime_rates;
mod payroll_calculator;

pub use attendance_aggregator::{AttendanceSummary, WorkedDay, aggregate_worked_days};
pub use overtime_rates::{OvertimeRates, WEEKEND_TIER_2_THRESHOLD, WEEKDAY_TIER_1_SPAN};
pub use payroll_calculator::{calculate_from_attendance, calculate_from_total_hours};
