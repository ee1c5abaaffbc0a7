//! Payroll period finalization.
//!
//! [`PayrollFinalizer`] drives the one-way OPEN -> FINALIZED transition:
//! every stored payroll detail of the period becomes one immutable ledger
//! expense entry, details are marked paid, and the period is locked against
//! further change — all inside a single atomic commit on the
//! [`ExpenseLedger`].

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{NewExpense, PayrollPeriod};

use super::repository::{
    ExpenseLedger, FinalizationRun, PayrollDetailRepository, PayrollPeriodRepository,
    StaffRepository,
};

/// Converts a period's payroll details into ledger expenses and locks the
/// period.
pub struct PayrollFinalizer {
    periods: Arc<dyn PayrollPeriodRepository>,
    details: Arc<dyn PayrollDetailRepository>,
    staff: Arc<dyn StaffRepository>,
    ledger: Arc<dyn ExpenseLedger>,
}

impl PayrollFinalizer {
    /// Creates a finalizer over the given repositories.
    pub fn new(
        periods: Arc<dyn PayrollPeriodRepository>,
        details: Arc<dyn PayrollDetailRepository>,
        staff: Arc<dyn StaffRepository>,
        ledger: Arc<dyn ExpenseLedger>,
    ) -> Self {
        Self {
            periods,
            details,
            staff,
            ledger,
        }
    }

    /// Finalizes a payroll period.
    ///
    /// Stages one expense per stored detail (description
    /// `"Gaji - {username}"`, amount = take-home pay) and commits the run
    /// atomically: category find-or-create, expense inserts, paid marking,
    /// and the conditional `is_finalized` flip either all happen or none
    /// do. A period that is already finalized conflicts instead of
    /// double-materializing money.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::MissingField`] for empty identifiers
    /// - [`PayrollError::PeriodNotFound`] for an unknown period
    /// - [`PayrollError::PeriodFinalized`] on double-finalize
    /// - [`PayrollError::Storage`] when the commit fails; nothing persists
    pub fn finalize(&self, tenant_id: &str, period_id: &str) -> PayrollResult<PayrollPeriod> {
        if tenant_id.trim().is_empty() {
            return Err(PayrollError::MissingField {
                field: "tenant_id".to_string(),
            });
        }
        if period_id.trim().is_empty() {
            return Err(PayrollError::MissingField {
                field: "period_id".to_string(),
            });
        }

        let period = self
            .periods
            .find_period(tenant_id, period_id)?
            .ok_or_else(|| PayrollError::PeriodNotFound {
                tenant_id: tenant_id.to_string(),
                period_id: period_id.to_string(),
            })?;
        if period.is_finalized {
            return Err(PayrollError::PeriodFinalized {
                period_id: period_id.to_string(),
            });
        }

        let details = self.details.list_details(tenant_id, period_id)?;
        let mut expenses = Vec::with_capacity(details.len());
        for detail in &details {
            let staff = self
                .staff
                .find_staff(tenant_id, &detail.staff_id)?
                .ok_or_else(|| PayrollError::StaffNotFound {
                    tenant_id: tenant_id.to_string(),
                    staff_id: detail.staff_id.clone(),
                })?;
            expenses.push(NewExpense {
                staff_id: staff.id,
                payroll_detail_id: detail.id.clone(),
                description: format!("Gaji - {}", staff.username),
                amount: detail.take_home_pay,
            });
        }

        let expense_count = expenses.len();
        let run = FinalizationRun {
            expenses,
            paid_at: Utc::now(),
        };

        match self.ledger.commit_finalization(tenant_id, period_id, run) {
            Ok(period) => {
                info!(
                    tenant_id,
                    period_id, expense_count, "Finalized payroll period"
                );
                Ok(period)
            }
            Err(err) => {
                error!(
                    tenant_id,
                    period_id,
                    error = %err,
                    "Payroll finalization failed; transaction rolled back"
                );
                Err(err)
            }
        }
    }
}
