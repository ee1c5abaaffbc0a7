//! Repository traits consumed by the payroll components.
//!
//! The surrounding platform owns staff, salaries, settings, attendance,
//! periods, details, and the expense ledger. The engine consumes them
//! through these object-safe traits so every component can be exercised
//! against fakes; [`crate::store::InMemoryStore`] implements all of them.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::PayrollResult;
use crate::models::{
    AttendanceRecord, NewExpense, PaySetting, PayrollDetail, PayrollPeriod, Salary, Staff,
};

/// Read access to staff records, scoped by tenant.
pub trait StaffRepository: Send + Sync {
    /// Finds a staff member by tenant and id.
    fn find_staff(&self, tenant_id: &str, staff_id: &str) -> PayrollResult<Option<Staff>>;
}

/// Read access to salary records, unique per staff member.
pub trait SalaryRepository: Send + Sync {
    /// Finds the salary record for a staff member.
    fn find_salary(&self, staff_id: &str) -> PayrollResult<Option<Salary>>;
}

/// Read access to tenant pay settings.
pub trait PaySettingRepository: Send + Sync {
    /// Finds the pay setting for a tenant. `None` means the caller should
    /// fall back to the documented defaults.
    fn find_setting(&self, tenant_id: &str) -> PayrollResult<Option<PaySetting>>;
}

/// Range read access to attendance records.
pub trait AttendanceRepository: Send + Sync {
    /// Lists a staff member's attendance rows within a date range
    /// (inclusive on both ends).
    fn list_attendance(
        &self,
        tenant_id: &str,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<Vec<AttendanceRecord>>;
}

/// Read access to payroll periods, scoped by tenant.
pub trait PayrollPeriodRepository: Send + Sync {
    /// Finds a payroll period by tenant and id.
    fn find_period(&self, tenant_id: &str, period_id: &str) -> PayrollResult<Option<PayrollPeriod>>;
}

/// Read/write access to payroll detail rows.
pub trait PayrollDetailRepository: Send + Sync {
    /// Finds the one detail row for a (tenant, period, staff) key.
    fn find_detail(
        &self,
        tenant_id: &str,
        period_id: &str,
        staff_id: &str,
    ) -> PayrollResult<Option<PayrollDetail>>;

    /// Lists all detail rows for a period.
    fn list_details(&self, tenant_id: &str, period_id: &str) -> PayrollResult<Vec<PayrollDetail>>;

    /// Creates or overwrites the detail row identified by its key fields.
    fn save_detail(&self, detail: &PayrollDetail) -> PayrollResult<()>;
}

/// Everything a finalize run writes, staged before the atomic commit.
#[derive(Debug, Clone)]
pub struct FinalizationRun {
    /// One staged expense per payroll detail in the period.
    pub expenses: Vec<NewExpense>,
    /// The payout timestamp applied to every expense and detail.
    pub paid_at: DateTime<Utc>,
}

/// The transactional boundary of period finalization.
pub trait ExpenseLedger: Send + Sync {
    /// Atomically materializes a finalize run: finds or creates the
    /// tenant's salary expense category, inserts one expense per staged
    /// row, marks the referenced details paid, and flips the period's
    /// `is_finalized` flag — conditionally, so a period that is already
    /// finalized fails with a conflict instead of double-materializing.
    ///
    /// On any failure nothing is committed: zero expenses, no category,
    /// and an unchanged flag.
    fn commit_finalization(
        &self,
        tenant_id: &str,
        period_id: &str,
        run: FinalizationRun,
    ) -> PayrollResult<PayrollPeriod>;
}
