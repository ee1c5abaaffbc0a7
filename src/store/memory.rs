//! In-memory implementation of every repository trait.
//!
//! [`InMemoryStore`] keeps all state behind one mutex, which makes the
//! finalization commit genuinely atomic: the whole run executes under a
//! single lock, and any validation failure returns before any mutation.
//! A database-backed adapter would implement the same traits over real
//! transactions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceRecord, Expense, ExpenseCategory, PaySetting, PaymentType, PayrollDetail,
    PayrollPeriod, SALARY_CATEGORY_CODE, Salary, Staff,
};

use super::repository::{
    AttendanceRepository, ExpenseLedger, FinalizationRun, PaySettingRepository,
    PayrollDetailRepository, PayrollPeriodRepository, SalaryRepository, StaffRepository,
};

#[derive(Debug, Default)]
struct StoreState {
    staff: HashMap<(String, String), Staff>,
    salaries: HashMap<String, Salary>,
    settings: HashMap<String, PaySetting>,
    attendance: Vec<AttendanceRecord>,
    periods: HashMap<(String, String), PayrollPeriod>,
    details: HashMap<(String, String, String), PayrollDetail>,
    categories: Vec<ExpenseCategory>,
    expenses: Vec<Expense>,
}

/// An in-memory data store implementing every repository trait.
///
/// # Example
///
/// ```
/// use payroll_engine::store::{InMemoryStore, StaffRepository};
/// use payroll_engine::models::Staff;
///
/// let store = InMemoryStore::new();
/// store.insert_staff(Staff {
///     id: "staff_001".to_string(),
///     tenant_id: "tenant_001".to_string(),
///     username: "budi".to_string(),
/// });
///
/// let found = store.find_staff("tenant_001", "staff_001").unwrap();
/// assert!(found.is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> PayrollResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| PayrollError::Storage {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Inserts or replaces a staff member.
    pub fn insert_staff(&self, staff: Staff) {
        if let Ok(mut state) = self.state.lock() {
            state
                .staff
                .insert((staff.tenant_id.clone(), staff.id.clone()), staff);
        }
    }

    /// Inserts or replaces a salary record.
    pub fn insert_salary(&self, salary: Salary) {
        if let Ok(mut state) = self.state.lock() {
            state.salaries.insert(salary.staff_id.clone(), salary);
        }
    }

    /// Inserts or replaces a tenant pay setting.
    pub fn insert_setting(&self, tenant_id: &str, setting: PaySetting) {
        if let Ok(mut state) = self.state.lock() {
            state.settings.insert(tenant_id.to_string(), setting);
        }
    }

    /// Inserts an attendance row.
    pub fn insert_attendance(&self, record: AttendanceRecord) {
        if let Ok(mut state) = self.state.lock() {
            state.attendance.push(record);
        }
    }

    /// Inserts or replaces a payroll period.
    pub fn insert_period(&self, period: PayrollPeriod) {
        if let Ok(mut state) = self.state.lock() {
            state
                .periods
                .insert((period.tenant_id.clone(), period.id.clone()), period);
        }
    }

    /// Returns all expenses recorded for a tenant.
    pub fn expenses(&self, tenant_id: &str) -> Vec<Expense> {
        self.state
            .lock()
            .map(|state| {
                state
                    .expenses
                    .iter()
                    .filter(|e| e.tenant_id == tenant_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns all expense categories recorded for a tenant.
    pub fn categories(&self, tenant_id: &str) -> Vec<ExpenseCategory> {
        self.state
            .lock()
            .map(|state| {
                state
                    .categories
                    .iter()
                    .filter(|c| c.tenant_id == tenant_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl StaffRepository for InMemoryStore {
    fn find_staff(&self, tenant_id: &str, staff_id: &str) -> PayrollResult<Option<Staff>> {
        let state = self.lock()?;
        Ok(state
            .staff
            .get(&(tenant_id.to_string(), staff_id.to_string()))
            .cloned())
    }
}

impl SalaryRepository for InMemoryStore {
    fn find_salary(&self, staff_id: &str) -> PayrollResult<Option<Salary>> {
        let state = self.lock()?;
        Ok(state.salaries.get(staff_id).cloned())
    }
}

impl PaySettingRepository for InMemoryStore {
    fn find_setting(&self, tenant_id: &str) -> PayrollResult<Option<PaySetting>> {
        let state = self.lock()?;
        Ok(state.settings.get(tenant_id).cloned())
    }
}

impl AttendanceRepository for InMemoryStore {
    fn list_attendance(
        &self,
        tenant_id: &str,
        staff_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<Vec<AttendanceRecord>> {
        let state = self.lock()?;
        Ok(state
            .attendance
            .iter()
            .filter(|r| {
                r.tenant_id == tenant_id
                    && r.staff_id == staff_id
                    && r.date >= start
                    && r.date <= end
            })
            .cloned()
            .collect())
    }
}

impl PayrollPeriodRepository for InMemoryStore {
    fn find_period(&self, tenant_id: &str, period_id: &str) -> PayrollResult<Option<PayrollPeriod>> {
        let state = self.lock()?;
        Ok(state
            .periods
            .get(&(tenant_id.to_string(), period_id.to_string()))
            .cloned())
    }
}

impl PayrollDetailRepository for InMemoryStore {
    fn find_detail(
        &self,
        tenant_id: &str,
        period_id: &str,
        staff_id: &str,
    ) -> PayrollResult<Option<PayrollDetail>> {
        let state = self.lock()?;
        Ok(state
            .details
            .get(&(
                tenant_id.to_string(),
                period_id.to_string(),
                staff_id.to_string(),
            ))
            .cloned())
    }

    fn list_details(&self, tenant_id: &str, period_id: &str) -> PayrollResult<Vec<PayrollDetail>> {
        let state = self.lock()?;
        let mut details: Vec<PayrollDetail> = state
            .details
            .values()
            .filter(|d| d.tenant_id == tenant_id && d.payroll_period_id == period_id)
            .cloned()
            .collect();
        details.sort_by(|a, b| a.staff_id.cmp(&b.staff_id));
        Ok(details)
    }

    fn save_detail(&self, detail: &PayrollDetail) -> PayrollResult<()> {
        let mut state = self.lock()?;
        state.details.insert(
            (
                detail.tenant_id.clone(),
                detail.payroll_period_id.clone(),
                detail.staff_id.clone(),
            ),
            detail.clone(),
        );
        Ok(())
    }
}

impl ExpenseLedger for InMemoryStore {
    fn commit_finalization(
        &self,
        tenant_id: &str,
        period_id: &str,
        run: FinalizationRun,
    ) -> PayrollResult<PayrollPeriod> {
        let mut state = self.lock()?;

        // Conditional transition: a period that is already finalized must
        // conflict instead of double-materializing expenses.
        let period_key = (tenant_id.to_string(), period_id.to_string());
        let period = state
            .periods
            .get(&period_key)
            .ok_or_else(|| PayrollError::PeriodNotFound {
                tenant_id: tenant_id.to_string(),
                period_id: period_id.to_string(),
            })?;
        if period.is_finalized {
            return Err(PayrollError::PeriodFinalized {
                period_id: period_id.to_string(),
            });
        }

        // Every staged detail must still exist; validated before any write
        // so a failure leaves the store untouched.
        for staged in &run.expenses {
            let detail_key = (
                tenant_id.to_string(),
                period_id.to_string(),
                staged.staff_id.clone(),
            );
            if !state.details.contains_key(&detail_key) {
                return Err(PayrollError::Storage {
                    message: format!(
                        "payroll detail '{}' vanished during finalization of period '{}'",
                        staged.payroll_detail_id, period_id
                    ),
                });
            }
        }

        let category_id = match state
            .categories
            .iter()
            .find(|c| c.tenant_id == tenant_id && c.code == SALARY_CATEGORY_CODE)
        {
            Some(category) => category.id.clone(),
            None => {
                let category = ExpenseCategory::salary_category(
                    Uuid::new_v4().to_string(),
                    tenant_id.to_string(),
                );
                let id = category.id.clone();
                state.categories.push(category);
                id
            }
        };

        for staged in &run.expenses {
            state.expenses.push(Expense {
                id: Uuid::new_v4().to_string(),
                tenant_id: tenant_id.to_string(),
                category_id: category_id.clone(),
                staff_id: staged.staff_id.clone(),
                description: staged.description.clone(),
                amount: staged.amount,
                paid_at: run.paid_at,
                payment_type: PaymentType::Cash,
            });

            let detail_key = (
                tenant_id.to_string(),
                period_id.to_string(),
                staged.staff_id.clone(),
            );
            if let Some(detail) = state.details.get_mut(&detail_key) {
                detail.is_paid = true;
                detail.paid_at = Some(run.paid_at);
            }
        }

        let period = state
            .periods
            .get_mut(&period_key)
            .ok_or_else(|| PayrollError::Storage {
                message: format!("period '{period_id}' vanished during finalization"),
            })?;
        period.is_finalized = true;
        Ok(period.clone())
    }
}
